use std::sync::{Arc, Mutex};

use axum::Router;
use client::{Client, MemoryCredentials, Notice, Notifier};

/// Notifier that records every notice so tests can assert the
/// one-notification-per-call contract.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

/// Serves `app` on an ephemeral local port and returns its base URL.
pub async fn spawn_server(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// A client against `app` with no stored token.
pub async fn anonymous_client(
    app: Router,
) -> (Client<MemoryCredentials, RecordingNotifier>, RecordingNotifier) {
    let base_url = spawn_server(app).await;
    let notifier = RecordingNotifier::new();
    let client = Client::new(&base_url, MemoryCredentials::new(), notifier.clone()).unwrap();
    (client, notifier)
}

/// A client against `app` with `token` stored.
pub async fn client_with_token(
    app: Router,
    token: &str,
) -> (Client<MemoryCredentials, RecordingNotifier>, RecordingNotifier) {
    let base_url = spawn_server(app).await;
    let notifier = RecordingNotifier::new();
    let client = Client::new(
        &base_url,
        MemoryCredentials::with_token(token),
        notifier.clone(),
    )
    .unwrap();
    (client, notifier)
}
