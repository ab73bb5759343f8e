use std::sync::{Arc, Mutex};

/// Read-only token lookup injected into the gateway.
///
/// The gateway never writes credentials; login/register/logout own the
/// store's lifecycle.
pub trait CredentialProvider: Send + Sync {
    /// Returns the stored bearer token, if any.
    fn token(&self) -> Option<String>;
}

/// In-memory provider for tests and for holding a token obtained during the
/// current run.
#[derive(Debug, Default, Clone)]
pub struct MemoryCredentials {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        let credentials = Self::new();
        credentials.set(Some(token.into()));
        credentials
    }

    pub fn set(&self, token: Option<String>) {
        let mut guard = self
            .token
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = token;
    }
}

impl CredentialProvider for MemoryCredentials {
    fn token(&self) -> Option<String> {
        self.token
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}
