use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::Query,
    routing::{delete, get, patch, post},
};
use chrono::NaiveDate;
use client::{NoticeKind, Session, SessionStore};
use serde_json::{Value, json};

use api_types::auth::Credentials;
use api_types::debt::DebtNew;
use api_types::transaction::{TransactionFilters, TransactionKind};

mod support;

use support::{anonymous_client, client_with_token};

fn envelope(data: Value, message: &str) -> Json<Value> {
    Json(json!({ "success": true, "data": data, "message": message }))
}

fn sample_debt() -> Value {
    json!({
        "id": 1,
        "user_id": 1,
        "creditor_id": null,
        "description": "Cena",
        "original_amount": "100",
        "pending_amount": "100",
        "due_date": "2026-09-30",
        "paid": false
    })
}

#[tokio::test]
async fn debt_create_rewrites_pending_amount_and_drops_zero_creditor() {
    let seen = Arc::new(Mutex::new(None::<Value>));
    let seen_handler = seen.clone();
    let app = Router::new().route(
        "/debts",
        post(move |Json(body): Json<Value>| {
            let seen = seen_handler.clone();
            async move {
                *seen.lock().unwrap() = Some(body);
                envelope(sample_debt(), "Deuda creada")
            }
        }),
    );
    let (client, notifier) = client_with_token(app, "abc123").await;

    let debt = DebtNew {
        user_id: 1,
        creditor_id: Some(0),
        description: "Cena".to_string(),
        original_amount: 100.0,
        pending_amount: 0.0,
        due_date: NaiveDate::from_ymd_opt(2026, 9, 30).unwrap(),
    };
    let created = client.debts().create(debt).await.unwrap();

    assert_eq!(created.description, "Cena");
    let body = seen.lock().unwrap().clone().unwrap();
    assert_eq!(body["pending_amount"], body["original_amount"]);
    assert!(body.get("creditor_id").is_none());
    let notices = notifier.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].message, "Deuda creada");
}

#[tokio::test]
async fn payment_method_unshare_sends_explicit_null() {
    let seen = Arc::new(Mutex::new(None::<Value>));
    let seen_handler = seen.clone();
    let app = Router::new().route(
        "/payment-methods/3",
        patch(move |Json(body): Json<Value>| {
            let seen = seen_handler.clone();
            async move {
                *seen.lock().unwrap() = Some(body);
                envelope(
                    json!({
                        "id": 3,
                        "user_id": 1,
                        "name": "Visa",
                        "type": "CARD",
                        "last_four_digits": "4242",
                        "shared_user_id": null
                    }),
                    "",
                )
            }
        }),
    );
    let (client, notifier) = client_with_token(app, "abc123").await;

    let method = client.payment_methods().unshare(3).await.unwrap();

    assert_eq!(method.shared_user_id, None);
    let body = seen.lock().unwrap().clone().unwrap();
    assert_eq!(body, json!({ "shared_user_id": null }));
    assert!(notifier.notices().is_empty());
}

#[tokio::test]
async fn transaction_filter_renders_set_fields_into_the_query() {
    let seen = Arc::new(Mutex::new(None::<HashMap<String, String>>));
    let seen_handler = seen.clone();
    let app = Router::new().route(
        "/users/9/transactions/filter",
        get(move |Query(params): Query<HashMap<String, String>>| {
            let seen = seen_handler.clone();
            async move {
                *seen.lock().unwrap() = Some(params);
                envelope(json!([]), "")
            }
        }),
    );
    let (client, _notifier) = client_with_token(app, "abc123").await;

    let filters = TransactionFilters {
        start_date: NaiveDate::from_ymd_opt(2026, 8, 1),
        kind: Some(TransactionKind::Expense),
        max_amount: Some(250.0),
        ..TransactionFilters::default()
    };
    let transactions = client.transactions().filter(9, &filters).await.unwrap();

    assert!(transactions.is_empty());
    let params = seen.lock().unwrap().clone().unwrap();
    assert_eq!(params.len(), 3);
    assert_eq!(params["startDate"], "2026-08-01");
    assert_eq!(params["type"], "EXPENSE");
    assert_eq!(params["max_amount"], "250");
}

#[tokio::test]
async fn run_pending_scheduled_posts_without_a_body() {
    let app = Router::new().route(
        "/scheduled-transactions/pending",
        post(|| async { envelope(json!({ "executed_count": 3 }), "3 ejecutadas") }),
    );
    let (client, notifier) = client_with_token(app, "abc123").await;

    let result = client.transactions().run_pending_scheduled().await.unwrap();

    assert_eq!(result.executed_count, 3);
    let notices = notifier.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::Success);
}

#[tokio::test]
async fn delete_returns_the_deleted_flag() {
    let app = Router::new().route(
        "/goals/5",
        delete(|| async { envelope(json!({ "deleted": true }), "Meta eliminada") }),
    );
    let (client, notifier) = client_with_token(app, "abc123").await;

    let deleted = client.goals().delete(5).await.unwrap();

    assert!(deleted.deleted);
    assert_eq!(notifier.notices().len(), 1);
}

#[tokio::test]
async fn login_yields_a_session_the_store_persists() {
    let app = Router::new().route(
        "/auth/login",
        post(|| async {
            envelope(
                json!({
                    "id": 4,
                    "email": "a@b.com",
                    "name": "Ana",
                    "username": "ana",
                    "token": "tok-4"
                }),
                "Bienvenida",
            )
        }),
    );
    let (client, notifier) = anonymous_client(app).await;

    let auth = client
        .auth()
        .login(&Credentials {
            email: "a@b.com".to_string(),
            password: "x".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(auth.token, "tok-4");
    assert_eq!(notifier.notices().len(), 1);

    let path = std::env::temp_dir().join(format!(
        "monedero_login_session_{}.json",
        std::process::id()
    ));
    let store = SessionStore::new(&path);
    store.save(&Session::from(&auth)).unwrap();
    assert_eq!(
        client::CredentialProvider::token(&store),
        Some("tok-4".to_string())
    );
    store.clear().unwrap();
}
