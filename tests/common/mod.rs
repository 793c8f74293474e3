#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use biztime::models::NewCompany;
use biztime::{app, AppState, BizStore, MemoryStore};
use serde_json::Value;
use tower::ServiceExt;

pub const BODY_LIMIT: usize = 64 * 1024;

pub fn bbc() -> NewCompany {
    NewCompany {
        code: "BBC".into(),
        name: "Brians Big Company".into(),
        description: "This is Brians company called Brians Big Company..".into(),
    }
}

/// Router over a fresh in-memory store holding the BBC company.
pub async fn seeded_app() -> (Router, MemoryStore) {
    let store = MemoryStore::new();
    store.insert_company(&bbc()).await.unwrap();
    (app(AppState::new(store.clone()), BODY_LIMIT), store)
}

pub async fn send_raw(app: &Router, method: &str, uri: &str, body: Body) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let body = match body {
        Some(v) => Body::from(v.to_string()),
        None => Body::empty(),
    };
    send_raw(app, method, uri, body).await
}

pub fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}
