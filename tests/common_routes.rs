//! Health, readiness and version routes, body limit, and 500 mapping for store failures.

mod common;

use async_trait::async_trait;
use axum::{body::Body, http::StatusCode};
use biztime::models::{
    Company, CompanyChanges, CompanySummary, Invoice, InvoiceSummary, NewCompany, NewInvoice,
};
use biztime::{app, AppError, AppState, BizStore};
use common::{seeded_app, send, BODY_LIMIT};
use serde_json::json;

#[tokio::test]
async fn health_is_ok() {
    let (app, _) = seeded_app().await;
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn version_reports_package() {
    let (app, _) = seeded_app().await;
    let (_, body) = send(&app, "GET", "/version", None).await;
    assert_eq!(body["name"], "biztime");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn ready_with_reachable_store() {
    let (app, _) = seeded_app().await;
    let (status, body) = send(&app, "GET", "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok", "database": "ok"}));
}

/// Store that is down: every call fails.
struct DownStore;

fn down() -> AppError {
    AppError::Store("connection refused".into())
}

#[async_trait]
impl BizStore for DownStore {
    async fn ping(&self) -> Result<(), AppError> {
        Err(down())
    }
    async fn list_companies(&self) -> Result<Vec<CompanySummary>, AppError> {
        Err(down())
    }
    async fn get_company(&self, _code: &str) -> Result<Option<Company>, AppError> {
        Err(down())
    }
    async fn invoice_ids_for_company(&self, _code: &str) -> Result<Vec<i32>, AppError> {
        Err(down())
    }
    async fn insert_company(&self, _new: &NewCompany) -> Result<Company, AppError> {
        Err(down())
    }
    async fn update_company(
        &self,
        _code: &str,
        _changes: &CompanyChanges,
    ) -> Result<Option<Company>, AppError> {
        Err(down())
    }
    async fn delete_company(&self, _code: &str) -> Result<bool, AppError> {
        Err(down())
    }
    async fn list_invoices(&self) -> Result<Vec<InvoiceSummary>, AppError> {
        Err(down())
    }
    async fn get_invoice(&self, _id: i32) -> Result<Option<Invoice>, AppError> {
        Err(down())
    }
    async fn insert_invoice(&self, _new: &NewInvoice) -> Result<Invoice, AppError> {
        Err(down())
    }
    async fn update_invoice_amount(&self, _id: i32, _amt: f64) -> Result<Option<Invoice>, AppError> {
        Err(down())
    }
    async fn delete_invoice(&self, _id: i32) -> Result<bool, AppError> {
        Err(down())
    }
}

#[tokio::test]
async fn ready_reports_unavailable_store() {
    let app = app(AppState::new(DownStore), BODY_LIMIT);
    let (status, body) = send(&app, "GET", "/ready", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["database"], "unavailable");
}

#[tokio::test]
async fn store_failures_surface_as_500() {
    let app = app(AppState::new(DownStore), BODY_LIMIT);
    for uri in ["/companies", "/companies/BBC", "/invoices", "/invoices/1"] {
        let (status, body) = send(&app, "GET", uri, None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{}", uri);
        assert_eq!(body["error"]["code"], "store_error");
    }
}

#[tokio::test]
async fn validation_runs_before_the_store() {
    let app = app(AppState::new(DownStore), BODY_LIMIT);
    let (status, _) = send(&app, "POST", "/companies", Some(json!({"code": "x"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn oversized_body_is_413() {
    let (_, store) = seeded_app().await;
    let app = app(AppState::new(store), 16);
    let body = json!({"code": "ibm", "name": "IBM", "description": "Big blue."}).to_string();
    assert!(body.len() > 16);

    let (status, resp) = common::send_raw(&app, "POST", "/companies", Body::from(body)).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(resp["error"]["code"], "payload_too_large");
}

#[tokio::test]
async fn body_within_limit_is_accepted() {
    let (_, store) = seeded_app().await;
    let app = app(AppState::new(store), 1024);
    let (status, _) = send(
        &app,
        "POST",
        "/companies",
        Some(json!({"code": "ibm", "name": "IBM", "description": "Big blue."})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}
