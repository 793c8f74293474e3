//! Response envelopes: every body is an object keyed by the resource name.

use crate::models::{CompanySummary, InvoiceSummary};
use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct CompanyList {
    pub companies: Vec<CompanySummary>,
}

#[derive(Serialize)]
pub struct CompanyOne<T> {
    pub company: T,
}

#[derive(Serialize)]
pub struct InvoiceList {
    pub invoices: Vec<InvoiceSummary>,
}

#[derive(Serialize)]
pub struct InvoiceOne<T> {
    pub invoice: T,
}

#[derive(Serialize)]
pub struct StatusBody {
    pub status: &'static str,
}

pub fn success_ok<T: Serialize>(body: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(body))
}

pub fn success_created<T: Serialize>(body: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(body))
}

/// `{"status": "Deleted"}` with 200.
pub fn deleted() -> (StatusCode, Json<StatusBody>) {
    success_ok(StatusBody { status: "Deleted" })
}
