//! Invoice handlers: list, read (with owning company), create, update amount, delete.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::models::{InvoiceDetail, NewInvoice};
use crate::response::{deleted, success_created, success_ok, InvoiceList, InvoiceOne};
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

/// Non-integers are 400. An integer outside the id column's range can name no
/// invoice, so it is 404 like any other missing id.
fn parse_id(id_str: &str) -> Result<i32, AppError> {
    let digits = id_str.strip_prefix('-').unwrap_or(id_str);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::BadRequest(format!("invalid invoice id: {}", id_str)));
    }
    id_str
        .parse()
        .map_err(|_| AppError::NotFound(id_str.to_string()))
}

/// GET /invoices — `{invoices: [{id, comp_code}, ...]}`.
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let invoices = state.store.list_invoices().await?;
    Ok(success_ok(InvoiceList { invoices }))
}

/// GET /invoices/:id — `{invoice: {id, comp_code, amt, paid, add_date, paid_date, company}}`.
///
/// Two lookups without a transaction: if the company is deleted in between,
/// `company` comes back as null.
pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let invoice = state
        .store
        .get_invoice(id)
        .await?
        .ok_or_else(|| AppError::NotFound(id_str))?;
    let company = state.store.get_company(&invoice.comp_code).await?;
    if company.is_none() {
        tracing::warn!(id, comp_code = %invoice.comp_code, "owning company missing");
    }
    Ok(success_ok(InvoiceOne {
        invoice: InvoiceDetail { invoice, company },
    }))
}

/// POST /invoices — body `{comp_code, amt}`; 201 `{invoice: {...}}`.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let new = NewInvoice {
        comp_code: RequestValidator::required_text(&body, "comp_code")?,
        amt: RequestValidator::required_amount(&body, "amt")?,
    };
    let invoice = state.store.insert_invoice(&new).await?;
    tracing::info!(id = invoice.id, comp_code = %invoice.comp_code, "invoice created");
    Ok(success_created(InvoiceOne { invoice }))
}

/// PUT /invoices/:id — body `{amt}`; `{invoice: {...}}`. Only the amount changes.
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let amt = RequestValidator::required_amount(&body, "amt")?;
    let id = parse_id(&id_str)?;
    let invoice = state
        .store
        .update_invoice_amount(id, amt)
        .await?
        .ok_or_else(|| AppError::NotFound(id_str))?;
    Ok(success_ok(InvoiceOne { invoice }))
}

/// DELETE /invoices/:id — `{status: "Deleted"}`.
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    if !state.store.delete_invoice(id).await? {
        return Err(AppError::NotFound(id_str));
    }
    tracing::info!(id, "invoice deleted");
    Ok(deleted())
}
