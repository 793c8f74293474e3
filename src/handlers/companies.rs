//! Company handlers: list, read (with invoice ids), create, update, delete.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::models::{CompanyChanges, CompanyDetail, NewCompany};
use crate::response::{deleted, success_created, success_ok, CompanyList, CompanyOne};
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

/// GET /companies — `{companies: [{code, name}, ...]}`.
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let companies = state.store.list_companies().await?;
    Ok(success_ok(CompanyList { companies }))
}

/// GET /companies/:code — `{company: {code, name, description, invoices: [id, ...]}}`.
pub async fn read(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let company = state
        .store
        .get_company(&code)
        .await?
        .ok_or_else(|| AppError::NotFound(code))?;
    let invoices = state.store.invoice_ids_for_company(&company.code).await?;
    Ok(success_ok(CompanyOne {
        company: CompanyDetail { company, invoices },
    }))
}

/// POST /companies — body `{code, name, description}`; 201 `{company: {...}}`.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let new = NewCompany {
        code: RequestValidator::required_text(&body, "code")?,
        name: RequestValidator::required_text(&body, "name")?,
        description: RequestValidator::required_text(&body, "description")?,
    };
    let company = state.store.insert_company(&new).await?;
    tracing::info!(code = %company.code, "company created");
    Ok(success_created(CompanyOne { company }))
}

/// PUT /companies/:code — body `{name, description}`; `{company: {...}}`.
pub async fn update(
    State(state): State<AppState>,
    Path(code): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let changes = CompanyChanges {
        name: RequestValidator::required_text(&body, "name")?,
        description: RequestValidator::required_text(&body, "description")?,
    };
    let company = state
        .store
        .update_company(&code, &changes)
        .await?
        .ok_or_else(|| AppError::NotFound(code))?;
    Ok(success_ok(CompanyOne { company }))
}

/// DELETE /companies/:code — `{status: "Deleted"}`.
pub async fn delete(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !state.store.delete_company(&code).await? {
        return Err(AppError::NotFound(code));
    }
    tracing::info!(code = %code, "company deleted");
    Ok(deleted())
}
