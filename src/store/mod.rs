//! Data access for companies and invoices. Handlers only see [`BizStore`], so
//! the PostgreSQL store and the in-memory store are interchangeable.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use crate::error::AppError;
use crate::models::{
    Company, CompanyChanges, CompanySummary, Invoice, InvoiceSummary, NewCompany, NewInvoice,
};
use async_trait::async_trait;

#[async_trait]
pub trait BizStore: Send + Sync {
    /// Cheap round trip used by the readiness probe.
    async fn ping(&self) -> Result<(), AppError>;

    /// All companies ordered by code.
    async fn list_companies(&self) -> Result<Vec<CompanySummary>, AppError>;

    async fn get_company(&self, code: &str) -> Result<Option<Company>, AppError>;

    /// Ids of invoices whose `comp_code` is `code`, ordered by id.
    async fn invoice_ids_for_company(&self, code: &str) -> Result<Vec<i32>, AppError>;

    /// Fails with Conflict when the code is taken.
    async fn insert_company(&self, new: &NewCompany) -> Result<Company, AppError>;

    /// Returns None when no company has `code`.
    async fn update_company(
        &self,
        code: &str,
        changes: &CompanyChanges,
    ) -> Result<Option<Company>, AppError>;

    /// Returns false when no company has `code`. Invoices of the company go with it.
    async fn delete_company(&self, code: &str) -> Result<bool, AppError>;

    /// All invoices ordered by id.
    async fn list_invoices(&self) -> Result<Vec<InvoiceSummary>, AppError>;

    async fn get_invoice(&self, id: i32) -> Result<Option<Invoice>, AppError>;

    /// Assigns id, `paid = false` and today's `add_date`. Fails with BadRequest
    /// when `comp_code` names no company.
    async fn insert_invoice(&self, new: &NewInvoice) -> Result<Invoice, AppError>;

    /// Changes `amt` only. Returns None when no invoice has `id`.
    async fn update_invoice_amount(&self, id: i32, amt: f64) -> Result<Option<Invoice>, AppError>;

    /// Returns false when no invoice has `id`.
    async fn delete_invoice(&self, id: i32) -> Result<bool, AppError>;
}

pub(crate) fn duplicate_company(code: &str) -> AppError {
    AppError::Conflict(format!("company '{}' already exists", code))
}

pub(crate) fn unknown_company(code: &str) -> AppError {
    AppError::BadRequest(format!("no company with code '{}'", code))
}
