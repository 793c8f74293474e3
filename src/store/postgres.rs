//! PostgreSQL store. One parameterized statement per call.

use super::{duplicate_company, unknown_company, BizStore};
use crate::error::AppError;
use crate::models::{
    Company, CompanyChanges, CompanySummary, Invoice, InvoiceSummary, NewCompany, NewInvoice,
};
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

// Bytewise code order, independent of the database collation; MemoryStore sorts the same way.
const LIST_COMPANIES: &str = "SELECT code, name FROM companies ORDER BY code COLLATE \"C\"";
const GET_COMPANY: &str = "SELECT code, name, description FROM companies WHERE code = $1";
const COMPANY_INVOICE_IDS: &str = "SELECT id FROM invoices WHERE comp_code = $1 ORDER BY id";
const INSERT_COMPANY: &str = "INSERT INTO companies (code, name, description) VALUES ($1, $2, $3) \
     RETURNING code, name, description";
const UPDATE_COMPANY: &str = "UPDATE companies SET name = $1, description = $2 WHERE code = $3 \
     RETURNING code, name, description";
const DELETE_COMPANY: &str = "DELETE FROM companies WHERE code = $1 RETURNING code";

const INVOICE_COLUMNS: &str = "id, comp_code, amt, paid, add_date, paid_date";
const LIST_INVOICES: &str = "SELECT id, comp_code FROM invoices ORDER BY id";
const DELETE_INVOICE: &str = "DELETE FROM invoices WHERE id = $1 RETURNING id";

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        PgStore { pool }
    }

    /// Open a pool of at most `max_connections` connections.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(PgStore { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Map constraint violations raised by the store onto request errors; anything
/// else stays an unclassified database error.
fn constraint_error(e: sqlx::Error, code: &str) -> AppError {
    match e.as_database_error() {
        Some(db) if db.is_unique_violation() => duplicate_company(code),
        Some(db) if db.is_foreign_key_violation() => unknown_company(code),
        Some(db) if db.is_check_violation() => AppError::BadRequest(db.message().to_string()),
        _ => AppError::Db(e),
    }
}

#[async_trait]
impl BizStore for PgStore {
    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }

    async fn list_companies(&self) -> Result<Vec<CompanySummary>, AppError> {
        tracing::debug!(sql = %LIST_COMPANIES, "query");
        let rows = sqlx::query_as::<_, CompanySummary>(LIST_COMPANIES)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_company(&self, code: &str) -> Result<Option<Company>, AppError> {
        tracing::debug!(sql = %GET_COMPANY, code = %code, "query");
        let row = sqlx::query_as::<_, Company>(GET_COMPANY)
            .bind(code)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn invoice_ids_for_company(&self, code: &str) -> Result<Vec<i32>, AppError> {
        tracing::debug!(sql = %COMPANY_INVOICE_IDS, code = %code, "query");
        let ids: Vec<(i32,)> = sqlx::query_as(COMPANY_INVOICE_IDS)
            .bind(code)
            .fetch_all(&self.pool)
            .await?;
        Ok(ids.into_iter().map(|(id,)| id).collect())
    }

    async fn insert_company(&self, new: &NewCompany) -> Result<Company, AppError> {
        tracing::debug!(sql = %INSERT_COMPANY, code = %new.code, "query");
        sqlx::query_as::<_, Company>(INSERT_COMPANY)
            .bind(&new.code)
            .bind(&new.name)
            .bind(&new.description)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| constraint_error(e, &new.code))
    }

    async fn update_company(
        &self,
        code: &str,
        changes: &CompanyChanges,
    ) -> Result<Option<Company>, AppError> {
        tracing::debug!(sql = %UPDATE_COMPANY, code = %code, "query");
        let row = sqlx::query_as::<_, Company>(UPDATE_COMPANY)
            .bind(&changes.name)
            .bind(&changes.description)
            .bind(code)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete_company(&self, code: &str) -> Result<bool, AppError> {
        tracing::debug!(sql = %DELETE_COMPANY, code = %code, "query");
        let row: Option<(String,)> = sqlx::query_as(DELETE_COMPANY)
            .bind(code)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }

    async fn list_invoices(&self) -> Result<Vec<InvoiceSummary>, AppError> {
        tracing::debug!(sql = %LIST_INVOICES, "query");
        let rows = sqlx::query_as::<_, InvoiceSummary>(LIST_INVOICES)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_invoice(&self, id: i32) -> Result<Option<Invoice>, AppError> {
        let sql = format!("SELECT {} FROM invoices WHERE id = $1", INVOICE_COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Invoice>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert_invoice(&self, new: &NewInvoice) -> Result<Invoice, AppError> {
        let sql = format!(
            "INSERT INTO invoices (comp_code, amt) VALUES ($1, $2) RETURNING {}",
            INVOICE_COLUMNS
        );
        tracing::debug!(sql = %sql, comp_code = %new.comp_code, "query");
        sqlx::query_as::<_, Invoice>(&sql)
            .bind(&new.comp_code)
            .bind(new.amt)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| constraint_error(e, &new.comp_code))
    }

    async fn update_invoice_amount(&self, id: i32, amt: f64) -> Result<Option<Invoice>, AppError> {
        let sql = format!(
            "UPDATE invoices SET amt = $1 WHERE id = $2 RETURNING {}",
            INVOICE_COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Invoice>(&sql)
            .bind(amt)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| match e.as_database_error() {
                Some(db) if db.is_check_violation() => AppError::BadRequest(db.message().to_string()),
                _ => AppError::Db(e),
            })?;
        Ok(row)
    }

    async fn delete_invoice(&self, id: i32) -> Result<bool, AppError> {
        tracing::debug!(sql = %DELETE_INVOICE, id, "query");
        let row: Option<(i32,)> = sqlx::query_as(DELETE_INVOICE)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }
}
