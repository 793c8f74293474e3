//! In-memory store for tests and local runs without a database.

use super::{duplicate_company, unknown_company, BizStore};
use crate::error::AppError;
use crate::models::{
    Company, CompanyChanges, CompanySummary, Invoice, InvoiceSummary, NewCompany, NewInvoice,
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
struct Tables {
    companies: BTreeMap<String, Company>,
    invoices: BTreeMap<i32, Invoice>,
    last_invoice_id: i32,
}

/// Mirrors the relational behavior the handlers depend on: ordering by key,
/// unique company codes, invoice foreign keys and cascade on company delete.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, AppError> {
        self.tables
            .read()
            .map_err(|e| AppError::Store(format!("failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, AppError> {
        self.tables
            .write()
            .map_err(|e| AppError::Store(format!("failed to acquire write lock: {}", e)))
    }
}

#[async_trait]
impl BizStore for MemoryStore {
    async fn ping(&self) -> Result<(), AppError> {
        self.read().map(|_| ())
    }

    async fn list_companies(&self) -> Result<Vec<CompanySummary>, AppError> {
        Ok(self.read()?.companies.values().map(Company::summary).collect())
    }

    async fn get_company(&self, code: &str) -> Result<Option<Company>, AppError> {
        Ok(self.read()?.companies.get(code).cloned())
    }

    async fn invoice_ids_for_company(&self, code: &str) -> Result<Vec<i32>, AppError> {
        Ok(self
            .read()?
            .invoices
            .values()
            .filter(|inv| inv.comp_code == code)
            .map(|inv| inv.id)
            .collect())
    }

    async fn insert_company(&self, new: &NewCompany) -> Result<Company, AppError> {
        let mut tables = self.write()?;
        if tables.companies.contains_key(&new.code) {
            return Err(duplicate_company(&new.code));
        }
        let company = Company {
            code: new.code.clone(),
            name: new.name.clone(),
            description: new.description.clone(),
        };
        tables.companies.insert(company.code.clone(), company.clone());
        Ok(company)
    }

    async fn update_company(
        &self,
        code: &str,
        changes: &CompanyChanges,
    ) -> Result<Option<Company>, AppError> {
        let mut tables = self.write()?;
        let Some(company) = tables.companies.get_mut(code) else {
            return Ok(None);
        };
        company.name = changes.name.clone();
        company.description = changes.description.clone();
        Ok(Some(company.clone()))
    }

    async fn delete_company(&self, code: &str) -> Result<bool, AppError> {
        let mut tables = self.write()?;
        if tables.companies.remove(code).is_none() {
            return Ok(false);
        }
        tables.invoices.retain(|_, inv| inv.comp_code != code);
        Ok(true)
    }

    async fn list_invoices(&self) -> Result<Vec<InvoiceSummary>, AppError> {
        Ok(self.read()?.invoices.values().map(Invoice::summary).collect())
    }

    async fn get_invoice(&self, id: i32) -> Result<Option<Invoice>, AppError> {
        Ok(self.read()?.invoices.get(&id).cloned())
    }

    async fn insert_invoice(&self, new: &NewInvoice) -> Result<Invoice, AppError> {
        let mut tables = self.write()?;
        if !tables.companies.contains_key(&new.comp_code) {
            return Err(unknown_company(&new.comp_code));
        }
        tables.last_invoice_id += 1;
        let invoice = Invoice {
            id: tables.last_invoice_id,
            comp_code: new.comp_code.clone(),
            amt: new.amt,
            paid: false,
            add_date: chrono::Local::now().date_naive(),
            paid_date: None,
        };
        tables.invoices.insert(invoice.id, invoice.clone());
        Ok(invoice)
    }

    async fn update_invoice_amount(&self, id: i32, amt: f64) -> Result<Option<Invoice>, AppError> {
        let mut tables = self.write()?;
        Ok(tables.invoices.get_mut(&id).map(|inv| {
            inv.amt = amt;
            inv.clone()
        }))
    }

    async fn delete_invoice(&self, id: i32) -> Result<bool, AppError> {
        Ok(self.write()?.invoices.remove(&id).is_some())
    }
}
