//! Row types for companies and invoices, plus the shapes handlers return.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Company as listed: code and name only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CompanySummary {
    pub code: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Company {
    pub code: String,
    pub name: String,
    pub description: String,
}

impl Company {
    pub fn summary(&self) -> CompanySummary {
        CompanySummary {
            code: self.code.clone(),
            name: self.name.clone(),
        }
    }
}

/// Company with the ids of the invoices that reference it, ordered by id.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CompanyDetail {
    #[serde(flatten)]
    pub company: Company,
    pub invoices: Vec<i32>,
}

#[derive(Clone, Debug)]
pub struct NewCompany {
    pub code: String,
    pub name: String,
    pub description: String,
}

#[derive(Clone, Debug)]
pub struct CompanyChanges {
    pub name: String,
    pub description: String,
}

/// Invoice as listed: id and owning company code only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct InvoiceSummary {
    pub id: i32,
    pub comp_code: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Invoice {
    pub id: i32,
    pub comp_code: String,
    pub amt: f64,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
}

impl Invoice {
    pub fn summary(&self) -> InvoiceSummary {
        InvoiceSummary {
            id: self.id,
            comp_code: self.comp_code.clone(),
        }
    }
}

/// Invoice with its owning company nested. `company` is `None` when the
/// company row disappeared between the two lookups.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InvoiceDetail {
    #[serde(flatten)]
    pub invoice: Invoice,
    pub company: Option<Company>,
}

#[derive(Clone, Debug)]
pub struct NewInvoice {
    pub comp_code: String,
    pub amt: f64,
}
