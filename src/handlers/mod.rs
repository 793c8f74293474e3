//! HTTP handlers for the company and invoice resources.

pub mod companies;
pub mod invoices;
