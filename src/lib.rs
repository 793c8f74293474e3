//! BizTime: REST backend for companies and their invoices over PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use routes::{app, common_routes, company_routes, invoice_routes};
pub use state::AppState;
pub use store::{BizStore, MemoryStore, PgStore};
