//! Resource routes, nested under `/companies` and `/invoices` by [`super::app`].

use crate::handlers::{companies, invoices};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn company_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(companies::list).post(companies::create))
        .route(
            "/:code",
            get(companies::read)
                .put(companies::update)
                .delete(companies::delete),
        )
        .with_state(state)
}

pub fn invoice_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(invoices::list).post(invoices::create))
        .route(
            "/:id",
            get(invoices::read)
                .put(invoices::update)
                .delete(invoices::delete),
        )
        .with_state(state)
}
