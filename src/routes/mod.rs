//! Router assembly.

mod common;
mod resources;

pub use common::common_routes;
pub use resources::{company_routes, invoice_routes};

use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Full application: common routes plus `/companies` and `/invoices`.
pub fn app(state: AppState, body_limit: usize) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(body_limit));

    Router::new()
        .merge(common_routes(state.clone()))
        .nest("/companies", company_routes(state.clone()))
        .nest("/invoices", invoice_routes(state))
        .layer(middleware)
}
