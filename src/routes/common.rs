//! Liveness, readiness and build info for the BizTime service.

use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

#[derive(Serialize)]
struct Liveness {
    status: &'static str,
}

/// Outcome of a store round trip. Serialized as `{status, database}`; a store
/// that cannot be reached answers 503.
#[derive(Serialize)]
struct Readiness {
    status: &'static str,
    database: &'static str,
}

impl Readiness {
    const UP: Readiness = Readiness { status: "ok", database: "ok" };
    const DOWN: Readiness = Readiness { status: "degraded", database: "unavailable" };

    fn is_up(&self) -> bool {
        self.database == "ok"
    }
}

impl IntoResponse for Readiness {
    fn into_response(self) -> Response {
        let status = if self.is_up() {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        };
        (status, Json(self)).into_response()
    }
}

#[derive(Serialize)]
struct BuildInfo {
    name: &'static str,
    version: &'static str,
}

const BUILD: BuildInfo = BuildInfo {
    name: env!("CARGO_PKG_NAME"),
    version: env!("CARGO_PKG_VERSION"),
};

async fn liveness() -> Json<Liveness> {
    Json(Liveness { status: "ok" })
}

async fn readiness(State(state): State<AppState>) -> Readiness {
    match state.store.ping().await {
        Ok(()) => Readiness::UP,
        Err(e) => {
            tracing::warn!(error = %e, "store unreachable");
            Readiness::DOWN
        }
    }
}

async fn build_info() -> Json<BuildInfo> {
    Json(BUILD)
}

/// GET /health, GET /ready (store round trip), GET /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(liveness))
        .route("/ready", get(readiness))
        .route("/version", get(build_info))
        .with_state(state)
}
