pub mod api;
pub mod pages;

use axum::{Router, routing::get};

use crate::handlers::health::{health_handler, ping_handler};
use crate::infra::app_state::AppState;

/// Liveness and readiness probes.
pub fn create_operational_router() -> Router<AppState> {
    Router::new()
        .route("/ping", get(ping_handler))
        .route("/health", get(health_handler))
}
