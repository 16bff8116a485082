//! # Mousse Server
//!
//! HTTP front for the foam catalogue: a read-only JSON API under `/api`,
//! server-rendered page shells that consume it, and `/ping` and `/health`
//! probes.

pub mod handlers;
pub mod infra;
pub mod pages;
pub mod routes;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use infra::app_state::AppState;

/// Builds the complete application router.
pub fn create_app(state: AppState) -> Router {
    let cors = infra::cors::cors_layer(state.config());

    Router::new()
        .merge(routes::api::create_api_router())
        .merge(routes::pages::create_page_router())
        .merge(routes::create_operational_router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
