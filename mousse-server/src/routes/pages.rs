use axum::{Router, routing::get};

use crate::handlers::pages::{company_page, foam_page, index_page, method_page, methods_page};
use crate::infra::app_state::AppState;

pub fn create_page_router() -> Router<AppState> {
    Router::new()
        .route("/", get(index_page))
        .route("/foam/{code}", get(foam_page))
        .route("/foam/{code}/methods", get(methods_page))
        .route("/foam/{code}/method/{option_id}", get(method_page))
        .route("/company/{company_id}", get(company_page))
}
