use axum::{Router, routing::get};

use crate::handlers::{
    companies::{get_company_handler, list_companies_handler, list_company_options_handler},
    foam_types::{get_foam_type_handler, list_foam_types_handler},
    recycling_options::{get_recycling_option_handler, list_recycling_options_handler},
};
use crate::infra::app_state::AppState;

pub const FOAM_TYPES: &str = "/api/foam-types";
pub const FOAM_TYPE: &str = "/api/foam-types/{code}";
pub const RECYCLING_OPTIONS: &str = "/api/recycling-options";
pub const RECYCLING_OPTION: &str = "/api/recycling-options/{id}";
pub const COMPANIES: &str = "/api/companies";
pub const COMPANY: &str = "/api/companies/{id}";
pub const COMPANY_RECYCLING_OPTIONS: &str = "/api/companies/{id}/recycling-options";

/// Read-only JSON catalogue API.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route(FOAM_TYPES, get(list_foam_types_handler))
        .route(FOAM_TYPE, get(get_foam_type_handler))
        .route(RECYCLING_OPTIONS, get(list_recycling_options_handler))
        .route(RECYCLING_OPTION, get(get_recycling_option_handler))
        .route(COMPANIES, get(list_companies_handler))
        .route(COMPANY, get(get_company_handler))
        .route(COMPANY_RECYCLING_OPTIONS, get(list_company_options_handler))
}
