use axum::{
    Json,
    extract::{Path, Query, State, rejection::PathRejection},
};

use mousse_core::CompanyQuery;
use mousse_core::domain::{Company, CompanyRecyclingOption, WithDisplays};
use mousse_core::service::COMPANY_NOT_FOUND;

use super::{QueryPairs, first_param, parse_path_id, path_or_not_found};
use crate::infra::{app_state::AppState, errors::AppResult};

/// Both parameters stay raw strings: a malformed option id is ignored
/// rather than rejected.
#[derive(Debug, Default)]
pub struct CompaniesQuery {
    pub recycling_option_id: Option<String>,
    pub search: Option<String>,
}

impl CompaniesQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            recycling_option_id: first_param(pairs, "recycling_option_id").map(str::to_string),
            search: first_param(pairs, "search").map(str::to_string),
        }
    }
}

fn company_id(path: Result<Path<String>, PathRejection>) -> AppResult<i64> {
    let raw = path_or_not_found(path, COMPANY_NOT_FOUND)?;
    parse_path_id(&raw, COMPANY_NOT_FOUND)
}

pub async fn list_companies_handler(
    State(state): State<AppState>,
    Query(pairs): Query<QueryPairs>,
) -> AppResult<Json<Vec<Company>>> {
    let query = CompaniesQuery::from_pairs(&pairs);
    let filter = CompanyQuery::from_params(
        query.recycling_option_id.as_deref(),
        query.search.as_deref(),
    );
    let companies = state.catalogue().list_companies(&filter).await?;
    Ok(Json(companies))
}

pub async fn get_company_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<Json<Company>> {
    let company = state.catalogue().get_company(company_id(path)?).await?;
    Ok(Json(company))
}

pub async fn list_company_options_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<Json<Vec<WithDisplays<CompanyRecyclingOption>>>> {
    let options = state
        .catalogue()
        .list_company_options(company_id(path)?)
        .await?;
    Ok(Json(options))
}
