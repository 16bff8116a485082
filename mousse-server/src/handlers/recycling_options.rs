use axum::{
    Json,
    extract::{Path, Query, State, rejection::PathRejection},
};

use mousse_core::domain::{RecyclingOptionDetail, RecyclingOptionSummary, WithDisplays};
use mousse_core::service::RECYCLING_OPTION_NOT_FOUND;

use super::{QueryPairs, first_param, parse_path_id, path_or_not_found};
use crate::infra::{app_state::AppState, errors::AppResult};

#[derive(Debug, Default)]
pub struct RecyclingOptionsQuery {
    pub foam_code: Option<String>,
}

impl RecyclingOptionsQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            foam_code: first_param(pairs, "foam_code").map(str::to_string),
        }
    }
}

pub async fn list_recycling_options_handler(
    State(state): State<AppState>,
    Query(pairs): Query<QueryPairs>,
) -> AppResult<Json<Vec<WithDisplays<RecyclingOptionSummary>>>> {
    let query = RecyclingOptionsQuery::from_pairs(&pairs);
    let options = state
        .catalogue()
        .list_recycling_options(query.foam_code.as_deref())
        .await?;
    Ok(Json(options))
}

pub async fn get_recycling_option_handler(
    State(state): State<AppState>,
    option_id: Result<Path<String>, PathRejection>,
) -> AppResult<Json<WithDisplays<RecyclingOptionDetail>>> {
    let option_id = path_or_not_found(option_id, RECYCLING_OPTION_NOT_FOUND)?;
    let option_id = parse_path_id(&option_id, RECYCLING_OPTION_NOT_FOUND)?;
    let detail = state
        .catalogue()
        .get_recycling_option_detail(option_id)
        .await?;
    Ok(Json(detail))
}
