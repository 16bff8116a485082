use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};

use mousse_core::domain::{FoamTypeDetail, FoamTypeSummary};
use mousse_core::service::FOAM_NOT_FOUND;

use super::path_or_not_found;
use crate::infra::{app_state::AppState, errors::AppResult};

pub async fn list_foam_types_handler(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<FoamTypeSummary>>> {
    let foams = state.catalogue().list_foam_types().await?;
    Ok(Json(foams))
}

pub async fn get_foam_type_handler(
    State(state): State<AppState>,
    code: Result<Path<String>, PathRejection>,
) -> AppResult<Json<FoamTypeDetail>> {
    let code = path_or_not_found(code, FOAM_NOT_FOUND)?;
    let detail = state.catalogue().get_foam_type_detail(&code).await?;
    Ok(Json(detail))
}
