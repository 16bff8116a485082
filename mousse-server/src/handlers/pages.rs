use axum::{
    extract::{Path, Query, State, rejection::PathRejection},
    response::Html,
};
use tera::Context;

use mousse_core::service::{COMPANY_NOT_FOUND, FOAM_NOT_FOUND, RECYCLING_OPTION_NOT_FOUND};

use super::{QueryPairs, first_param, parse_path_id, path_or_not_found};
use crate::infra::{app_state::AppState, errors::AppResult};
use crate::pages::Page;

/// Quantity the visitor wants to recycle, passed through untouched.
#[derive(Debug, Default)]
pub struct QuantityQuery {
    pub quantity: Option<String>,
    pub unit: Option<String>,
}

impl QuantityQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            quantity: first_param(pairs, "quantity").map(str::to_string),
            unit: first_param(pairs, "unit").map(str::to_string),
        }
    }

    fn insert_into(&self, context: &mut Context) {
        context.insert("quantity", &self.quantity);
        context.insert("unit", &self.unit);
    }
}

fn render(state: &AppState, page: Page, context: &Context) -> AppResult<Html<String>> {
    Ok(Html(state.pages.render(page, context)?))
}

pub async fn index_page(State(state): State<AppState>) -> AppResult<Html<String>> {
    render(&state, Page::Index, &Context::new())
}

pub async fn foam_page(
    State(state): State<AppState>,
    code: Result<Path<String>, PathRejection>,
) -> AppResult<Html<String>> {
    let code = path_or_not_found(code, FOAM_NOT_FOUND)?;

    let mut context = Context::new();
    context.insert("foam_code", &code);
    render(&state, Page::Foam, &context)
}

pub async fn methods_page(
    State(state): State<AppState>,
    code: Result<Path<String>, PathRejection>,
    Query(pairs): Query<QueryPairs>,
) -> AppResult<Html<String>> {
    let code = path_or_not_found(code, FOAM_NOT_FOUND)?;

    let mut context = Context::new();
    context.insert("foam_code", &code);
    QuantityQuery::from_pairs(&pairs).insert_into(&mut context);
    render(&state, Page::Methods, &context)
}

pub async fn method_page(
    State(state): State<AppState>,
    path: Result<Path<(String, String)>, PathRejection>,
    Query(pairs): Query<QueryPairs>,
) -> AppResult<Html<String>> {
    let (code, option_id) = path_or_not_found(path, RECYCLING_OPTION_NOT_FOUND)?;
    let option_id = parse_path_id(&option_id, RECYCLING_OPTION_NOT_FOUND)?;

    let mut context = Context::new();
    context.insert("foam_code", &code);
    context.insert("option_id", &option_id);
    QuantityQuery::from_pairs(&pairs).insert_into(&mut context);
    render(&state, Page::Method, &context)
}

pub async fn company_page(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<Html<String>> {
    let company_id = path_or_not_found(path, COMPANY_NOT_FOUND)?;
    let company_id = parse_path_id(&company_id, COMPANY_NOT_FOUND)?;

    let mut context = Context::new();
    context.insert("company_id", &company_id);
    render(&state, Page::Company, &context)
}
