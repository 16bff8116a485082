use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

use mousse_core::error::CatalogueError;

use crate::pages::PageError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

/// The body carries the message and nothing else.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.message }));
        (self.status, body).into_response()
    }
}

impl From<CatalogueError> for AppError {
    fn from(err: CatalogueError) -> Self {
        match err {
            CatalogueError::NotFound(msg) => Self::not_found(msg),
            CatalogueError::BadRequest(msg) => Self::bad_request(msg),
            CatalogueError::Database(err) => Self::from(err),
            CatalogueError::Migration(err) => {
                tracing::error!(error = ?err, "migration failed");
                Self::internal("Database operation failed")
            }
            CatalogueError::Internal(msg) => {
                tracing::error!(message = %msg, "internal catalogue error");
                Self::internal("Internal server error")
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!(error = ?err, "database operation failed");
        Self::internal("Database operation failed")
    }
}

impl From<PageError> for AppError {
    fn from(err: PageError) -> Self {
        tracing::error!(error = %err, "page rendering failed");
        Self::internal("Page rendering failed")
    }
}
