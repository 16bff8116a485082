pub mod companies;
pub mod foam_types;
pub mod health;
pub mod pages;
pub mod recycling_options;

use axum::extract::{Path, rejection::PathRejection};
use tracing::debug;

use crate::infra::errors::{AppError, AppResult};

/// Query string as decoded pairs in request order. Decoding is lossy and
/// repeated keys are all kept, so extracting it never rejects a request.
pub type QueryPairs = Vec<(String, String)>;

/// First value given for `key`; later repeats are ignored.
pub(crate) fn first_param<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.as_str())
}

/// A path that axum could not decode (invalid UTF-8 after percent-decoding)
/// names no row either.
pub(crate) fn path_or_not_found<T>(
    path: Result<Path<T>, PathRejection>,
    not_found: &str,
) -> AppResult<T> {
    match path {
        Ok(Path(value)) => Ok(value),
        Err(rejection) => {
            debug!(error = %rejection, "undecodable path");
            Err(AppError::not_found(not_found))
        }
    }
}

/// Path ids are unsigned decimal integers. Anything else cannot name a row,
/// so it is answered with the same 404 as an unknown id.
pub(crate) fn parse_path_id(raw: &str, not_found: &str) -> AppResult<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::not_found(not_found));
    }
    raw.parse().map_err(|_| AppError::not_found(not_found))
}
