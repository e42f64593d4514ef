//! API error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::catalog::UnknownFormType;
use crate::selection::InvalidOptionError;

/// Errors surfaced by the quote API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UnknownForm(#[from] UnknownFormType),

    #[error(transparent)]
    InvalidOption(#[from] InvalidOptionError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::UnknownForm(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidOption(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}
