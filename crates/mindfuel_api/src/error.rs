//! HTTP error taxonomy.
//!
//! `Validation` is the caller's fault and maps to 400; `Infrastructure` is a
//! store fault, logged in full and surfaced as a generic 500.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::error;
use mindfuel_core::db::DbError;
use mindfuel_core::RepoError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("internal error: {0}")]
    Infrastructure(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl From<RepoError> for ApiError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Validation(err.to_string()),
            other => Self::Infrastructure(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(value: JsonRejection) -> Self {
        Self::Validation(value.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Infrastructure(details) => {
                error!("event=request_failed module=api status=error error={details}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Startup failure for [`crate::serve`].
#[derive(Error, Debug)]
pub enum ServeError {
    #[error("failed to open store: {0}")]
    Store(#[from] DbError),

    #[error("failed to bind or serve: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::ApiError;
    use axum::{http::StatusCode, response::IntoResponse};
    use mindfuel_core::{RecordValidationError, RepoError};

    #[test]
    fn validation_errors_are_client_errors() {
        let err = ApiError::from(RepoError::Validation(RecordValidationError::EmptyHabitName));
        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn store_errors_are_server_errors() {
        let err = ApiError::from(RepoError::InvalidData("bad row".to_string()));
        assert!(matches!(err, ApiError::Infrastructure(_)));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
