//! Unified error handling for the HTTP surface.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::CustomerError;

/// Application-level error type returned by route handlers.
#[derive(Debug, Error)]
pub enum AppError {
    /// Customer service failure.
    #[error(transparent)]
    Customer(#[from] CustomerError),

    /// Malformed request body (e.g. an invalid email).
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Customer(CustomerError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Customer(
                CustomerError::EmailTaken(_)
                | CustomerError::Store(RepositoryError::Conflict(_)),
            ) => StatusCode::CONFLICT,
            Self::Customer(CustomerError::NoChanges) | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Customer(CustomerError::Store(
                RepositoryError::Database(_) | RepositoryError::NotFound,
            )) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed against the store");
        }

        // Keep store internals out of client-visible bodies
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            "internal server error".to_owned()
        } else {
            self.to_string()
        };

        (status, message).into_response()
    }
}
