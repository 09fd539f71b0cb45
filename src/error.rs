//! # Centralized Error Handling
//!
//! Every failure a handler can report is an [`AppError`]. The conversion into
//! an HTTP response lives here, so all error bodies share the same
//! `{ "message": ... }` shape as the successful POST response.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::models::MessageResponse;

/// Central application error type.
///
/// Client errors carry the exact message returned to the caller. Internal
/// errors are logged here and answered with a generic message.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(&'static str),

    #[error("not found: {0}")]
    NotFound(&'static str),

    /// Not returned by any current handler.
    #[error("internal server error")]
    Internal,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            AppError::BadRequest(msg) | AppError::NotFound(msg) => *msg,
            AppError::Internal => "Internal server error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if matches!(self, AppError::Internal) {
            error!("Internal error while handling request");
        }

        let body = Json(MessageResponse::new(self.message()));
        (self.status(), body).into_response()
    }
}

/// Convenience Result type alias that uses AppError as the error type.
pub type AppResult<T> = Result<T, AppError>;
