//! Gateway error type and its HTTP mapping.
//!
//! Every error a handler can produce is fully handled here: it becomes an
//! HTTP status plus a `{"error": "..."}` body and never propagates further.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::api::dto::envelope::JsonErrorResponse;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request itself was unacceptable (malformed body, bad parameter,
    /// or an upstream rejection this gateway charges to the caller).
    #[error("{0}")]
    BadRequest(String),
    /// Missing Bearer token verification.
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    NotFound(String),
    /// Upstream failure surfaced as the gateway's own fault.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = JsonErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
