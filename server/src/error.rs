//! Error responses for the HTTP layer.
//!
//! # Design
//! Every failure a handler can hit becomes a plain-text response: 400 for a
//! body that does not decode, 500 for a store failure. The client-facing
//! message stays terse; the underlying store error is logged server-side
//! before the response is built. Nothing propagates past the handler
//! boundary — each request is an isolated unit of failure.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use todo_store::StoreError;
use tracing::error;

/// Errors surfaced to HTTP clients by the todo handlers.
#[derive(Debug)]
pub enum ApiError {
    /// The request body was not valid JSON for the expected shape.
    BadRequest(&'static str),

    /// A store operation failed. `message` is what the client sees;
    /// `source` is logged.
    Internal {
        message: &'static str,
        source: StoreError,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            ApiError::Internal { message, source } => {
                error!("{message}: {source}");
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
        }
    }
}
