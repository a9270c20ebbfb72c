//! Error taxonomy surfaced to API clients.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Errors a request handler can return. Everything else in the core is
/// pure and infallible, so this is the whole taxonomy.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Unknown or invalid game identifier
    #[error("Game not found")]
    NotFound,

    /// Guess word missing or empty after trimming
    #[error("Missing word")]
    InvalidInput,

    /// Request payload could not be parsed
    #[error("Invalid JSON body")]
    MalformedRequest,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InvalidInput | Self::MalformedRequest => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
