//! Application error type mapping to HTTP status codes.
//!
//! The wire format is a flat `{"error": "..."}` object: 400 for an empty
//! message, 503 when the store is unavailable, 500 when the completion
//! service fails.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use valet_types::error::ChatError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub struct AppError(ChatError);

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        AppError(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            ChatError::EmptyMessage => {
                (StatusCode::BAD_REQUEST, "No message provided.".to_string())
            }
            ChatError::Storage(e) => (
                StatusCode::SERVICE_UNAVAILABLE,
                format!("Conversation store unavailable: {e}"),
            ),
            ChatError::Completion(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error contacting language model: {e}"),
            ),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
