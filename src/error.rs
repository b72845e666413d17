//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses. Every handler returns `Result<_, AppError>`; the
//! `IntoResponse` implementation below is the single place where a failed
//! request is turned into a response.

use axum::{
    Json,
    extract::rejection::BytesRejection,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// # Error Categories
///
/// - **Decode Errors**: Request body cannot be read or is not valid JSON for the expected shape
/// - **Validation Errors**: Path identifier is not an integer
/// - **Resource Errors**: Requested account not found
/// - **Database Errors**: Any sqlx::Error from database operations
/// - **Routing Errors**: Method not supported on a known route
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request body could not be read.
    #[error(transparent)]
    UnreadableBody(#[from] BytesRejection),

    /// Request body is not JSON of the expected shape.
    #[error("invalid request body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    /// The `{id}` path segment is not an integer.
    ///
    /// The String holds the raw segment as received.
    #[error("invalid ID: {0}")]
    InvalidId(String),

    /// No account row matches the identity.
    #[error("account not found with id {0}")]
    AccountNotFound(i32),

    /// Database operation failed (e.g., connection error, query error).
    ///
    /// This wraps any sqlx::Error using the `#[from]` attribute, which
    /// automatically implements `From<sqlx::Error> for AppError`.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The route exists but does not accept this method.
    #[error("action not allowed: {0}")]
    ActionNotAllowed(Method),
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// All errors return HTTP 400 Bad Request with this body:
/// ```json
/// { "error": "Human-readable error message" }
/// ```
///
/// No distinction is made between client mistakes, missing resources and
/// database failures; clients only ever see 400 and the message text.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();

        match &self {
            AppError::Database(source) => tracing::error!(error = %source, "request failed"),
            _ => tracing::warn!(error = %message, "request rejected"),
        }

        (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
    }
}
