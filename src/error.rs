//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// Every use case (register, login, balance lookup) fails with one of these.
/// Each variant maps to a specific HTTP status code and error message.
///
/// # Error Categories
///
/// - **Input Errors**: missing or malformed request data
/// - **Account Errors**: duplicate names, unknown credentials or records
/// - **Authentication Errors**: bad, expired or missing bearer tokens
/// - **Internal Errors**: storage or signing failures
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request body or parameters are invalid (e.g. empty name or password).
    ///
    /// Returns HTTP 400 Bad Request.
    /// The String contains details about what was invalid.
    #[error("Invalid input")]
    InvalidInput(String),

    /// An account with the requested name already exists.
    ///
    /// Returns HTTP 409 Conflict.
    #[error("Account already exists")]
    Conflict,

    /// No account, credential pair or stats record matched.
    ///
    /// Wrong password and unknown name both end up here so callers cannot
    /// tell which field was wrong. Returns HTTP 404 Not Found.
    #[error("Not found")]
    NotFound,

    /// Bearer token is missing, malformed, badly signed or expired.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("Invalid or expired token")]
    Unauthenticated,

    /// Database operation failed (e.g., connection error, query error).
    ///
    /// This wraps any sqlx::Error using the `#[from]` attribute, which
    /// automatically implements `From<sqlx::Error> for AppError`.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Any other unexpected failure, such as token signing.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `InvalidInput` → 400 Bad Request
/// - `Unauthenticated` → 401 Unauthorized
/// - `NotFound` → 404 Not Found
/// - `Conflict` → 409 Conflict
/// - `Database`, `Internal` → 500 Internal Server Error (hides details from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::InvalidInput(ref msg) => {
                tracing::debug!(reason = %msg, "rejecting invalid input");
                (StatusCode::BAD_REQUEST, "invalid_input", msg.clone())
            }
            AppError::Conflict => (StatusCode::CONFLICT, "conflict", self.to_string()),
            AppError::NotFound => (StatusCode::NOT_FOUND, "not_found", self.to_string()),
            AppError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                "unauthenticated",
                self.to_string(),
            ),
            AppError::Database(ref err) => {
                tracing::error!(error = %err, "database failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
            AppError::Internal(ref detail) => {
                tracing::error!(error = %detail, "internal failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
