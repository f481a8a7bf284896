pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Body of every error response.
///
/// ```json
/// {
///   "code": 1004,
///   "error": "NOT_FOUND",
///   "message": "Property 7 not found"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Structured details, e.g. per-field validation failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

/// Application error type that can be converted to HTTP responses.
///
/// Domain crates convert their own error enums into this one so that the
/// status code, error code and log level are decided in a single place.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Query string error: {0}")]
    QueryExtractorRejection(#[from] QueryRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Invalid id: {0}")]
    InvalidId(String),

    /// A business rule rejected the input; the message is shown to the client
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl AppError {
    /// Status, error code, client message and details for this error.
    ///
    /// Logs the error at a level matching its severity; server-side
    /// failures never leak their internal message to the client.
    fn into_parts(self) -> (StatusCode, ErrorCode, String, Option<Value>) {
        match self {
            AppError::JsonExtractorRejection(e) => {
                let code = ErrorCode::JsonExtraction;
                tracing::warn!(error_code = code.code(), "JSON extraction error: {}", e);
                let status = match &e {
                    JsonRejection::MissingJsonContentType(_) => e.status(),
                    _ => StatusCode::BAD_REQUEST,
                };
                (status, code, e.body_text(), None)
            }
            AppError::QueryExtractorRejection(e) => {
                let code = ErrorCode::BadRequest;
                tracing::info!(error_code = code.code(), "Query string error: {}", e);
                (StatusCode::BAD_REQUEST, code, e.body_text(), None)
            }
            AppError::ValidationError(e) => {
                let code = ErrorCode::ValidationError;
                tracing::info!(error_code = code.code(), "Validation error: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    code,
                    code.default_message().to_string(),
                    Some(validation_details(&e)),
                )
            }
            AppError::InvalidId(raw) => {
                let code = ErrorCode::InvalidId;
                tracing::info!(error_code = code.code(), "Invalid id: {}", raw);
                (StatusCode::BAD_REQUEST, code, format!("Invalid id: {}", raw), None)
            }
            AppError::InvalidInput(msg) => {
                let code = ErrorCode::ValidationError;
                tracing::info!(error_code = code.code(), "Invalid input: {}", msg);
                (StatusCode::BAD_REQUEST, code, msg, None)
            }
            AppError::NotFound(msg) => {
                let code = ErrorCode::NotFound;
                tracing::info!(error_code = code.code(), "Not found: {}", msg);
                (StatusCode::NOT_FOUND, code, msg, None)
            }
            AppError::InternalServerError(msg) => {
                let code = ErrorCode::InternalError;
                tracing::error!(error_code = code.code(), "Internal server error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    code,
                    code.default_message().to_string(),
                    None,
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = self.into_parts();

        let body = Json(ErrorResponse {
            code: code.code(),
            error: code.as_str().to_string(),
            message,
            details,
        });

        (status, body).into_response()
    }
}

/// Per-field validation failures as a JSON object
///
/// `{"address": [{"code": "length", "message": null, "params": {...}}]}`
pub fn validation_details(errors: &ValidationErrors) -> Value {
    let fields = errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let entries: Vec<Value> = errors
                .iter()
                .map(|err| {
                    serde_json::json!({
                        "code": err.code,
                        "message": err.message,
                        "params": err.params,
                    })
                })
                .collect();
            (field.to_string(), Value::Array(entries))
        })
        .collect::<serde_json::Map<_, _>>();

    Value::Object(fields)
}

/// Build an error response without going through [`AppError`].
///
/// ```rust,ignore
/// use axum_helpers::errors::{error_response, ErrorCode};
/// use axum::http::StatusCode;
///
/// let response = error_response(
///     StatusCode::BAD_REQUEST,
///     "Invalid input".to_string(),
///     ErrorCode::ValidationError,
/// );
/// ```
pub fn error_response(status: StatusCode, message: String, error_code: ErrorCode) -> Response {
    let body = Json(ErrorResponse {
        code: error_code.code(),
        error: error_code.as_str().to_string(),
        message,
        details: None,
    });

    (status, body).into_response()
}
