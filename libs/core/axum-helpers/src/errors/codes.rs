//! Error codes shared by every error body the service returns.
//!
//! Each code has a client-facing identifier (`NOT_FOUND`), an integer used in
//! logs and dashboards (`1004`) and a fallback message.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::NotFound;
//! assert_eq!(code.as_str(), "NOT_FOUND");
//! assert_eq!(code.code(), 1004);
//! assert_eq!(code.default_message(), "Resource not found");
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// A field rule on the request body failed
    ValidationError,

    /// Path identifier is not a valid integer id
    InvalidId,

    /// Request body could not be read as the expected JSON shape
    JsonExtraction,

    NotFound,

    InternalError,

    /// Malformed request that is not a body or path problem (e.g. query string)
    BadRequest,

    MethodNotAllowed,
}

impl ErrorCode {
    /// SCREAMING_SNAKE_CASE identifier clients branch on
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidId => "INVALID_ID",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::NotFound => "NOT_FOUND",
            Self::InternalError => "INTERNAL_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
        }
    }

    /// Integer code recorded in structured logs
    ///
    /// 1000-1999: client and generic server errors
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidId => 1002,
            Self::JsonExtraction => 1003,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::BadRequest => 1006,
            Self::MethodNotAllowed => 1007,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::InvalidId => "Invalid id format",
            Self::JsonExtraction => "Failed to parse request body",
            Self::NotFound => "Resource not found",
            Self::InternalError => "An internal server error occurred",
            Self::BadRequest => "Bad request",
            Self::MethodNotAllowed => "The HTTP method is not allowed for this resource",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
