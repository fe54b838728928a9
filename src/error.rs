//! Domain error types for the test run report server.
//!
//! Uses thiserror for ergonomic error handling with automatic Display implementations.

use actix_web::{HttpResponse, ResponseError};
use std::fmt;

/// Longest diagnostic prefix ever returned to clients for store failures.
pub const MAX_DIAGNOSTIC_LEN: usize = 120;

/// Why a field was rejected by the validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationReason {
    /// Required field absent or blank.
    Missing,
    /// Enum field outside its allowed set.
    InvalidValue { allowed: &'static [&'static str] },
    /// Numeric field below zero.
    Negative,
    /// Numeric field too large for its column.
    OutOfRange,
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "is required"),
            Self::InvalidValue { allowed } => {
                write!(f, "must be one of: {}", allowed.join(", "))
            }
            Self::Negative => write!(f, "must be greater than or equal to 0"),
            Self::OutOfRange => write!(f, "is out of range"),
        }
    }
}

/// A record failed validation. `field` is the path of the offending field,
/// e.g. `suites[0].cases[2].logs[1].level`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field} {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: ValidationReason,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: ValidationReason) -> Self {
        ValidationError {
            field: field.into(),
            reason,
        }
    }

    /// Prefix the field path with the enclosing collection element.
    pub fn nested(self, parent: &str) -> Self {
        ValidationError {
            field: format!("{}.{}", parent, self.field),
            reason: self.reason,
        }
    }
}

/// Application-level errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed
    #[error("Database error: {0}")]
    Database(String),

    /// Document store unreachable
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// Resource not found
    #[error("{0} not found")]
    NotFound(String),

    /// Record failed validation
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Child record names a different parent than the one addressed
    #[error("{field} mismatch: expected {expected}, got {actual}")]
    Mismatch {
        field: &'static str,
        expected: String,
        actual: String,
    },

    /// Identifier cannot be parsed
    #[error("Invalid id: {0}")]
    MalformedId(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let (status, error_code, response_message) = match self {
            AppError::Database(err_str) => {
                tracing::error!("Database error: {}", err_str);
                (
                    actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "An internal database error occurred".to_string(),
                )
            }
            AppError::Unavailable(err_str) => {
                tracing::error!("Store unavailable: {}", err_str);
                (
                    actix_web::http::StatusCode::SERVICE_UNAVAILABLE,
                    "SERVICE_UNAVAILABLE",
                    format!("Store unavailable: {}", truncate_diagnostic(err_str)),
                )
            }
            AppError::NotFound(_) => (
                actix_web::http::StatusCode::NOT_FOUND,
                "NOT_FOUND",
                self.to_string(),
            ),
            AppError::Validation(_) => (
                actix_web::http::StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                self.to_string(),
            ),
            AppError::Mismatch { .. } => (
                actix_web::http::StatusCode::BAD_REQUEST,
                "PARENT_MISMATCH",
                self.to_string(),
            ),
            AppError::MalformedId(_) => (
                actix_web::http::StatusCode::BAD_REQUEST,
                "MALFORMED_ID",
                self.to_string(),
            ),
            AppError::InvalidInput(_) => (
                actix_web::http::StatusCode::BAD_REQUEST,
                "INVALID_INPUT",
                self.to_string(),
            ),
        };

        HttpResponse::build(status).json(ErrorResponse {
            error: error_code.to_string(),
            message: response_message,
        })
    }
}

/// Error response body matching OpenAPI schema.
#[derive(Debug, serde::Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

/// Cut a diagnostic down to [`MAX_DIAGNOSTIC_LEN`] characters.
pub fn truncate_diagnostic(message: &str) -> String {
    match message.char_indices().nth(MAX_DIAGNOSTIC_LEN) {
        Some((end, _)) => format!("{}...", &message[..end]),
        None => message.to_string(),
    }
}

// Conversion implementations for common error types

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidInput(format!("JSON parsing error: {}", err))
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        match err {
            sea_orm::DbErr::Conn(_) | sea_orm::DbErr::ConnectionAcquire(_) => {
                AppError::Unavailable(err.to_string())
            }
            other => AppError::Database(other.to_string()),
        }
    }
}
