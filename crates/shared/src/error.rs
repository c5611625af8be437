//! Application-wide error types.
//!
//! `AppError` is what the rest of the client sees when the backend rejects a
//! request. It is built either from the backend's error envelope code or,
//! when no envelope could be read, from the bare HTTP status.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Authentication failed or the session expired.
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// Access denied.
    #[error("Access denied: {0}")]
    Forbidden(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Business rule violation reported by the backend.
    #[error("Business rule violation: {message}")]
    BusinessRule {
        /// Backend error code (e.g. `FISCAL_PERIOD_CLOSED`).
        code: String,
        /// Human readable message.
        message: String,
    },

    /// Conflict (e.g., duplicate entry).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The backend could not be reached or answered with garbage.
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Maps a backend error envelope (`{code, message}`) to an `AppError`.
    ///
    /// Unknown codes are domain rejections such as `DEBIT_CREDIT_MISMATCH`
    /// and become [`AppError::BusinessRule`].
    #[must_use]
    pub fn from_api_error(code: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        match code {
            "UNAUTHORIZED" => Self::Unauthorized(message),
            "FORBIDDEN" => Self::Forbidden(message),
            "RESOURCE_NOT_FOUND" | "NOT_FOUND" => Self::NotFound(message),
            "VALIDATION_ERROR" | "BAD_REQUEST" => Self::Validation(message),
            "CONFLICT" => Self::Conflict(message),
            "INTERNAL_SERVER_ERROR" | "INTERNAL_ERROR" => Self::Internal(message),
            _ => Self::BusinessRule {
                code: code.to_string(),
                message,
            },
        }
    }

    /// Maps a bare HTTP status to an `AppError`.
    #[must_use]
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 => Self::Unauthorized(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            400 => Self::Validation(message),
            409 => Self::Conflict(message),
            422 => Self::BusinessRule {
                code: "UNPROCESSABLE_ENTITY".to_string(),
                message,
            },
            500..=599 => Self::ExternalService(message),
            _ => Self::Internal(message),
        }
    }

    /// Returns the error code for display and logging.
    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::BusinessRule { code, .. } => code,
            Self::Conflict(_) => "CONFLICT",
            Self::ExternalService(_) => "EXTERNAL_SERVICE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns true if the session must be discarded and the user sent back to login.
    #[must_use]
    pub const fn is_session_expired(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
