//! The backend's response envelope.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Every backend response is wrapped as `{success, data, error}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Whether the request succeeded.
    pub success: bool,
    /// Payload on success (absent for deletes).
    pub data: Option<T>,
    /// Error details on failure.
    #[serde(default)]
    pub error: Option<ErrorInfo>,
}

/// Error details carried by a failed envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Machine readable code (e.g. `VALIDATION_ERROR`).
    pub code: String,
    /// Human readable message.
    pub message: String,
    /// Optional field-level details.
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

impl<T> ApiEnvelope<T> {
    /// Unwraps the envelope into its payload or an `AppError`.
    pub fn into_result(self) -> AppResult<Option<T>> {
        if self.success {
            return Ok(self.data);
        }
        Err(match self.error {
            Some(info) => AppError::from_api_error(&info.code, info.message),
            None => AppError::Internal("request failed without error details".to_string()),
        })
    }
}
