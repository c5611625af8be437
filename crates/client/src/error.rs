//! Client error types.

use ledgerly_core::fiscal::FiscalError;
use ledgerly_core::form::FormError;
use ledgerly_core::reports::ReportError;
use ledgerly_shared::AppError;
use thiserror::Error;

use crate::transport::TransportError;

/// Errors returned by client operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The backend rejected the request.
    #[error(transparent)]
    Api(#[from] AppError),

    /// The journal form failed local checks. Nothing was sent.
    #[error(transparent)]
    Form(#[from] FormError),

    /// The journal date cannot be posted. Nothing was sent.
    #[error(transparent)]
    Fiscal(#[from] FiscalError),

    /// Invalid report parameters. Nothing was sent.
    #[error(transparent)]
    Report(#[from] ReportError),

    /// The request never got an answer.
    #[error(transparent)]
    Transport(TransportError),

    /// The response did not have the expected shape.
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ClientError {
    /// Returns the error code for display and logging.
    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::Api(e) => e.error_code(),
            Self::Form(e) => e.error_code(),
            Self::Fiscal(e) => e.error_code(),
            Self::Report(_) => "INVALID_DATE_RANGE",
            Self::Transport(_) => "TRANSPORT_ERROR",
            Self::Decode(_) => "DECODE_ERROR",
        }
    }

    /// Returns true if the error was raised locally, before any request.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(self, Self::Form(_) | Self::Fiscal(_) | Self::Report(_))
    }

    /// Returns true if the session must be discarded.
    #[must_use]
    pub const fn is_session_expired(&self) -> bool {
        matches!(self, Self::Api(e) if e.is_session_expired())
    }
}

impl From<TransportError> for ClientError {
    /// Status errors carrying an error envelope become [`ClientError::Api`].
    fn from(error: TransportError) -> Self {
        match error {
            TransportError::Status { status, body } => {
                let envelope_error = body.as_ref().and_then(|b| b.get("error"));
                let code = envelope_error
                    .and_then(|e| e.get("code"))
                    .and_then(serde_json::Value::as_str);
                let message = envelope_error
                    .and_then(|e| e.get("message"))
                    .and_then(serde_json::Value::as_str)
                    .unwrap_or("Request failed")
                    .to_string();
                match code {
                    Some(code) => Self::Api(AppError::from_api_error(code, message)),
                    None => Self::Api(AppError::from_status(status, message)),
                }
            }
            other => Self::Transport(other),
        }
    }
}
