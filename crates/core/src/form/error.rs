//! Journal form errors.

use ledgerly_shared::types::{AccountId, SubAccountId};
use thiserror::Error;

use crate::ledger::JournalValidationError;

/// Errors raised while editing or submitting a journal form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// A line cannot be removed below the minimum.
    #[error("A journal needs at least {minimum} lines")]
    MinimumLines {
        /// Minimum number of lines.
        minimum: usize,
    },

    /// A line index is outside the form.
    #[error("Line index {index} is out of range ({len} line(s))")]
    LineOutOfRange {
        /// The 0-based index used.
        index: usize,
        /// Number of lines in the form.
        len: usize,
    },

    /// A line has no account.
    #[error("Line {line_number}: account is required")]
    MissingAccount {
        /// 1-based line number.
        line_number: u32,
    },

    /// A line has no amount, or it is not a number.
    #[error("Line {line_number}: amount is required")]
    MissingAmount {
        /// 1-based line number.
        line_number: u32,
    },

    /// A line amount is zero or negative.
    #[error("Line {line_number}: amount must be positive")]
    NonPositiveAmount {
        /// 1-based line number.
        line_number: u32,
    },

    /// The selected sub-account belongs to another account.
    #[error("Line {line_number}: sub-account {sub_account_id} does not belong to account {account_id}")]
    SubAccountMismatch {
        /// 1-based line number.
        line_number: u32,
        /// Selected sub-account.
        sub_account_id: SubAccountId,
        /// Selected account.
        account_id: AccountId,
    },

    /// The journal does not balance or lacks a side.
    #[error(transparent)]
    Validation(#[from] JournalValidationError),
}

impl FormError {
    /// Returns the error code for display and logging.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MinimumLines { .. } => "MINIMUM_LINES",
            Self::LineOutOfRange { .. } => "LINE_OUT_OF_RANGE",
            Self::MissingAccount { .. } => "MISSING_ACCOUNT",
            Self::MissingAmount { .. } => "MISSING_AMOUNT",
            Self::NonPositiveAmount { .. } => "NON_POSITIVE_AMOUNT",
            Self::SubAccountMismatch { .. } => "SUB_ACCOUNT_MISMATCH",
            Self::Validation(e) => e.error_code(),
        }
    }
}
