//! Journal validation errors.
//!
//! All kinds are recoverable: the user corrects the lines and resubmits.
//! They are raised before any network call and never reach the backend.

use rust_decimal::Decimal;
use thiserror::Error;

/// Reasons a journal draft cannot be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JournalValidationError {
    /// Debit and credit totals differ by more than the tolerance.
    #[error(
        "Journal is not balanced. Debit: {debit_total}, Credit: {credit_total}, Difference: {difference}"
    )]
    UnbalancedJournal {
        /// Total of debit lines.
        debit_total: Decimal,
        /// Total of credit lines.
        credit_total: Decimal,
        /// `debit_total - credit_total`.
        difference: Decimal,
    },

    /// The journal lacks a debit line or a credit line.
    #[error("Journal must have at least one debit line and one credit line ({line_count} line(s) present)")]
    InsufficientLines {
        /// Number of lines in the draft.
        line_count: usize,
    },

    /// A side total or the difference falls outside the decimal range.
    #[error("Journal totals exceed the supported amount range")]
    AmountOverflow,
}

impl JournalValidationError {
    /// Returns the error code for display and logging.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnbalancedJournal { .. } => "UNBALANCED_JOURNAL",
            Self::InsufficientLines { .. } => "INSUFFICIENT_LINES",
            Self::AmountOverflow => "AMOUNT_OVERFLOW",
        }
    }
}
