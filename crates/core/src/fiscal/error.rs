//! Fiscal posting errors.

use chrono::NaiveDate;
use ledgerly_shared::types::FiscalPeriodId;
use thiserror::Error;

/// Reasons a journal date cannot be posted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FiscalError {
    /// No fiscal period covers the date.
    #[error("No fiscal period covers {0}")]
    NoFiscalPeriod(NaiveDate),

    /// The covering period is closed.
    #[error("Fiscal period {period_name} is closed")]
    PeriodClosed {
        /// The closed period.
        period_id: FiscalPeriodId,
        /// Its display name.
        period_name: String,
    },
}

impl FiscalError {
    /// Returns the backend error code for the same condition.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NoFiscalPeriod(_) => "FISCAL_PERIOD_NOT_FOUND",
            Self::PeriodClosed { .. } => "FISCAL_PERIOD_CLOSED",
        }
    }
}
