//! Report error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur during report generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// Invalid date range.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },
}

impl ReportError {
    /// Checks that `start <= end`.
    pub fn check_range(start: NaiveDate, end: NaiveDate) -> Result<(), Self> {
        if start > end {
            return Err(Self::InvalidDateRange { start, end });
        }
        Ok(())
    }
}
