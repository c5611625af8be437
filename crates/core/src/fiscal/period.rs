//! Fiscal period types.

use chrono::NaiveDate;
use ledgerly_shared::types::FiscalPeriodId;
use serde::{Deserialize, Serialize};

/// A fiscal period of a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiscalPeriod {
    /// Unique identifier.
    pub id: FiscalPeriodId,
    /// Fiscal year (e.g., 2025).
    pub period_year: i32,
    /// Period number within the year.
    pub period_number: i32,
    /// Display name (e.g., "FY2025").
    pub period_name: String,
    /// First day of the period.
    pub start_date: NaiveDate,
    /// Last day of the period, inclusive.
    pub end_date: NaiveDate,
    /// Closed periods accept no new or changed journals.
    #[serde(default)]
    pub is_closed: bool,
}

impl FiscalPeriod {
    /// Returns true if transactions can be posted to this period.
    #[must_use]
    pub fn is_open(&self) -> bool {
        !self.is_closed
    }

    /// Returns true if the given date falls within this period.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

/// Body of `POST /fiscal-periods` and `PUT /fiscal-periods/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiscalPeriodRequest {
    /// Fiscal year.
    pub period_year: i32,
    /// Period number within the year.
    pub period_number: i32,
    /// Display name.
    pub period_name: String,
    /// First day of the period.
    pub start_date: NaiveDate,
    /// Last day of the period, inclusive.
    pub end_date: NaiveDate,
}

impl From<&FiscalPeriod> for FiscalPeriodRequest {
    fn from(period: &FiscalPeriod) -> Self {
        Self {
            period_year: period.period_year,
            period_number: period.period_number,
            period_name: period.period_name.clone(),
            start_date: period.start_date,
            end_date: period.end_date,
        }
    }
}
