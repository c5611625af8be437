//! Journal draft types.
//!
//! A draft is the transient, client-side shape of a journal while it is being
//! created or edited. It is discarded on cancel and sent to the backend only
//! after it passes validation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::entry::JournalLine;
use super::tolerance::Tolerance;

/// A journal under construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalDraft {
    /// The date of the journal.
    pub journal_date: NaiveDate,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Ordered journal lines.
    #[serde(alias = "details", default)]
    pub lines: Vec<JournalLine>,
}

impl JournalDraft {
    /// Creates an empty draft for the given date.
    #[must_use]
    pub fn new(journal_date: NaiveDate) -> Self {
        Self {
            journal_date,
            description: None,
            lines: Vec::new(),
        }
    }

    /// Appends a line.
    #[must_use]
    pub fn with_line(mut self, line: JournalLine) -> Self {
        self.lines.push(line);
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Debit and credit sums of a journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalTotals {
    /// Sum of all debit line amounts.
    pub debit_total: Decimal,
    /// Sum of all credit line amounts.
    pub credit_total: Decimal,
}

impl JournalTotals {
    /// Creates totals from debit and credit sums.
    #[must_use]
    pub const fn new(debit_total: Decimal, credit_total: Decimal) -> Self {
        Self {
            debit_total,
            credit_total,
        }
    }

    /// Returns `debit_total - credit_total`, saturating at the decimal bounds.
    #[must_use]
    pub fn difference(&self) -> Decimal {
        self.debit_total.saturating_sub(self.credit_total)
    }

    /// Returns `debit_total - credit_total`, or `None` if it overflows.
    #[must_use]
    pub fn checked_difference(&self) -> Option<Decimal> {
        self.debit_total.checked_sub(self.credit_total)
    }

    /// Returns true if the difference is within `tolerance`.
    ///
    /// An overflowing difference is never balanced.
    #[must_use]
    pub fn is_balanced(&self, tolerance: Tolerance) -> bool {
        self.checked_difference()
            .is_some_and(|difference| tolerance.admits(difference))
    }
}
