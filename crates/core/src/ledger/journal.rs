//! Persisted journals and the request body used to create or update them.

use chrono::NaiveDate;
use ledgerly_shared::types::{
    AccountId, FiscalPeriodId, JournalId, PartnerId, SubAccountId, TaxTypeId,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::entry::{EntryType, JournalLine};

/// A journal as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Journal {
    /// Unique identifier.
    pub id: JournalId,
    /// Posting date.
    pub journal_date: NaiveDate,
    /// Human-readable number, unique per company.
    pub journal_number: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Fiscal period the journal was posted into.
    #[serde(default)]
    pub fiscal_period_id: Option<FiscalPeriodId>,
    /// Journal lines ordered by line number.
    #[serde(default)]
    pub details: Vec<JournalDetail>,
}

impl Journal {
    /// Returns the details as draft lines.
    #[must_use]
    pub fn lines(&self) -> Vec<JournalLine> {
        self.details.iter().map(JournalDetail::to_line).collect()
    }
}

/// A stored journal line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalDetail {
    /// Unique identifier.
    #[serde(default)]
    pub id: Option<i64>,
    /// 1-based position within the journal.
    pub line_number: u32,
    /// Debit or credit.
    pub entry_type: EntryType,
    /// Account affected.
    pub account_id: AccountId,
    /// Account code, denormalized for display.
    #[serde(default)]
    pub account_code: Option<String>,
    /// Account name, denormalized for display.
    #[serde(default)]
    pub account_name: Option<String>,
    /// Optional sub-account.
    #[serde(default)]
    pub sub_account_id: Option<SubAccountId>,
    /// Optional tax type.
    #[serde(default)]
    pub tax_type_id: Option<TaxTypeId>,
    /// Optional partner.
    #[serde(default)]
    pub partner_id: Option<PartnerId>,
    /// Line amount.
    pub amount: Decimal,
    /// Optional tax amount.
    #[serde(default)]
    pub tax_amount: Option<Decimal>,
    /// Optional line description.
    #[serde(default)]
    pub description: Option<String>,
}

impl JournalDetail {
    /// Converts the stored line back into editable form.
    #[must_use]
    pub fn to_line(&self) -> JournalLine {
        JournalLine {
            entry_type: Some(self.entry_type),
            account_id: Some(self.account_id),
            sub_account_id: self.sub_account_id,
            amount: Some(self.amount),
            description: self.description.clone(),
        }
    }
}

/// Body of `POST /journals` and `PUT /journals/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalRequest {
    /// Posting date.
    pub journal_date: NaiveDate,
    /// Journal number.
    pub journal_number: String,
    /// Optional description.
    pub description: Option<String>,
    /// Lines, numbered from 1.
    pub details: Vec<JournalDetailRequest>,
}

/// One line of a [`JournalRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalDetailRequest {
    /// 1-based position.
    pub line_number: u32,
    /// Debit or credit.
    pub entry_type: EntryType,
    /// Account affected.
    pub account_id: AccountId,
    /// Optional sub-account, sent as `null` when absent.
    pub sub_account_id: Option<SubAccountId>,
    /// Optional tax type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_type_id: Option<TaxTypeId>,
    /// Optional partner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner_id: Option<PartnerId>,
    /// Positive line amount.
    pub amount: Decimal,
    /// Optional tax amount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_amount: Option<Decimal>,
    /// Optional line description.
    pub description: Option<String>,
}

/// Builds a journal number of the form `J-YYYYMMDD-NNNNNN`.
///
/// `sequence` is reduced to its last six digits.
#[must_use]
pub fn journal_number(journal_date: NaiveDate, sequence: u64) -> String {
    format!(
        "J-{}-{:06}",
        journal_date.format("%Y%m%d"),
        sequence % 1_000_000
    )
}
