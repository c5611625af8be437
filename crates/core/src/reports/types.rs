//! Report data types.
//!
//! Wire shapes follow the backend's report endpoints (camelCase JSON).

use chrono::NaiveDate;
use ledgerly_shared::types::AccountId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::{AccountType, EntryType};

/// One posted journal line, flattened with its journal and account.
///
/// This is the input of the report aggregation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostedLine {
    /// Journal date.
    pub journal_date: NaiveDate,
    /// Journal number.
    pub journal_number: String,
    /// Journal description, used when the line has none.
    #[serde(default)]
    pub journal_description: Option<String>,
    /// Account affected.
    pub account_id: AccountId,
    /// Account code.
    pub account_code: String,
    /// Account name.
    pub account_name: String,
    /// Account classification.
    pub account_type: AccountType,
    /// Debit or credit.
    pub entry_type: EntryType,
    /// Line amount.
    pub amount: Decimal,
    /// Line description.
    #[serde(default)]
    pub description: Option<String>,
}

impl PostedLine {
    /// Returns `(debit, credit)` amounts for this line.
    #[must_use]
    pub fn debit_credit(&self) -> (Decimal, Decimal) {
        match self.entry_type {
            EntryType::Debit => (self.amount, Decimal::ZERO),
            EntryType::Credit => (Decimal::ZERO, self.amount),
        }
    }
}

/// Trial balance totals, as needed for balance checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialBalanceFigures {
    /// Sum of debit balances.
    pub total_debit: Decimal,
    /// Sum of credit balances.
    pub total_credit: Decimal,
    /// Precomputed `total_debit - total_credit`, when supplied.
    #[serde(default)]
    pub difference: Option<Decimal>,
}

/// Balance sheet totals, as needed for balance checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheetFigures {
    /// Total assets.
    pub assets: Decimal,
    /// Total liabilities.
    pub liabilities: Decimal,
    /// Total equity.
    pub equity: Decimal,
    /// Net profit from the fiscal-year start to the as-of date.
    #[serde(default)]
    pub net_profit: Decimal,
    /// `liabilities + equity + net_profit`.
    #[serde(default)]
    pub total_liabilities_and_equity: Decimal,
    /// Precomputed `assets - (liabilities + equity + net_profit)`, when supplied.
    #[serde(default)]
    pub difference: Option<Decimal>,
}

/// Report figures tagged by report kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ReportFigures {
    /// Trial balance figures.
    TrialBalance(TrialBalanceFigures),
    /// Balance sheet figures.
    BalanceSheet(BalanceSheetFigures),
}

/// Outcome of a balance check.
///
/// An out-of-balance report is a value, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceCheck {
    /// True when `|difference| <= tolerance`.
    pub ok: bool,
    /// The supplied or derived difference.
    pub difference: Decimal,
}

/// A trial balance row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialBalanceEntry {
    /// Account code.
    pub account_code: String,
    /// Account name.
    pub account_name: String,
    /// Account classification.
    pub account_type: AccountType,
    /// Net debit balance, or zero.
    pub debit_balance: Decimal,
    /// Net credit balance, or zero.
    pub credit_balance: Decimal,
}

/// Trial balance report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialBalanceReport {
    /// As of date.
    pub as_of_date: NaiveDate,
    /// Rows sorted by account code.
    #[serde(default)]
    pub entries: Vec<TrialBalanceEntry>,
    /// Sum of debit balances.
    pub total_debit: Decimal,
    /// Sum of credit balances.
    pub total_credit: Decimal,
    /// `total_debit - total_credit`.
    #[serde(default)]
    pub difference: Option<Decimal>,
}

impl TrialBalanceReport {
    /// Extracts the totals.
    #[must_use]
    pub fn figures(&self) -> TrialBalanceFigures {
        TrialBalanceFigures {
            total_debit: self.total_debit,
            total_credit: self.total_credit,
            difference: self.difference,
        }
    }
}

/// Balance sheet report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheetReport {
    /// As of date.
    pub as_of_date: NaiveDate,
    /// Total assets.
    pub assets: Decimal,
    /// Total liabilities.
    pub liabilities: Decimal,
    /// Total equity.
    pub equity: Decimal,
    /// Net profit from the fiscal-year start to the as-of date.
    pub net_profit: Decimal,
    /// `liabilities + equity + net_profit`.
    pub total_liabilities_and_equity: Decimal,
    /// Precomputed difference, when the backend supplies one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difference: Option<Decimal>,
}

impl BalanceSheetReport {
    /// Extracts the totals.
    #[must_use]
    pub fn figures(&self) -> BalanceSheetFigures {
        BalanceSheetFigures {
            assets: self.assets,
            liabilities: self.liabilities,
            equity: self.equity,
            net_profit: self.net_profit,
            total_liabilities_and_equity: self.total_liabilities_and_equity,
            difference: self.difference,
        }
    }
}

/// Profit and loss report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitLossReport {
    /// Period start date.
    pub start_date: NaiveDate,
    /// Period end date.
    pub end_date: NaiveDate,
    /// Total revenue.
    pub revenue: Decimal,
    /// Total expense.
    pub expense: Decimal,
    /// `revenue - expense`.
    pub net_profit: Decimal,
}

/// A general ledger row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralLedgerEntry {
    /// Journal date.
    pub date: NaiveDate,
    /// Journal number.
    pub journal_number: String,
    /// Line description, or the journal's when the line has none.
    #[serde(default)]
    pub description: Option<String>,
    /// Debit amount, or zero.
    pub debit_amount: Decimal,
    /// Credit amount, or zero.
    pub credit_amount: Decimal,
    /// Running balance after this row.
    pub balance: Decimal,
}

/// General ledger report for one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralLedgerReport {
    /// Account code.
    pub account_code: String,
    /// Account name.
    pub account_name: String,
    /// Account classification.
    pub account_type: AccountType,
    /// Period start date.
    pub start_date: NaiveDate,
    /// Period end date.
    pub end_date: NaiveDate,
    /// Balance of all lines before `start_date`.
    pub opening_balance: Decimal,
    /// Balance after the last row.
    pub closing_balance: Decimal,
    /// Rows in date order.
    #[serde(default)]
    pub entries: Vec<GeneralLedgerEntry>,
}
