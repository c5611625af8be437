//! Journal line domain types.

use std::str::FromStr;

use ledgerly_shared::types::{AccountId, SubAccountId};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Side of a journal line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntryType {
    /// Debit entry (increases assets/expenses, decreases liabilities/equity/revenue).
    Debit,
    /// Credit entry (decreases assets/expenses, increases liabilities/equity/revenue).
    Credit,
}

impl EntryType {
    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debit => "DEBIT",
            Self::Credit => "CREDIT",
        }
    }
}

impl std::fmt::Display for EntryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DEBIT" => Ok(Self::Debit),
            "CREDIT" => Ok(Self::Credit),
            _ => Err(format!("Unknown entry type: {s}")),
        }
    }
}

/// A single line of a journal being edited.
///
/// Lines come from form state, so every field may still be incomplete.
/// Missing or non-numeric amounts and unknown entry types deserialize to `None`
/// instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalLine {
    /// Debit or credit. `None` counts toward neither side.
    #[serde(default, deserialize_with = "lenient_entry_type")]
    pub entry_type: Option<EntryType>,
    /// The account affected by this line.
    #[serde(default)]
    pub account_id: Option<AccountId>,
    /// Optional sub-account; must belong to `account_id`.
    #[serde(default)]
    pub sub_account_id: Option<SubAccountId>,
    /// Line amount. `None` when missing or not a number.
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: Option<Decimal>,
    /// Optional description for this line.
    #[serde(default)]
    pub description: Option<String>,
}

impl JournalLine {
    /// Creates a debit line.
    #[must_use]
    pub fn debit(account_id: AccountId, amount: Decimal) -> Self {
        Self::new(EntryType::Debit, account_id, amount)
    }

    /// Creates a credit line.
    #[must_use]
    pub fn credit(account_id: AccountId, amount: Decimal) -> Self {
        Self::new(EntryType::Credit, account_id, amount)
    }

    /// Creates a complete line.
    #[must_use]
    pub fn new(entry_type: EntryType, account_id: AccountId, amount: Decimal) -> Self {
        Self {
            entry_type: Some(entry_type),
            account_id: Some(account_id),
            sub_account_id: None,
            amount: Some(amount),
            description: None,
        }
    }

    /// Sets the sub-account.
    #[must_use]
    pub fn with_sub_account(mut self, sub_account_id: SubAccountId) -> Self {
        self.sub_account_id = Some(sub_account_id);
        self
    }

    /// Sets the line description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the amount used for summation (zero when missing).
    #[must_use]
    pub fn amount_or_zero(&self) -> Decimal {
        self.amount.unwrap_or(Decimal::ZERO)
    }
}

/// Parses user-entered amount text. Blank or non-numeric input yields `None`.
#[must_use]
pub fn parse_amount(input: &str) -> Option<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => parse_amount(&n.to_string()),
        Some(serde_json::Value::String(s)) => parse_amount(&s),
        _ => None,
    })
}

fn lenient_entry_type<'de, D>(deserializer: D) -> Result<Option<EntryType>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => s.parse().ok(),
        _ => None,
    })
}
