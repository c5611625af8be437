//! Chart of accounts entries.

use ledgerly_shared::types::AccountId;
use serde::{Deserialize, Serialize};

use super::balance::{AccountType, NormalBalance};

/// An account as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique identifier.
    pub id: AccountId,
    /// Account code (e.g., "1100").
    pub code: String,
    /// Account name.
    pub name: String,
    /// Classification.
    pub account_type: AccountType,
    /// System accounts cannot be deleted.
    #[serde(default)]
    pub is_system: bool,
}

impl Account {
    /// Returns the side on which this account grows.
    #[must_use]
    pub const fn normal_balance(&self) -> NormalBalance {
        self.account_type.normal_balance()
    }
}

/// Body of `POST /accounts` and `PUT /accounts/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRequest {
    /// Account code.
    pub code: String,
    /// Account name.
    pub name: String,
    /// Classification.
    pub account_type: AccountType,
    /// System flag.
    #[serde(default)]
    pub is_system: bool,
}
