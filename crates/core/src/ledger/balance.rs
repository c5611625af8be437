//! Account types and normal-balance rules.
//!
//! - Asset/Expense: balance += debit - credit (debit-normal)
//! - Liability/Equity/Revenue: balance += credit - debit (credit-normal)

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Chart of accounts classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountType {
    /// Resources owned.
    Asset,
    /// Obligations owed.
    Liability,
    /// Owners' residual interest.
    Equity,
    /// Income earned.
    Revenue,
    /// Costs incurred.
    Expense,
}

impl AccountType {
    /// Returns the side on which this account type grows.
    #[must_use]
    pub const fn normal_balance(self) -> NormalBalance {
        match self {
            Self::Asset | Self::Expense => NormalBalance::Debit,
            Self::Liability | Self::Equity | Self::Revenue => NormalBalance::Credit,
        }
    }

    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asset => "ASSET",
            Self::Liability => "LIABILITY",
            Self::Equity => "EQUITY",
            Self::Revenue => "REVENUE",
            Self::Expense => "EXPENSE",
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ASSET" => Ok(Self::Asset),
            "LIABILITY" => Ok(Self::Liability),
            "EQUITY" => Ok(Self::Equity),
            "REVENUE" => Ok(Self::Revenue),
            "EXPENSE" => Ok(Self::Expense),
            _ => Err(format!("Unknown account type: {s}")),
        }
    }
}

/// The side that increases an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormalBalance {
    /// Debit-normal accounts (Asset, Expense).
    Debit,
    /// Credit-normal accounts (Liability, Equity, Revenue).
    Credit,
}

impl NormalBalance {
    /// Calculates the balance change for a pair of debit and credit amounts.
    #[must_use]
    pub fn balance_change(self, debit: Decimal, credit: Decimal) -> Decimal {
        match self {
            Self::Debit => debit - credit,
            Self::Credit => credit - debit,
        }
    }
}

/// Running balance of one account across a sequence of lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunningBalance {
    /// Balance before the latest line.
    pub previous_balance: Decimal,
    /// Balance after the latest line.
    pub current_balance: Decimal,
}

impl RunningBalance {
    /// Starts from an opening balance.
    #[must_use]
    pub const fn opening(balance: Decimal) -> Self {
        Self {
            previous_balance: balance,
            current_balance: balance,
        }
    }

    /// Applies a balance change.
    ///
    /// current_balance[N] = current_balance[N-1] + change
    #[must_use]
    pub fn next(self, change: Decimal) -> Self {
        Self {
            previous_balance: self.current_balance,
            current_balance: self.current_balance + change,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_normal_balance_by_type() {
        assert_eq!(AccountType::Asset.normal_balance(), NormalBalance::Debit);
        assert_eq!(AccountType::Expense.normal_balance(), NormalBalance::Debit);
        assert_eq!(AccountType::Liability.normal_balance(), NormalBalance::Credit);
        assert_eq!(AccountType::Equity.normal_balance(), NormalBalance::Credit);
        assert_eq!(AccountType::Revenue.normal_balance(), NormalBalance::Credit);
    }

    #[test]
    fn test_balance_change() {
        assert_eq!(NormalBalance::Debit.balance_change(dec!(100), dec!(30)), dec!(70));
        assert_eq!(NormalBalance::Credit.balance_change(dec!(100), dec!(30)), dec!(-70));
    }

    #[test]
    fn test_account_type_parse() {
        assert_eq!("asset".parse::<AccountType>().unwrap(), AccountType::Asset);
        assert_eq!("REVENUE".parse::<AccountType>().unwrap(), AccountType::Revenue);
        assert!("other".parse::<AccountType>().is_err());
    }

    fn balance_change_strategy() -> impl Strategy<Value = Decimal> {
        (-100_000i64..100_000i64).prop_map(|n| Decimal::new(n, 2))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Each step's previous balance is the prior step's current balance.
        #[test]
        fn prop_running_balance_chains(
            opening in balance_change_strategy(),
            changes in prop::collection::vec(balance_change_strategy(), 1..20),
        ) {
            let mut rb = RunningBalance::opening(opening);
            let mut expected = opening;
            for change in &changes {
                let next = rb.next(*change);
                prop_assert_eq!(next.previous_balance, rb.current_balance);
                prop_assert_eq!(next.current_balance, next.previous_balance + *change);
                expected += *change;
                rb = next;
            }
            prop_assert_eq!(rb.current_balance, expected);
        }

        /// Debit-normal and credit-normal changes are exact opposites.
        #[test]
        fn prop_normal_sides_are_opposite(
            debit in 0i64..1_000_000i64,
            credit in 0i64..1_000_000i64,
        ) {
            let debit = Decimal::new(debit, 2);
            let credit = Decimal::new(credit, 2);
            prop_assert_eq!(
                NormalBalance::Debit.balance_change(debit, credit),
                -NormalBalance::Credit.balance_change(debit, credit)
            );
        }
    }
}
