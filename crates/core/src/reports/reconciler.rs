//! Balance checks for backend-produced reports.
//!
//! - Trial balance: `total_debit - total_credit`
//! - Balance sheet: `assets - (liabilities + equity + net_profit)`
//!
//! A precomputed difference, when present, takes precedence over the derived one.
//! Figures whose difference falls outside the decimal range never balance.

use rust_decimal::Decimal;

use super::types::{
    BalanceCheck, BalanceSheetFigures, BalanceSheetReport, ReportFigures, TrialBalanceFigures,
    TrialBalanceReport,
};
use crate::ledger::Tolerance;

/// A report whose figures must satisfy an accounting identity.
pub trait BalancingIdentity {
    /// The difference supplied with the report, if any.
    fn supplied_difference(&self) -> Option<Decimal>;

    /// The difference derived from the report's totals, or `None` if it
    /// overflows.
    fn derived_difference(&self) -> Option<Decimal>;

    /// The supplied difference, or the derived one when absent.
    fn difference(&self) -> Option<Decimal> {
        self.supplied_difference()
            .or_else(|| self.derived_difference())
    }
}

impl BalancingIdentity for TrialBalanceFigures {
    fn supplied_difference(&self) -> Option<Decimal> {
        self.difference
    }

    fn derived_difference(&self) -> Option<Decimal> {
        self.total_debit.checked_sub(self.total_credit)
    }
}

impl BalancingIdentity for BalanceSheetFigures {
    fn supplied_difference(&self) -> Option<Decimal> {
        self.difference
    }

    fn derived_difference(&self) -> Option<Decimal> {
        let other_side = self
            .liabilities
            .checked_add(self.equity)?
            .checked_add(self.net_profit)?;
        self.assets.checked_sub(other_side)
    }
}

impl BalancingIdentity for ReportFigures {
    fn supplied_difference(&self) -> Option<Decimal> {
        match self {
            Self::TrialBalance(f) => f.supplied_difference(),
            Self::BalanceSheet(f) => f.supplied_difference(),
        }
    }

    fn derived_difference(&self) -> Option<Decimal> {
        match self {
            Self::TrialBalance(f) => f.derived_difference(),
            Self::BalanceSheet(f) => f.derived_difference(),
        }
    }
}

impl BalancingIdentity for TrialBalanceReport {
    fn supplied_difference(&self) -> Option<Decimal> {
        self.difference
    }

    fn derived_difference(&self) -> Option<Decimal> {
        self.figures().derived_difference()
    }
}

impl BalancingIdentity for BalanceSheetReport {
    fn supplied_difference(&self) -> Option<Decimal> {
        self.difference
    }

    fn derived_difference(&self) -> Option<Decimal> {
        self.figures().derived_difference()
    }
}

/// Checks whether report figures balance.
pub struct StatementReconciler;

impl StatementReconciler {
    /// Checks figures with the default tolerance of 0.01.
    #[must_use]
    pub fn check_balance<F>(figures: &F) -> BalanceCheck
    where
        F: BalancingIdentity + ?Sized,
    {
        Self::check_balance_with(figures, Tolerance::default())
    }

    /// Checks figures against an explicit tolerance. Never fails.
    ///
    /// An overflowing difference is reported as `Decimal::MAX` and never
    /// balances.
    #[must_use]
    pub fn check_balance_with<F>(figures: &F, tolerance: Tolerance) -> BalanceCheck
    where
        F: BalancingIdentity + ?Sized,
    {
        match figures.difference() {
            Some(difference) => BalanceCheck {
                ok: tolerance.admits(difference),
                difference,
            },
            None => BalanceCheck {
                ok: false,
                difference: Decimal::MAX,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn tb(total_debit: Decimal, total_credit: Decimal) -> TrialBalanceFigures {
        TrialBalanceFigures {
            total_debit,
            total_credit,
            difference: None,
        }
    }

    fn bs(assets: Decimal, liabilities: Decimal, equity: Decimal, net_profit: Decimal) -> BalanceSheetFigures {
        BalanceSheetFigures {
            assets,
            liabilities,
            equity,
            net_profit,
            total_liabilities_and_equity: liabilities + equity + net_profit,
            difference: None,
        }
    }

    #[rstest]
    #[case::balanced(dec!(100000), dec!(100000), true, dec!(0))]
    #[case::half_unit_off(dec!(100000), dec!(99999.5), false, dec!(0.5))]
    #[case::within_tolerance(dec!(100000.01), dec!(100000), true, dec!(0.01))]
    #[case::credit_heavy(dec!(500), dec!(700), false, dec!(-200))]
    #[case::empty(dec!(0), dec!(0), true, dec!(0))]
    fn test_trial_balance_check(
        #[case] total_debit: Decimal,
        #[case] total_credit: Decimal,
        #[case] ok: bool,
        #[case] difference: Decimal,
    ) {
        let check = StatementReconciler::check_balance(&tb(total_debit, total_credit));
        assert_eq!(check, BalanceCheck { ok, difference });
    }

    #[rstest]
    #[case::balanced(dec!(1000000), dec!(400000), dec!(500000), dec!(100000), true, dec!(0))]
    #[case::net_loss(dec!(850000), dec!(400000), dec!(500000), dec!(-50000), true, dec!(0))]
    #[case::missing_profit(dec!(1000000), dec!(400000), dec!(500000), dec!(0), false, dec!(100000))]
    fn test_balance_sheet_check(
        #[case] assets: Decimal,
        #[case] liabilities: Decimal,
        #[case] equity: Decimal,
        #[case] net_profit: Decimal,
        #[case] ok: bool,
        #[case] difference: Decimal,
    ) {
        let check = StatementReconciler::check_balance(&bs(assets, liabilities, equity, net_profit));
        assert_eq!(check, BalanceCheck { ok, difference });
    }

    #[test]
    fn test_supplied_difference_takes_precedence() {
        let figures = TrialBalanceFigures {
            difference: Some(dec!(3)),
            ..tb(dec!(100), dec!(100))
        };
        let check = StatementReconciler::check_balance(&figures);
        assert!(!check.ok);
        assert_eq!(check.difference, dec!(3));
    }

    #[test]
    fn test_tagged_figures_dispatch() {
        let json = serde_json::json!({
            "kind": "balance-sheet",
            "assets": "1000000",
            "liabilities": "400000",
            "equity": "500000",
            "netProfit": "100000"
        });
        let figures: ReportFigures = serde_json::from_value(json).unwrap();
        let check = StatementReconciler::check_balance(&figures);
        assert_eq!(check, BalanceCheck { ok: true, difference: dec!(0) });

        let figures = ReportFigures::TrialBalance(tb(dec!(100000), dec!(99999.5)));
        assert_eq!(figures.difference(), Some(dec!(0.5)));
    }

    #[test]
    fn test_figures_beyond_decimal_range() {
        let figures = tb(Decimal::MAX, dec!(-1));
        assert_eq!(figures.derived_difference(), None);
        assert_eq!(
            StatementReconciler::check_balance(&figures),
            BalanceCheck { ok: false, difference: Decimal::MAX }
        );

        let figures = BalanceSheetFigures {
            assets: dec!(-10),
            liabilities: Decimal::MAX,
            equity: dec!(1),
            net_profit: Decimal::ZERO,
            total_liabilities_and_equity: Decimal::MAX,
            difference: None,
        };
        assert_eq!(figures.derived_difference(), None);
        assert!(!StatementReconciler::check_balance(&figures).ok);
    }

    #[test]
    fn test_explicit_tolerance() {
        let figures = tb(dec!(100), dec!(99.5));
        assert!(!StatementReconciler::check_balance(&figures).ok);
        let loose = Tolerance::new(dec!(1)).unwrap();
        assert!(StatementReconciler::check_balance_with(&figures, loose).ok);
        assert!(!StatementReconciler::check_balance_with(&tb(dec!(1), dec!(1.001)), Tolerance::exact()).ok);
    }
}
