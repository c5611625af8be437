//! Report generation service.
//!
//! Computes the same reports the backend serves, from a flat list of posted
//! lines. Used for offline previews and to cross-check backend output.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use ledgerly_shared::types::AccountId;
use rust_decimal::Decimal;

use super::error::ReportError;
use super::types::{
    BalanceSheetReport, GeneralLedgerEntry, GeneralLedgerReport, PostedLine, ProfitLossReport,
    TrialBalanceEntry, TrialBalanceReport,
};
use crate::ledger::{Account, AccountType, RunningBalance};

/// Per-account debit and credit sums.
struct AccountTotals<'a> {
    line: &'a PostedLine,
    debit: Decimal,
    credit: Decimal,
}

/// Service for generating financial reports.
pub struct ReportService;

impl ReportService {
    /// Generates a trial balance over all lines dated on or before `as_of`.
    ///
    /// Each account is netted to a single debit or credit balance. Rows are
    /// sorted by account code.
    #[must_use]
    pub fn trial_balance(as_of: NaiveDate, lines: &[PostedLine]) -> TrialBalanceReport {
        let mut by_account: BTreeMap<AccountId, AccountTotals<'_>> = BTreeMap::new();

        for line in lines.iter().filter(|l| l.journal_date <= as_of) {
            let (debit, credit) = line.debit_credit();
            let totals = by_account.entry(line.account_id).or_insert(AccountTotals {
                line,
                debit: Decimal::ZERO,
                credit: Decimal::ZERO,
            });
            totals.debit += debit;
            totals.credit += credit;
        }

        let mut entries: Vec<TrialBalanceEntry> = by_account
            .into_values()
            .map(|totals| {
                let net = totals.debit - totals.credit;
                TrialBalanceEntry {
                    account_code: totals.line.account_code.clone(),
                    account_name: totals.line.account_name.clone(),
                    account_type: totals.line.account_type,
                    debit_balance: net.max(Decimal::ZERO),
                    credit_balance: (-net).max(Decimal::ZERO),
                }
            })
            .collect();
        entries.sort_by(|a, b| a.account_code.cmp(&b.account_code));

        let total_debit: Decimal = entries.iter().map(|e| e.debit_balance).sum();
        let total_credit: Decimal = entries.iter().map(|e| e.credit_balance).sum();

        TrialBalanceReport {
            as_of_date: as_of,
            entries,
            total_debit,
            total_credit,
            difference: Some(total_debit - total_credit),
        }
    }

    /// Generates a profit and loss report for `start..=end`.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidDateRange` if `start > end`.
    pub fn profit_loss(
        start: NaiveDate,
        end: NaiveDate,
        lines: &[PostedLine],
    ) -> Result<ProfitLossReport, ReportError> {
        ReportError::check_range(start, end)?;

        let mut revenue = Decimal::ZERO;
        let mut expense = Decimal::ZERO;

        for line in lines
            .iter()
            .filter(|l| l.journal_date >= start && l.journal_date <= end)
        {
            let (debit, credit) = line.debit_credit();
            let change = line.account_type.normal_balance().balance_change(debit, credit);
            match line.account_type {
                AccountType::Revenue => revenue += change,
                AccountType::Expense => expense += change,
                _ => {}
            }
        }

        Ok(ProfitLossReport {
            start_date: start,
            end_date: end,
            revenue,
            expense,
            net_profit: revenue - expense,
        })
    }

    /// Generates a balance sheet as of `as_of`.
    ///
    /// Net profit covers `fiscal_year_start..=as_of` and is added to the
    /// liabilities-and-equity side.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidDateRange` if `fiscal_year_start > as_of`.
    pub fn balance_sheet(
        as_of: NaiveDate,
        fiscal_year_start: NaiveDate,
        lines: &[PostedLine],
    ) -> Result<BalanceSheetReport, ReportError> {
        let net_profit = Self::profit_loss(fiscal_year_start, as_of, lines)?.net_profit;

        let mut assets = Decimal::ZERO;
        let mut liabilities = Decimal::ZERO;
        let mut equity = Decimal::ZERO;

        for line in lines.iter().filter(|l| l.journal_date <= as_of) {
            let (debit, credit) = line.debit_credit();
            let change = line.account_type.normal_balance().balance_change(debit, credit);
            match line.account_type {
                AccountType::Asset => assets += change,
                AccountType::Liability => liabilities += change,
                AccountType::Equity => equity += change,
                AccountType::Revenue | AccountType::Expense => {}
            }
        }

        Ok(BalanceSheetReport {
            as_of_date: as_of,
            assets,
            liabilities,
            equity,
            net_profit,
            total_liabilities_and_equity: liabilities + equity + net_profit,
            difference: None,
        })
    }

    /// Generates the general ledger of one account for `start..=end`.
    ///
    /// The opening balance accumulates every line before `start`. Rows keep
    /// their input order within a date.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidDateRange` if `start > end`.
    pub fn general_ledger(
        account: &Account,
        start: NaiveDate,
        end: NaiveDate,
        lines: &[PostedLine],
    ) -> Result<GeneralLedgerReport, ReportError> {
        ReportError::check_range(start, end)?;

        let normal = account.normal_balance();
        let mut account_lines: Vec<&PostedLine> =
            lines.iter().filter(|l| l.account_id == account.id).collect();
        account_lines.sort_by_key(|l| l.journal_date);

        let opening_balance: Decimal = account_lines
            .iter()
            .filter(|l| l.journal_date < start)
            .map(|l| {
                let (debit, credit) = l.debit_credit();
                normal.balance_change(debit, credit)
            })
            .sum();

        let mut running = RunningBalance::opening(opening_balance);
        let mut entries = Vec::new();

        for line in account_lines
            .into_iter()
            .filter(|l| l.journal_date >= start && l.journal_date <= end)
        {
            let (debit_amount, credit_amount) = line.debit_credit();
            running = running.next(normal.balance_change(debit_amount, credit_amount));
            entries.push(GeneralLedgerEntry {
                date: line.journal_date,
                journal_number: line.journal_number.clone(),
                description: line
                    .description
                    .clone()
                    .or_else(|| line.journal_description.clone()),
                debit_amount,
                credit_amount,
                balance: running.current_balance,
            });
        }

        Ok(GeneralLedgerReport {
            account_code: account.code.clone(),
            account_name: account.name.clone(),
            account_type: account.account_type,
            start_date: start,
            end_date: end,
            opening_balance,
            closing_balance: running.current_balance,
            entries,
        })
    }
}
