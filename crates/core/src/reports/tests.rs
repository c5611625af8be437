//! Tests for report aggregation and reconciliation.

use chrono::NaiveDate;
use ledgerly_shared::types::AccountId;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::ReportError;
use super::reconciler::{BalancingIdentity, StatementReconciler};
use super::service::ReportService;
use super::types::PostedLine;
use crate::ledger::{Account, AccountType, EntryType};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn chart() -> Vec<Account> {
    [
        (1, "1100", "Cash", AccountType::Asset),
        (2, "1300", "Receivables", AccountType::Asset),
        (3, "2100", "Payables", AccountType::Liability),
        (4, "3100", "Capital", AccountType::Equity),
        (5, "4100", "Sales", AccountType::Revenue),
        (6, "5100", "Rent", AccountType::Expense),
    ]
    .into_iter()
    .map(|(id, code, name, account_type)| Account {
        id: AccountId::new(id),
        code: code.to_string(),
        name: name.to_string(),
        account_type,
        is_system: false,
    })
    .collect()
}

fn posted(
    account: &Account,
    journal_date: NaiveDate,
    journal_number: &str,
    entry_type: EntryType,
    amount: Decimal,
) -> PostedLine {
    PostedLine {
        journal_date,
        journal_number: journal_number.to_string(),
        journal_description: Some(format!("Journal {journal_number}")),
        account_id: account.id,
        account_code: account.code.clone(),
        account_name: account.name.clone(),
        account_type: account.account_type,
        entry_type,
        amount,
        description: None,
    }
}

/// Capital injection, a sale on credit, rent paid, all in the first quarter of 2025.
fn sample_ledger() -> Vec<PostedLine> {
    let c = chart();
    vec![
        posted(&c[0], date(2025, 1, 5), "J-1", EntryType::Debit, dec!(1000000)),
        posted(&c[3], date(2025, 1, 5), "J-1", EntryType::Credit, dec!(1000000)),
        posted(&c[1], date(2025, 2, 10), "J-2", EntryType::Debit, dec!(300000)),
        posted(&c[4], date(2025, 2, 10), "J-2", EntryType::Credit, dec!(300000)),
        posted(&c[5], date(2025, 3, 1), "J-3", EntryType::Debit, dec!(120000)),
        posted(&c[0], date(2025, 3, 1), "J-3", EntryType::Credit, dec!(80000)),
        posted(&c[2], date(2025, 3, 1), "J-3", EntryType::Credit, dec!(40000)),
    ]
}

#[test]
fn test_trial_balance_nets_and_sorts_accounts() {
    let report = ReportService::trial_balance(date(2025, 3, 31), &sample_ledger());

    let codes: Vec<&str> = report.entries.iter().map(|e| e.account_code.as_str()).collect();
    assert_eq!(codes, ["1100", "1300", "2100", "3100", "4100", "5100"]);

    let cash = &report.entries[0];
    assert_eq!(cash.debit_balance, dec!(920000));
    assert_eq!(cash.credit_balance, dec!(0));

    let payables = &report.entries[2];
    assert_eq!(payables.debit_balance, dec!(0));
    assert_eq!(payables.credit_balance, dec!(40000));

    assert_eq!(report.total_debit, dec!(1340000));
    assert_eq!(report.total_credit, dec!(1340000));
    assert_eq!(report.difference, Some(dec!(0)));
    assert!(StatementReconciler::check_balance(&report).ok);
}

#[test]
fn test_trial_balance_respects_as_of_date() {
    let report = ReportService::trial_balance(date(2025, 1, 31), &sample_ledger());
    assert_eq!(report.entries.len(), 2);
    assert_eq!(report.total_debit, dec!(1000000));
}

#[test]
fn test_trial_balance_keeps_zero_balance_accounts() {
    let c = chart();
    let lines = vec![
        posted(&c[0], date(2025, 1, 1), "J-1", EntryType::Debit, dec!(500)),
        posted(&c[0], date(2025, 1, 2), "J-2", EntryType::Credit, dec!(500)),
    ];
    let report = ReportService::trial_balance(date(2025, 1, 31), &lines);
    assert_eq!(report.entries.len(), 1);
    assert_eq!(report.entries[0].debit_balance, dec!(0));
    assert_eq!(report.entries[0].credit_balance, dec!(0));
}

#[test]
fn test_profit_loss() {
    let report =
        ReportService::profit_loss(date(2025, 1, 1), date(2025, 3, 31), &sample_ledger()).unwrap();
    assert_eq!(report.revenue, dec!(300000));
    assert_eq!(report.expense, dec!(120000));
    assert_eq!(report.net_profit, dec!(180000));

    let february =
        ReportService::profit_loss(date(2025, 2, 1), date(2025, 2, 28), &sample_ledger()).unwrap();
    assert_eq!(february.expense, dec!(0));
    assert_eq!(february.net_profit, dec!(300000));
}

#[test]
fn test_balance_sheet_includes_net_profit() {
    let report =
        ReportService::balance_sheet(date(2025, 3, 31), date(2025, 1, 1), &sample_ledger()).unwrap();

    assert_eq!(report.assets, dec!(1220000));
    assert_eq!(report.liabilities, dec!(40000));
    assert_eq!(report.equity, dec!(1000000));
    assert_eq!(report.net_profit, dec!(180000));
    assert_eq!(report.total_liabilities_and_equity, dec!(1220000));

    let check = StatementReconciler::check_balance(&report);
    assert!(check.ok);
    assert_eq!(check.difference, dec!(0));
}

#[test]
fn test_balance_sheet_late_fiscal_start_leaves_gap() {
    // Revenue booked before the fiscal-year start is not picked up as net profit.
    let report =
        ReportService::balance_sheet(date(2025, 3, 31), date(2025, 3, 1), &sample_ledger()).unwrap();
    assert_eq!(report.net_profit, dec!(-120000));
    assert_eq!(report.derived_difference(), Some(dec!(300000)));
    assert!(!StatementReconciler::check_balance(&report).ok);
}

#[test]
fn test_general_ledger_running_balance() {
    let c = chart();
    let cash = &c[0];
    let mut lines = sample_ledger();
    lines.push(
        PostedLine {
            description: Some("Petty cash".to_string()),
            ..posted(cash, date(2025, 4, 2), "J-4", EntryType::Credit, dec!(20000))
        },
    );
    lines.push(posted(&c[3], date(2025, 4, 2), "J-4", EntryType::Debit, dec!(20000)));

    let report =
        ReportService::general_ledger(cash, date(2025, 2, 1), date(2025, 4, 30), &lines).unwrap();

    assert_eq!(report.account_code, "1100");
    assert_eq!(report.opening_balance, dec!(1000000));
    assert_eq!(report.entries.len(), 2);

    assert_eq!(report.entries[0].journal_number, "J-3");
    assert_eq!(report.entries[0].credit_amount, dec!(80000));
    assert_eq!(report.entries[0].balance, dec!(920000));
    assert_eq!(report.entries[0].description.as_deref(), Some("Journal J-3"));

    assert_eq!(report.entries[1].balance, dec!(900000));
    assert_eq!(report.entries[1].description.as_deref(), Some("Petty cash"));
    assert_eq!(report.closing_balance, dec!(900000));
}

#[test]
fn test_general_ledger_credit_normal_account() {
    let c = chart();
    let report =
        ReportService::general_ledger(&c[4], date(2025, 1, 1), date(2025, 12, 31), &sample_ledger())
            .unwrap();
    assert_eq!(report.opening_balance, dec!(0));
    assert_eq!(report.entries[0].balance, dec!(300000));
    assert_eq!(report.closing_balance, dec!(300000));
}

#[test]
fn test_invalid_date_ranges() {
    let lines = sample_ledger();
    let (start, end) = (date(2025, 3, 31), date(2025, 1, 1));
    let expected = ReportError::InvalidDateRange { start, end };

    assert_eq!(ReportService::profit_loss(start, end, &lines), Err(expected.clone()));
    assert_eq!(
        ReportService::general_ledger(&chart()[0], start, end, &lines),
        Err(expected)
    );
    assert_eq!(
        ReportService::balance_sheet(date(2025, 1, 1), date(2025, 4, 1), &lines),
        Err(ReportError::InvalidDateRange {
            start: date(2025, 4, 1),
            end: date(2025, 1, 1),
        })
    );
}

/// Strategy for a balanced journal: one debit and one credit line between two accounts.
fn balanced_journal() -> impl Strategy<Value = (usize, usize, i64, u32)> {
    (0usize..6, 0usize..6, 1i64..10_000_000i64, 0u32..90)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A trial balance built from balanced journals always balances.
    #[test]
    fn prop_trial_balance_of_balanced_journals_balances(
        journals in prop::collection::vec(balanced_journal(), 0..30),
    ) {
        let c = chart();
        let start = date(2025, 1, 1);
        let mut lines = Vec::new();
        for (n, (from, to, cents, day)) in journals.into_iter().enumerate() {
            let amount = Decimal::new(cents, 2);
            let when = start + chrono::Duration::days(i64::from(day));
            let number = format!("J-{n}");
            lines.push(posted(&c[from], when, &number, EntryType::Debit, amount));
            lines.push(posted(&c[to], when, &number, EntryType::Credit, amount));
        }

        let report = ReportService::trial_balance(date(2025, 12, 31), &lines);
        prop_assert_eq!(report.total_debit, report.total_credit);
        prop_assert!(StatementReconciler::check_balance(&report).ok);
    }

    /// Within one fiscal year, assets = liabilities + equity + net profit.
    #[test]
    fn prop_balance_sheet_equation_holds(
        journals in prop::collection::vec(balanced_journal(), 0..30),
    ) {
        let c = chart();
        let start = date(2025, 1, 1);
        let mut lines = Vec::new();
        for (n, (from, to, cents, day)) in journals.into_iter().enumerate() {
            let amount = Decimal::new(cents, 2);
            let when = start + chrono::Duration::days(i64::from(day));
            let number = format!("J-{n}");
            lines.push(posted(&c[from], when, &number, EntryType::Debit, amount));
            lines.push(posted(&c[to], when, &number, EntryType::Credit, amount));
        }

        let report = ReportService::balance_sheet(date(2025, 12, 31), start, &lines).unwrap();
        prop_assert_eq!(report.assets, report.total_liabilities_and_equity);
        prop_assert_eq!(StatementReconciler::check_balance(&report).difference, Decimal::ZERO);
    }

    /// Closing balance = opening balance + sum of row changes.
    #[test]
    fn prop_general_ledger_closing_balance(
        amounts in prop::collection::vec((any::<bool>(), 1i64..1_000_000i64, 0u32..120), 0..40),
        split_day in 0u32..120,
    ) {
        let c = chart();
        let cash = &c[0];
        let base = date(2025, 1, 1);
        let lines: Vec<PostedLine> = amounts
            .iter()
            .enumerate()
            .map(|(n, (is_debit, cents, day))| {
                let side = if *is_debit { EntryType::Debit } else { EntryType::Credit };
                let when = base + chrono::Duration::days(i64::from(*day));
                posted(cash, when, &format!("J-{n}"), side, Decimal::new(*cents, 2))
            })
            .collect();

        let start = base + chrono::Duration::days(i64::from(split_day));
        let report = ReportService::general_ledger(cash, start, date(2025, 12, 31), &lines).unwrap();

        let movement: Decimal = report
            .entries
            .iter()
            .map(|e| e.debit_amount - e.credit_amount)
            .sum();
        prop_assert_eq!(report.closing_balance, report.opening_balance + movement);
        prop_assert_eq!(report.entries.len(), lines.iter().filter(|l| l.journal_date >= start).count());
    }
}
