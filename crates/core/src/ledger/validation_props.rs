//! Property-based tests for journal validation rules.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use ledgerly_shared::types::AccountId;

use super::entry::{EntryType, JournalLine};
use super::error::JournalValidationError;
use super::types::JournalDraft;
use super::validation::JournalValidator;

/// Strategy to generate a non-negative amount (0.00 to 1,000,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate an entry type, including the absent case.
fn maybe_entry_type() -> impl Strategy<Value = Option<EntryType>> {
    prop_oneof![
        Just(Some(EntryType::Debit)),
        Just(Some(EntryType::Credit)),
        Just(None),
    ]
}

/// Strategy to generate a possibly incomplete line.
fn any_line() -> impl Strategy<Value = JournalLine> {
    (maybe_entry_type(), prop::option::of(amount())).prop_map(|(entry_type, amount)| JournalLine {
        entry_type,
        account_id: Some(AccountId::new(1)),
        amount,
        ..JournalLine::default()
    })
}

fn draft(lines: Vec<JournalLine>) -> JournalDraft {
    JournalDraft {
        journal_date: NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
        description: None,
        lines,
    }
}

/// Splits `total` into `cuts.len() + 1` lines of the given side that sum to `total`.
fn split_lines(side: EntryType, total: Decimal, cuts: &[u32]) -> Vec<JournalLine> {
    let mut remaining = total;
    let mut lines = Vec::with_capacity(cuts.len() + 1);
    for cut in cuts {
        let part = (remaining * Decimal::from(*cut) / Decimal::from(100)).round_dp(2);
        remaining -= part;
        lines.push(JournalLine::new(side, AccountId::new(1), part));
    }
    lines.push(JournalLine::new(side, AccountId::new(2), remaining));
    lines
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Balanced drafts with at least one line per side are accepted.
    #[test]
    fn prop_balanced_draft_accepted(
        total in amount(),
        debit_cuts in prop::collection::vec(0u32..=100, 0..4),
        credit_cuts in prop::collection::vec(0u32..=100, 0..4),
    ) {
        let mut lines = split_lines(EntryType::Debit, total, &debit_cuts);
        lines.extend(split_lines(EntryType::Credit, total, &credit_cuts));

        let result = JournalValidator::validate_for_submit(&draft(lines));
        prop_assert!(result.is_ok(), "balanced draft rejected: {:?}", result);
    }

    /// Imbalance beyond the tolerance is rejected with the exact figures.
    #[test]
    fn prop_unbalanced_draft_rejected(
        debit in amount(),
        gap_cents in 2i64..10_000_000i64,
        debit_heavy in any::<bool>(),
    ) {
        let gap = Decimal::new(gap_cents, 2);
        let (debit, credit) = if debit_heavy { (debit + gap, debit) } else { (debit, debit + gap) };
        let lines = vec![
            JournalLine::debit(AccountId::new(1), debit),
            JournalLine::credit(AccountId::new(2), credit),
        ];

        let result = JournalValidator::validate_for_submit(&draft(lines));
        prop_assert_eq!(
            result,
            Err(JournalValidationError::UnbalancedJournal {
                debit_total: debit,
                credit_total: credit,
                difference: debit - credit,
            })
        );
    }

    /// One line is never enough, whatever its side or amount.
    #[test]
    fn prop_single_line_rejected(line in any_line()) {
        let result = JournalValidator::validate_for_submit(&draft(vec![line]));
        prop_assert_eq!(
            result,
            Err(JournalValidationError::InsufficientLines { line_count: 1 })
        );
    }

    /// Totals do not depend on line order.
    #[test]
    fn prop_totals_order_independent(
        lines in prop::collection::vec(any_line(), 0..12),
        rotate_by in 0usize..12,
    ) {
        let forward = JournalValidator::compute_line_totals(&lines);

        let mut reversed = lines.clone();
        reversed.reverse();
        prop_assert_eq!(forward, JournalValidator::compute_line_totals(&reversed));

        let mut rotated = lines.clone();
        if !rotated.is_empty() {
            let n = rotate_by % rotated.len();
            rotated.rotate_left(n);
        }
        prop_assert_eq!(forward, JournalValidator::compute_line_totals(&rotated));
    }

    /// Lines without a side never move either total.
    #[test]
    fn prop_sideless_lines_ignored(
        lines in prop::collection::vec(any_line(), 0..8),
        stray in amount(),
    ) {
        let before = JournalValidator::compute_line_totals(&lines);

        let mut with_stray = lines.clone();
        with_stray.push(JournalLine {
            entry_type: None,
            amount: Some(stray),
            ..JournalLine::default()
        });
        prop_assert_eq!(before, JournalValidator::compute_line_totals(&with_stray));
    }
}
