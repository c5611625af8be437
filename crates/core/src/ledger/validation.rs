//! Double-entry validation for journal drafts.

use rust_decimal::Decimal;

use super::entry::{EntryType, JournalLine};
use super::error::JournalValidationError;
use super::tolerance::Tolerance;
use super::types::{JournalDraft, JournalTotals};

/// Decides whether a journal draft is structurally postable.
///
/// This is a client-side convenience check. The backend re-validates every
/// journal and remains the source of truth.
pub struct JournalValidator;

impl JournalValidator {
    /// Sums line amounts per side.
    ///
    /// Missing amounts count as zero and lines without an entry type count
    /// toward neither side, so partially edited drafts never fail here.
    #[must_use]
    pub fn compute_totals(draft: &JournalDraft) -> JournalTotals {
        Self::compute_line_totals(&draft.lines)
    }

    /// Same as [`Self::compute_totals`] over a bare slice of lines.
    ///
    /// Sums saturate at the decimal bounds. Use [`Self::checked_line_totals`]
    /// to detect that case.
    #[must_use]
    pub fn compute_line_totals(lines: &[JournalLine]) -> JournalTotals {
        let mut debit_total = Decimal::ZERO;
        let mut credit_total = Decimal::ZERO;

        for line in lines {
            match line.entry_type {
                Some(EntryType::Debit) => {
                    debit_total = debit_total.saturating_add(line.amount_or_zero());
                }
                Some(EntryType::Credit) => {
                    credit_total = credit_total.saturating_add(line.amount_or_zero());
                }
                None => {}
            }
        }

        JournalTotals::new(debit_total, credit_total)
    }

    /// Sums line amounts per side, or `None` if either sum overflows.
    #[must_use]
    pub fn checked_line_totals(lines: &[JournalLine]) -> Option<JournalTotals> {
        let mut debit_total = Decimal::ZERO;
        let mut credit_total = Decimal::ZERO;

        for line in lines {
            match line.entry_type {
                Some(EntryType::Debit) => {
                    debit_total = debit_total.checked_add(line.amount_or_zero())?;
                }
                Some(EntryType::Credit) => {
                    credit_total = credit_total.checked_add(line.amount_or_zero())?;
                }
                None => {}
            }
        }

        Some(JournalTotals::new(debit_total, credit_total))
    }

    /// Returns true iff `|debit_total - credit_total| <= tolerance`.
    ///
    /// A difference outside the decimal range is never balanced.
    #[must_use]
    pub fn is_balanced(debit_total: Decimal, credit_total: Decimal, tolerance: Tolerance) -> bool {
        debit_total
            .checked_sub(credit_total)
            .is_some_and(|difference| tolerance.admits(difference))
    }

    /// Validates a draft with the default tolerance of 0.01.
    ///
    /// # Errors
    ///
    /// See [`Self::validate_for_submit_with`].
    pub fn validate_for_submit(draft: &JournalDraft) -> Result<(), JournalValidationError> {
        Self::validate_for_submit_with(draft, Tolerance::default())
    }

    /// Validates a draft before it is sent to the backend.
    ///
    /// # Errors
    ///
    /// - [`JournalValidationError::InsufficientLines`] when fewer than two lines exist
    /// - [`JournalValidationError::AmountOverflow`] when a total or the difference overflows
    /// - [`JournalValidationError::UnbalancedJournal`] when the totals differ beyond `tolerance`
    /// - [`JournalValidationError::InsufficientLines`] when no debit or no credit line exists
    pub fn validate_for_submit_with(
        draft: &JournalDraft,
        tolerance: Tolerance,
    ) -> Result<(), JournalValidationError> {
        let line_count = draft.lines.len();
        if line_count < 2 {
            return Err(JournalValidationError::InsufficientLines { line_count });
        }

        let totals = Self::checked_line_totals(&draft.lines)
            .ok_or(JournalValidationError::AmountOverflow)?;
        let difference = totals
            .checked_difference()
            .ok_or(JournalValidationError::AmountOverflow)?;
        if !tolerance.admits(difference) {
            return Err(JournalValidationError::UnbalancedJournal {
                debit_total: totals.debit_total,
                credit_total: totals.credit_total,
                difference,
            });
        }

        let has_side = |side: EntryType| draft.lines.iter().any(|l| l.entry_type == Some(side));
        if !has_side(EntryType::Debit) || !has_side(EntryType::Credit) {
            return Err(JournalValidationError::InsufficientLines { line_count });
        }

        Ok(())
    }
}
