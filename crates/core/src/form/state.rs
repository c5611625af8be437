//! Journal entry form state and its reducer.
//!
//! All edits go through [`JournalForm::apply`]. Amounts are kept as the raw
//! text the user typed and parsed only when totals or a request are needed.

use chrono::{NaiveDate, Utc};
use ledgerly_shared::types::{AccountId, JournalId, SubAccountId};
use serde::{Deserialize, Serialize};

use super::error::FormError;
use crate::ledger::{
    EntryType, Journal, JournalDetailRequest, JournalDraft, JournalLine, JournalRequest,
    JournalTotals, JournalValidator, Tolerance, journal_number, parse_amount,
};

/// Fewest lines a journal form may hold.
pub const MIN_LINES: usize = 2;

/// One editable line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormLine {
    /// 1-based position, always in sync with the line's index.
    pub line_number: u32,
    /// Debit or credit.
    pub entry_type: EntryType,
    /// Selected account.
    pub account_id: Option<AccountId>,
    /// Selected sub-account.
    pub sub_account_id: Option<SubAccountId>,
    /// Amount as typed.
    pub amount: String,
    /// Line description as typed.
    pub description: String,
}

impl FormLine {
    fn blank(line_number: u32, entry_type: EntryType) -> Self {
        Self {
            line_number,
            entry_type,
            account_id: None,
            sub_account_id: None,
            amount: String::new(),
            description: String::new(),
        }
    }

    /// Converts the line into a draft line. Unparseable amounts become `None`.
    #[must_use]
    pub fn to_line(&self) -> JournalLine {
        JournalLine {
            entry_type: Some(self.entry_type),
            account_id: self.account_id,
            sub_account_id: self.sub_account_id,
            amount: parse_amount(&self.amount),
            description: non_blank(&self.description),
        }
    }
}

/// Edits accepted by [`JournalForm::apply`]. Line indices are 0-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JournalFormAction {
    /// Changes the journal date.
    SetDate(NaiveDate),
    /// Changes the journal description.
    SetDescription(String),
    /// Appends a blank debit line.
    AddLine,
    /// Removes a line.
    RemoveLine(usize),
    /// Changes a line's side.
    SetEntryType(usize, EntryType),
    /// Changes a line's account.
    SetAccount(usize, Option<AccountId>),
    /// Changes a line's sub-account.
    SetSubAccount(usize, Option<SubAccountId>),
    /// Changes a line's amount text.
    SetAmount(usize, String),
    /// Changes a line's description.
    SetLineDescription(usize, String),
}

/// State of the journal create/edit form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalForm {
    journal_id: Option<JournalId>,
    journal_number: Option<String>,
    journal_date: NaiveDate,
    description: String,
    lines: Vec<FormLine>,
}

impl JournalForm {
    /// Starts a new journal with one debit and one credit line.
    #[must_use]
    pub fn new(journal_date: NaiveDate) -> Self {
        Self {
            journal_id: None,
            journal_number: None,
            journal_date,
            description: String::new(),
            lines: vec![
                FormLine::blank(1, EntryType::Debit),
                FormLine::blank(2, EntryType::Credit),
            ],
        }
    }

    /// Loads an existing journal for editing. Its number is kept on submit.
    #[must_use]
    pub fn edit(journal: &Journal) -> Self {
        let mut details: Vec<_> = journal.details.iter().collect();
        details.sort_by_key(|d| d.line_number);

        let mut form = Self {
            journal_id: Some(journal.id),
            journal_number: Some(journal.journal_number.clone()),
            journal_date: journal.journal_date,
            description: journal.description.clone().unwrap_or_default(),
            lines: details
                .into_iter()
                .map(|d| FormLine {
                    line_number: d.line_number,
                    entry_type: d.entry_type,
                    account_id: Some(d.account_id),
                    sub_account_id: d.sub_account_id,
                    amount: d.amount.to_string(),
                    description: d.description.clone().unwrap_or_default(),
                })
                .collect(),
        };
        form.renumber();
        form
    }

    /// The journal being edited, if any.
    #[must_use]
    pub fn journal_id(&self) -> Option<JournalId> {
        self.journal_id
    }

    /// The journal number, once assigned.
    #[must_use]
    pub fn journal_number(&self) -> Option<&str> {
        self.journal_number.as_deref()
    }

    /// The journal date.
    #[must_use]
    pub fn journal_date(&self) -> NaiveDate {
        self.journal_date
    }

    /// The journal description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The current lines.
    #[must_use]
    pub fn lines(&self) -> &[FormLine] {
        &self.lines
    }

    /// Applies one edit.
    ///
    /// # Errors
    ///
    /// - `FormError::LineOutOfRange` when the index does not name a line
    /// - `FormError::MinimumLines` when removing would leave fewer than two lines
    pub fn apply(&mut self, action: JournalFormAction) -> Result<(), FormError> {
        match action {
            JournalFormAction::SetDate(date) => self.journal_date = date,
            JournalFormAction::SetDescription(text) => self.description = text,
            JournalFormAction::AddLine => {
                let line_number = next_line_number(self.lines.len());
                self.lines.push(FormLine::blank(line_number, EntryType::Debit));
            }
            JournalFormAction::RemoveLine(index) => {
                self.line_mut(index)?;
                if self.lines.len() <= MIN_LINES {
                    return Err(FormError::MinimumLines { minimum: MIN_LINES });
                }
                self.lines.remove(index);
                self.renumber();
            }
            JournalFormAction::SetEntryType(index, entry_type) => {
                self.line_mut(index)?.entry_type = entry_type;
            }
            JournalFormAction::SetAccount(index, account_id) => {
                let line = self.line_mut(index)?;
                if line.account_id != account_id {
                    line.sub_account_id = None;
                }
                line.account_id = account_id;
            }
            JournalFormAction::SetSubAccount(index, sub_account_id) => {
                self.line_mut(index)?.sub_account_id = sub_account_id;
            }
            JournalFormAction::SetAmount(index, text) => {
                self.line_mut(index)?.amount = text;
            }
            JournalFormAction::SetLineDescription(index, text) => {
                self.line_mut(index)?.description = text;
            }
        }
        Ok(())
    }

    /// The form as a draft, for live totals and validation.
    #[must_use]
    pub fn draft(&self) -> JournalDraft {
        JournalDraft {
            journal_date: self.journal_date,
            description: non_blank(&self.description),
            lines: self.lines.iter().map(FormLine::to_line).collect(),
        }
    }

    /// Running debit and credit totals.
    #[must_use]
    pub fn totals(&self) -> JournalTotals {
        JournalValidator::compute_totals(&self.draft())
    }

    /// Checks the form and builds the request body.
    ///
    /// `sub_account_owner` maps a sub-account to the account it belongs to.
    /// New journals get a number derived from the date and the current time.
    ///
    /// # Errors
    ///
    /// - `FormError::MissingAccount`, `MissingAmount`, `NonPositiveAmount` or
    ///   `SubAccountMismatch` for the first offending line
    /// - `FormError::Validation` when the journal does not balance
    pub fn to_request<F>(
        &self,
        tolerance: Tolerance,
        sub_account_owner: F,
    ) -> Result<JournalRequest, FormError>
    where
        F: Fn(SubAccountId) -> Option<AccountId>,
    {
        let sequence = Utc::now().timestamp_millis().unsigned_abs();
        self.to_request_numbered(tolerance, sub_account_owner, sequence)
    }

    /// Same as [`Self::to_request`] with an explicit number sequence.
    ///
    /// `sequence` is only used when the form has no journal number yet.
    ///
    /// # Errors
    ///
    /// See [`Self::to_request`].
    pub fn to_request_numbered<F>(
        &self,
        tolerance: Tolerance,
        sub_account_owner: F,
        sequence: u64,
    ) -> Result<JournalRequest, FormError>
    where
        F: Fn(SubAccountId) -> Option<AccountId>,
    {
        let mut details = Vec::with_capacity(self.lines.len());

        for line in &self.lines {
            let line_number = line.line_number;
            let account_id = line
                .account_id
                .ok_or(FormError::MissingAccount { line_number })?;
            let amount =
                parse_amount(&line.amount).ok_or(FormError::MissingAmount { line_number })?;
            if amount.is_sign_negative() || amount.is_zero() {
                return Err(FormError::NonPositiveAmount { line_number });
            }
            if let Some(sub_account_id) = line.sub_account_id
                && sub_account_owner(sub_account_id) != Some(account_id)
            {
                return Err(FormError::SubAccountMismatch {
                    line_number,
                    sub_account_id,
                    account_id,
                });
            }

            details.push(JournalDetailRequest {
                line_number,
                entry_type: line.entry_type,
                account_id,
                sub_account_id: line.sub_account_id,
                tax_type_id: None,
                partner_id: None,
                amount,
                tax_amount: None,
                description: non_blank(&line.description),
            });
        }

        JournalValidator::validate_for_submit_with(&self.draft(), tolerance)?;

        let journal_number = self
            .journal_number
            .clone()
            .unwrap_or_else(|| journal_number(self.journal_date, sequence));

        Ok(JournalRequest {
            journal_date: self.journal_date,
            journal_number,
            description: non_blank(&self.description),
            details,
        })
    }

    fn line_mut(&mut self, index: usize) -> Result<&mut FormLine, FormError> {
        let len = self.lines.len();
        self.lines
            .get_mut(index)
            .ok_or(FormError::LineOutOfRange { index, len })
    }

    fn renumber(&mut self) {
        for (index, line) in self.lines.iter_mut().enumerate() {
            line.line_number = next_line_number(index);
        }
    }
}

/// Line number for the line stored at `index` (i.e., `index + 1`).
fn next_line_number(index: usize) -> u32 {
    u32::try_from(index).map_or(u32::MAX, |i| i.saturating_add(1))
}

fn non_blank(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
