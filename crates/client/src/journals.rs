//! Journal listing and submission.

use chrono::NaiveDate;
use ledgerly_core::fiscal::{FiscalPeriod, check_posting_date};
use ledgerly_core::form::JournalForm;
use ledgerly_core::ledger::{Journal, Tolerance};
use ledgerly_core::reports::ReportError;
use ledgerly_shared::types::{AccountId, JournalId, SubAccountId};
use tracing::{debug, info, warn};

use crate::api::ApiClient;
use crate::collection::RemoteCollection;
use crate::error::ClientError;
use crate::transport::ApiTransport;

/// Journal client: validates locally, then talks to the backend.
pub struct JournalClient<T: ApiTransport> {
    journals: RemoteCollection<Journal, T>,
    tolerance: Tolerance,
    fiscal_periods: Vec<FiscalPeriod>,
}

impl<T: ApiTransport> JournalClient<T> {
    /// Creates a journal client.
    #[must_use]
    pub fn new(api: ApiClient<T>, tolerance: Tolerance) -> Self {
        Self {
            journals: RemoteCollection::new(api),
            tolerance,
            fiscal_periods: Vec::new(),
        }
    }

    /// Enables the posting-date check against these periods.
    ///
    /// Without periods the check is left to the backend.
    #[must_use]
    pub fn with_fiscal_periods(mut self, periods: Vec<FiscalPeriod>) -> Self {
        self.fiscal_periods = periods;
        self
    }

    /// The underlying cached collection.
    #[must_use]
    pub const fn journals(&self) -> &RemoteCollection<Journal, T> {
        &self.journals
    }

    /// Lists all journals.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn list(&mut self) -> Result<&[Journal], ClientError> {
        self.journals.set_query(Vec::new());
        self.journals.refresh().await
    }

    /// Lists journals dated within `start..=end`.
    ///
    /// # Errors
    ///
    /// - `ClientError::Report(InvalidDateRange)` if `start > end`; nothing is sent
    /// - the request error otherwise
    pub async fn list_between(
        &mut self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<&[Journal], ClientError> {
        ReportError::check_range(start, end)?;
        self.journals.set_query(vec![
            ("startDate".to_string(), start.to_string()),
            ("endDate".to_string(), end.to_string()),
        ]);
        self.journals.refresh().await
    }

    /// Fetches one journal with its lines.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn get(&self, id: JournalId) -> Result<Journal, ClientError> {
        self.journals.get(id).await
    }

    /// Validates the form and creates or updates the journal.
    ///
    /// All local checks run before any request: line fields, balance within
    /// tolerance and, when periods are known, the posting date.
    ///
    /// # Errors
    ///
    /// - `ClientError::Form` when the form is incomplete or unbalanced
    /// - `ClientError::Fiscal` when the date has no open fiscal period
    /// - `ClientError::Api` when the backend rejects the journal
    pub async fn submit<F>(
        &mut self,
        form: &JournalForm,
        sub_account_owner: F,
    ) -> Result<Option<Journal>, ClientError>
    where
        F: Fn(SubAccountId) -> Option<AccountId>,
    {
        let request = form
            .to_request(self.tolerance, sub_account_owner)
            .inspect_err(|e| debug!(code = e.error_code(), error = %e, "Journal form rejected"))?;

        if !self.fiscal_periods.is_empty() {
            let period = check_posting_date(&self.fiscal_periods, form.journal_date())
                .inspect_err(|e| warn!(date = %form.journal_date(), error = %e, "Posting date rejected"))?;
            debug!(period = %period.period_name, "Posting date accepted");
        }

        let saved = match form.journal_id() {
            Some(id) => self.journals.update(id, &request).await?,
            None => self.journals.create(&request).await?,
        };

        info!(
            journal_number = %request.journal_number,
            lines = request.details.len(),
            "Journal submitted"
        );
        Ok(saved)
    }

    /// Deletes a journal.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn delete(&mut self, id: JournalId) -> Result<(), ClientError> {
        self.journals.delete(id).await
    }
}
