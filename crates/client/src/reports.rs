//! Financial report fetching with balance checks.

use chrono::NaiveDate;
use ledgerly_core::ledger::Tolerance;
use ledgerly_core::reports::{
    BalanceCheck, BalanceSheetReport, BalancingIdentity, GeneralLedgerReport, ProfitLossReport,
    ReportError, StatementReconciler, TrialBalanceReport,
};
use ledgerly_shared::types::AccountId;
use serde::Serialize;
use tracing::{info, warn};

use crate::api::ApiClient;
use crate::error::ClientError;
use crate::transport::{ApiRequest, ApiTransport};

/// A report together with its balance check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Checked<R> {
    /// The report as returned by the backend.
    pub report: R,
    /// Whether its balancing identity holds.
    pub check: BalanceCheck,
}

/// Fetches reports for one company.
pub struct ReportClient<T: ApiTransport> {
    api: ApiClient<T>,
    tolerance: Tolerance,
}

impl<T: ApiTransport> ReportClient<T> {
    /// Creates a report client.
    #[must_use]
    pub const fn new(api: ApiClient<T>, tolerance: Tolerance) -> Self {
        Self { api, tolerance }
    }

    fn request(&self, report: &str) -> ApiRequest {
        ApiRequest::get(self.api.context().path(&format!("reports/{report}")))
    }

    fn check<R: BalancingIdentity>(&self, kind: &'static str, report: R) -> Checked<R> {
        let check = StatementReconciler::check_balance_with(&report, self.tolerance);
        if check.ok {
            info!(report = kind, "Report balances");
        } else {
            warn!(
                report = kind,
                difference = %check.difference,
                company_id = %self.api.context().company_id(),
                "Report does not balance"
            );
        }
        Checked { report, check }
    }

    /// Fetches the trial balance as of a date and checks it.
    ///
    /// # Errors
    ///
    /// Returns the request error. An unbalanced report is not an error.
    pub async fn trial_balance(
        &self,
        as_of: NaiveDate,
    ) -> Result<Checked<TrialBalanceReport>, ClientError> {
        let report = self
            .api
            .fetch(self.request("trial-balance").with_query("asOfDate", as_of))
            .await?;
        Ok(self.check("trial-balance", report))
    }

    /// Fetches the balance sheet as of a date and checks it.
    ///
    /// # Errors
    ///
    /// Returns the request error. An unbalanced report is not an error.
    pub async fn balance_sheet(
        &self,
        as_of: NaiveDate,
    ) -> Result<Checked<BalanceSheetReport>, ClientError> {
        let report = self
            .api
            .fetch(self.request("balance-sheet").with_query("asOfDate", as_of))
            .await?;
        Ok(self.check("balance-sheet", report))
    }

    /// Fetches the profit and loss statement for `start..=end`.
    ///
    /// # Errors
    ///
    /// - `ClientError::Report(InvalidDateRange)` if `start > end`; nothing is sent
    /// - the request error otherwise
    pub async fn profit_loss(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<ProfitLossReport, ClientError> {
        ReportError::check_range(start, end)?;
        self.api
            .fetch(
                self.request("profit-loss")
                    .with_query("startDate", start)
                    .with_query("endDate", end),
            )
            .await
    }

    /// Fetches the general ledger of one account for `start..=end`.
    ///
    /// # Errors
    ///
    /// - `ClientError::Report(InvalidDateRange)` if `start > end`; nothing is sent
    /// - the request error otherwise
    pub async fn general_ledger(
        &self,
        account_id: AccountId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<GeneralLedgerReport, ClientError> {
        ReportError::check_range(start, end)?;
        self.api
            .fetch(
                self.request("general-ledger")
                    .with_query("accountId", account_id)
                    .with_query("startDate", start)
                    .with_query("endDate", end),
            )
            .await
    }
}
