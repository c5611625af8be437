//! Fiscal period maintenance.

use ledgerly_core::fiscal::{FiscalPeriod, FiscalPeriodRequest};
use ledgerly_shared::types::FiscalPeriodId;
use tracing::info;

use crate::api::ApiClient;
use crate::collection::RemoteCollection;
use crate::error::ClientError;
use crate::resource::Resource;
use crate::transport::{ApiRequest, ApiTransport};

/// Lists, creates, closes and reopens fiscal periods.
pub struct FiscalPeriodClient<T: ApiTransport> {
    periods: RemoteCollection<FiscalPeriod, T>,
}

impl<T: ApiTransport> FiscalPeriodClient<T> {
    /// Creates a fiscal period client.
    #[must_use]
    pub fn new(api: ApiClient<T>) -> Self {
        Self {
            periods: RemoteCollection::new(api),
        }
    }

    /// The underlying cached collection.
    #[must_use]
    pub const fn periods(&self) -> &RemoteCollection<FiscalPeriod, T> {
        &self.periods
    }

    /// Lists all periods.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn list(&mut self) -> Result<&[FiscalPeriod], ClientError> {
        self.periods.refresh().await
    }

    /// Creates a period.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn create(
        &mut self,
        request: &FiscalPeriodRequest,
    ) -> Result<Option<FiscalPeriod>, ClientError> {
        self.periods.create(request).await
    }

    /// Closes a period so no journal can be posted into it.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn close(&mut self, id: FiscalPeriodId) -> Result<Option<FiscalPeriod>, ClientError> {
        self.transition(id, "close").await
    }

    /// Reopens a closed period.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn reopen(&mut self, id: FiscalPeriodId) -> Result<Option<FiscalPeriod>, ClientError> {
        self.transition(id, "reopen").await
    }

    async fn transition(
        &mut self,
        id: FiscalPeriodId,
        action: &str,
    ) -> Result<Option<FiscalPeriod>, ClientError> {
        let path = format!(
            "{}/{action}",
            FiscalPeriod::item_path(self.periods.api().context(), id)
        );
        let period = self.periods.mutate(ApiRequest::post(path)).await?;
        info!(period_id = %id, action, "Fiscal period updated");
        Ok(period)
    }
}
