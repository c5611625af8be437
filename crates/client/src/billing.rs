//! Invoice and payment actions beyond plain CRUD.

use ledgerly_shared::types::InvoiceId;

use crate::collection::RemoteCollection;
use crate::error::ClientError;
use crate::resource::Resource;
use crate::resources::{Invoice, InvoiceStatus, Payment};
use crate::transport::{ApiRequest, ApiTransport};

impl<T: ApiTransport> RemoteCollection<Invoice, T> {
    /// Moves an invoice to `status` and refreshes the list.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn set_status(
        &mut self,
        id: InvoiceId,
        status: InvoiceStatus,
    ) -> Result<Option<Invoice>, ClientError> {
        let path = format!("{}/status", Invoice::item_path(self.api().context(), id));
        self.mutate(ApiRequest::patch(path).with_query("status", status))
            .await
    }
}

impl<T: ApiTransport> RemoteCollection<Payment, T> {
    /// Fetches the payments made against one invoice.
    ///
    /// The cached list is left untouched.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn for_invoice(&self, invoice_id: InvoiceId) -> Result<Vec<Payment>, ClientError> {
        let path = format!(
            "{}/by-invoice/{invoice_id}",
            Payment::collection_path(self.api().context())
        );
        Ok(self
            .api()
            .execute::<Vec<Payment>>(ApiRequest::get(path))
            .await?
            .unwrap_or_default())
    }
}
