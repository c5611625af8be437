//! Envelope-aware request execution.

use std::sync::Arc;

use ledgerly_shared::AppError;
use ledgerly_shared::types::ApiEnvelope;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::context::CompanyContext;
use crate::error::ClientError;
use crate::transport::{ApiRequest, ApiTransport};

/// Sends requests for one company and unwraps the backend envelope.
pub struct ApiClient<T: ApiTransport> {
    transport: Arc<T>,
    context: CompanyContext,
}

impl<T: ApiTransport> Clone for ApiClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            context: self.context,
        }
    }
}

impl<T: ApiTransport> ApiClient<T> {
    /// Creates a client scoped to `context`.
    #[must_use]
    pub fn new(transport: Arc<T>, context: CompanyContext) -> Self {
        Self { transport, context }
    }

    /// The company this client is scoped to.
    #[must_use]
    pub const fn context(&self) -> &CompanyContext {
        &self.context
    }

    /// Sends a request and returns the envelope's `data`, which may be absent.
    ///
    /// # Errors
    ///
    /// - `ClientError::Api` when the backend reports a failure
    /// - `ClientError::Transport` when no answer arrived
    /// - `ClientError::Decode` when the answer is not a valid envelope
    pub async fn execute<D: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<Option<D>, ClientError> {
        let method = request.method;
        let path = request.path.clone();
        debug!(%method, %path, "Sending API request");

        let value = self.transport.send(request).await.map_err(|e| {
            warn!(%method, %path, error = %e, "API request failed");
            ClientError::from(e)
        })?;

        let envelope: ApiEnvelope<D> = serde_json::from_value(value)
            .map_err(|e| ClientError::Decode(format!("{method} {path}: {e}")))?;

        envelope.into_result().map_err(|e| {
            warn!(%method, %path, code = e.error_code(), "Backend rejected request");
            ClientError::Api(e)
        })
    }

    /// Sends a request whose envelope must carry `data`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::execute`], plus `ClientError::Decode` when `data` is missing.
    pub async fn fetch<D: DeserializeOwned>(&self, request: ApiRequest) -> Result<D, ClientError> {
        let what = format!("{} {}", request.method, request.path);
        self.execute(request)
            .await?
            .ok_or_else(|| ClientError::Decode(format!("{what}: response has no data")))
    }

    /// Sends a request and ignores any `data`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::execute`].
    pub async fn send(&self, request: ApiRequest) -> Result<(), ClientError> {
        self.execute::<Value>(request).await.map(|_| ())
    }
}

/// Serializes a request body.
///
/// # Errors
///
/// Returns `ClientError::Api(AppError::Internal)` if the body cannot be serialized.
pub fn to_body<B: Serialize + ?Sized>(body: &B) -> Result<Value, ClientError> {
    serde_json::to_value(body)
        .map_err(|e| ClientError::Api(AppError::Internal(format!("Cannot serialize body: {e}"))))
}
