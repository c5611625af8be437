//! Cached, company-scoped CRUD over one [`Resource`] collection.

use ledgerly_shared::types::ListPayload;
use tracing::{info, warn};

use crate::api::{ApiClient, to_body};
use crate::error::ClientError;
use crate::resource::Resource;
use crate::transport::{ApiRequest, ApiTransport};

/// Load status of a [`RemoteCollection`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Never fetched.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The cached items reflect the last fetch.
    Loaded,
    /// The last fetch failed with this message.
    Failed(String),
}

impl LoadState {
    /// Returns the failure message, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// A cached list of `R` with create/update/delete.
///
/// Every successful mutation re-fetches the list. A failed re-fetch does not
/// undo the mutation; it is recorded in [`LoadState::Failed`].
pub struct RemoteCollection<R: Resource, T: ApiTransport> {
    api: ApiClient<T>,
    query: Vec<(String, String)>,
    items: Vec<R>,
    state: LoadState,
}

impl<R: Resource, T: ApiTransport> RemoteCollection<R, T> {
    /// Creates an empty, unfetched collection.
    #[must_use]
    pub fn new(api: ApiClient<T>) -> Self {
        Self {
            api,
            query: Vec::new(),
            items: Vec::new(),
            state: LoadState::Idle,
        }
    }

    /// Cached items from the last successful fetch.
    #[must_use]
    pub fn items(&self) -> &[R] {
        &self.items
    }

    /// Current load status.
    #[must_use]
    pub const fn state(&self) -> &LoadState {
        &self.state
    }

    /// Query parameters sent with every list request.
    #[must_use]
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Replaces the list query. Takes effect on the next refresh.
    pub fn set_query(&mut self, query: Vec<(String, String)>) {
        self.query = query;
    }

    /// Finds a cached item by id.
    #[must_use]
    pub fn find(&self, id: R::Id) -> Option<&R> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// The client used for requests.
    #[must_use]
    pub const fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    /// Fetches the list and replaces the cache.
    ///
    /// # Errors
    ///
    /// Returns the request error; the cache keeps its previous items.
    pub async fn refresh(&mut self) -> Result<&[R], ClientError> {
        self.state = LoadState::Loading;

        let mut request = ApiRequest::get(R::collection_path(self.api.context()));
        request.query.clone_from(&self.query);

        match self.api.execute::<ListPayload<R>>(request).await {
            Ok(payload) => {
                self.items = payload.map(ListPayload::into_items).unwrap_or_default();
                self.state = LoadState::Loaded;
                Ok(&self.items)
            }
            Err(e) => {
                self.state = LoadState::Failed(e.to_string());
                Err(e)
            }
        }
    }

    /// Fetches one item.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Api(AppError::NotFound)` when the backend has no such item.
    pub async fn get(&self, id: R::Id) -> Result<R, ClientError> {
        self.api
            .fetch(ApiRequest::get(R::item_path(self.api.context(), id)))
            .await
    }

    /// Creates an item and refreshes the list.
    ///
    /// Returns the created item when the backend echoes it.
    ///
    /// # Errors
    ///
    /// Returns the create error. Refresh errors are not returned.
    pub async fn create(&mut self, body: &R::Request) -> Result<Option<R>, ClientError> {
        let request = ApiRequest::post(R::collection_path(self.api.context()))
            .with_body(to_body(body)?);
        let created = self.api.execute::<R>(request).await?;

        info!(
            collection = R::COLLECTION,
            company_id = %self.api.context().company_id(),
            "Created item"
        );
        self.refresh_after("create").await;
        Ok(created)
    }

    /// Replaces an item and refreshes the list.
    ///
    /// # Errors
    ///
    /// Returns the update error. Refresh errors are not returned.
    pub async fn update(&mut self, id: R::Id, body: &R::Request) -> Result<Option<R>, ClientError> {
        let request =
            ApiRequest::put(R::item_path(self.api.context(), id)).with_body(to_body(body)?);
        let updated = self.api.execute::<R>(request).await?;

        info!(collection = R::COLLECTION, %id, "Updated item");
        self.refresh_after("update").await;
        Ok(updated)
    }

    /// Deletes an item and refreshes the list.
    ///
    /// # Errors
    ///
    /// Returns the delete error. Refresh errors are not returned.
    pub async fn delete(&mut self, id: R::Id) -> Result<(), ClientError> {
        self.api
            .send(ApiRequest::delete(R::item_path(self.api.context(), id)))
            .await?;

        info!(collection = R::COLLECTION, %id, "Deleted item");
        self.refresh_after("delete").await;
        Ok(())
    }

    /// Sends a custom request against this collection and refreshes on success.
    ///
    /// Used for actions such as closing a fiscal period or changing an
    /// invoice status.
    ///
    /// # Errors
    ///
    /// Returns the request error. Refresh errors are not returned.
    pub async fn mutate(&mut self, request: ApiRequest) -> Result<Option<R>, ClientError> {
        let action = format!("{} {}", request.method, request.path);
        let result = self.api.execute::<R>(request).await?;
        self.refresh_after(&action).await;
        Ok(result)
    }

    async fn refresh_after(&mut self, action: &str) {
        if let Err(e) = self.refresh().await {
            warn!(
                collection = R::COLLECTION,
                action,
                error = %e,
                "Refresh after mutation failed"
            );
        }
    }
}
