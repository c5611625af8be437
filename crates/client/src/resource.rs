//! The resource abstraction behind [`crate::collection::RemoteCollection`].

use std::fmt::Display;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::context::CompanyContext;

/// A backend entity exposed as a REST collection.
pub trait Resource: DeserializeOwned + Clone + Send + Sync + 'static {
    /// Collection path segment, e.g. `"sub-accounts"`.
    const COLLECTION: &'static str;

    /// Whether the collection lives under `/companies/{companyId}`.
    const COMPANY_SCOPED: bool = true;

    /// Identifier type.
    type Id: Display + Copy + PartialEq + Send + Sync;

    /// Body used to create or update the entity.
    type Request: Serialize + Send + Sync;

    /// Returns the entity's identifier.
    fn id(&self) -> Self::Id;

    /// Path of the collection.
    #[must_use]
    fn collection_path(context: &CompanyContext) -> String {
        if Self::COMPANY_SCOPED {
            context.path(Self::COLLECTION)
        } else {
            format!("/{}", Self::COLLECTION)
        }
    }

    /// Path of one entity.
    #[must_use]
    fn item_path(context: &CompanyContext, id: Self::Id) -> String {
        format!("{}/{id}", Self::collection_path(context))
    }
}
