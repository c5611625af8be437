//! Pagination types for list endpoints.
//!
//! Most collections come back as a plain JSON array. Invoices and payments are
//! paged by the backend and come back as a page object with a `content` array.

use serde::{Deserialize, Serialize};

/// A page of results as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    /// The items in the current page.
    pub content: Vec<T>,
    /// Current page number (0-indexed).
    #[serde(default)]
    pub number: u32,
    /// Items per page.
    #[serde(default)]
    pub size: u32,
    /// Total number of items across all pages.
    #[serde(default)]
    pub total_elements: u64,
    /// Total number of pages.
    #[serde(default)]
    pub total_pages: u32,
}

/// A list payload in either shape the backend uses.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    /// A plain array.
    Items(Vec<T>),
    /// A paged object.
    Page(PageResponse<T>),
}

impl<T> ListPayload<T> {
    /// Returns the items regardless of shape.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Items(items) => items,
            Self::Page(page) => page.content,
        }
    }
}

#[cfg(test)]
#[path = "pagination_tests.rs"]
mod tests;
