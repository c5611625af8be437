//! Common types used across the application.

pub mod envelope;
pub mod id;
pub mod pagination;

pub use envelope::{ApiEnvelope, ErrorInfo};
pub use id::*;
pub use pagination::{ListPayload, PageResponse};
