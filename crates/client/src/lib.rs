//! Company-scoped API client for Ledgerly.
//!
//! The client never talks HTTP itself. Requests go through an
//! [`ApiTransport`] supplied by the caller, which makes every component
//! testable with an in-memory transport.
//!
//! # Modules
//!
//! - `context` - Session and company scope
//! - `transport` - Request type and transport seam
//! - `api` - Envelope handling
//! - `collection` - Generic cached CRUD
//! - `resources` - Backend entities
//! - `journals`, `reports`, `fiscal`, `billing` - Domain-specific clients

pub mod api;
pub mod billing;
pub mod collection;
pub mod context;
pub mod error;
pub mod fiscal;
pub mod journals;
pub mod reports;
pub mod resource;
pub mod resources;
pub mod transport;

pub use api::ApiClient;
pub use collection::{LoadState, RemoteCollection};
pub use context::{CompanyContext, Session};
pub use error::ClientError;
pub use fiscal::FiscalPeriodClient;
pub use journals::JournalClient;
pub use reports::{Checked, ReportClient};
pub use resource::Resource;
pub use transport::{ApiRequest, ApiTransport, Method, TransportError};
