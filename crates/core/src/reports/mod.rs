//! Financial reports.
//!
//! This module provides pure business logic for financial reports:
//! - Balance checks of backend-produced trial balances and balance sheets
//! - Trial Balance, Balance Sheet, Profit & Loss and General Ledger
//!   aggregation over posted lines

pub mod error;
pub mod reconciler;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::ReportError;
pub use reconciler::{BalancingIdentity, StatementReconciler};
pub use service::ReportService;
pub use types::*;
