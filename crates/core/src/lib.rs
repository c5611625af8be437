//! Core accounting logic for Ledgerly.
//!
//! This crate contains pure business logic with ZERO transport or UI dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `ledger` - Double-entry bookkeeping logic and journal validation
//! - `form` - Journal entry form state
//! - `fiscal` - Fiscal period posting rules
//! - `reports` - Report reconciliation and aggregation

pub mod fiscal;
pub mod form;
pub mod ledger;
pub mod reports;
