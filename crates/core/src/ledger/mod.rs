//! Double-entry bookkeeping logic.
//!
//! This module implements the journal side of the client:
//! - Journal lines and drafts (debits and credits)
//! - Debit/credit totals and the balancing tolerance
//! - Submit-time validation and its error types
//! - Accounts, account types and normal-balance rules
//! - Stored journals and their request bodies

pub mod account;
pub mod balance;
pub mod entry;
pub mod error;
pub mod journal;
pub mod tolerance;
pub mod types;
pub mod validation;

#[cfg(test)]
mod validation_props;

pub use account::{Account, AccountRequest};
pub use balance::{AccountType, NormalBalance, RunningBalance};
pub use entry::{EntryType, JournalLine, parse_amount};
pub use error::JournalValidationError;
pub use journal::{Journal, JournalDetail, JournalDetailRequest, JournalRequest, journal_number};
pub use tolerance::{NegativeTolerance, Tolerance};
pub use types::{JournalDraft, JournalTotals};
pub use validation::JournalValidator;
