//! Fiscal period management.

pub mod error;
pub mod period;
pub mod posting;

pub use error::FiscalError;
pub use period::{FiscalPeriod, FiscalPeriodRequest};
pub use posting::{check_posting_date, find_period, fiscal_year_start};
