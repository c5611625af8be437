//! Journal entry form.
//!
//! Structured form state for creating and editing journals, mutated only
//! through typed actions.

pub mod error;
pub mod state;

pub use error::FormError;
pub use state::{FormLine, JournalForm, JournalFormAction, MIN_LINES};
