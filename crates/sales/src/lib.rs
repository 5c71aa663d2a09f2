//! Sales domain module.
//!
//! The immutable purchase record (one transaction, as persisted to the
//! history file) and the top-customer spend report derived from a stream of
//! such records.

pub mod purchase;
pub mod report;

pub use purchase::PurchaseRecord;
pub use report::{CustomerSpend, DEFAULT_MIN_SPENT, top_customers};
