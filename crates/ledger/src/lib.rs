//! `shopbook-ledger` — the inventory ledger facade.
//!
//! Composes the domain crates (inventory, customers, sales) with the
//! flat-file store into one owned [`Ledger`] value. A host application (CLI,
//! UI, whatever) drives it directly; there is no network or command-line
//! surface in this workspace.

pub mod error;
pub mod ledger;

pub use error::{LedgerError, LedgerResult};
pub use ledger::Ledger;

// The types callers touch through the facade.
pub use shopbook_core::{CustomerId, DomainError, ItemId, Timestamp};
pub use shopbook_sales::{CustomerSpend, DEFAULT_MIN_SPENT, PurchaseRecord};
pub use shopbook_store::StorePaths;
