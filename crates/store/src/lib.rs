//! Flat-file persistence for the ledger.
//!
//! Two comma-delimited files with header rows carry the persisted state:
//!
//! - the **snapshot** (`inventory_status.csv`): the complete current item
//!   set, fully rewritten on every mutating item operation;
//! - the **history** (`purchase_history.csv`): append-only purchase log,
//!   header written once when the file is empty.
//!
//! Writes are plain truncate/append with no locking; the system assumes a
//! single process (see the ledger crate docs).

pub mod error;
pub mod history;
pub mod paths;
pub mod snapshot;

pub use error::{StoreError, StoreResult};
pub use history::{append_purchase, read_history};
pub use paths::StorePaths;
pub use snapshot::{SnapshotRow, read_snapshot, write_snapshot};
