use thiserror::Error;

use shopbook_core::DomainError;
use shopbook_store::StoreError;

/// Result type for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Anything a ledger operation can fail with: a deterministic domain
/// rejection, or a persistence fault from one of the flat files.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
