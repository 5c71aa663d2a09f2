use thiserror::Error;

/// Result type for persistence operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence-level failure.
///
/// These are infrastructure faults, kept apart from the domain error
/// taxonomy. A failed write leaves in-memory and on-disk state divergent;
/// the caller decides what to do with that.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
