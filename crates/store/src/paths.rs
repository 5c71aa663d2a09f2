use std::path::{Path, PathBuf};

/// Default snapshot file name.
pub const SNAPSHOT_FILE: &str = "inventory_status.csv";
/// Default history file name.
pub const HISTORY_FILE: &str = "purchase_history.csv";

/// Locations of the two persistence sinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePaths {
    pub snapshot: PathBuf,
    pub history: PathBuf,
}

impl StorePaths {
    /// Both files under `dir`, with the default names.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            snapshot: dir.join(SNAPSHOT_FILE),
            history: dir.join(HISTORY_FILE),
        }
    }
}

impl Default for StorePaths {
    /// Default file names in the current working directory.
    fn default() -> Self {
        Self::in_dir(".")
    }
}
