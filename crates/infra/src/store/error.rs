use std::path::PathBuf;

use thiserror::Error;

/// Storage failure. None of these are retried; the interaction that hit
/// them fails as a whole.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// A row parsed as CSV but its values are not a valid record.
    #[error("malformed row {row}: {message}")]
    Malformed { row: usize, message: String },

    #[error("store lock poisoned")]
    Poisoned,
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
