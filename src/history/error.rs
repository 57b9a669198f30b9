use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HistoryError>;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("failed to read history file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed history document: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("failed to write history file {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("history serialization failure: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("history was loaded from text and has no backing file")]
    NoBackingPath,
}
