use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TrashError>;

#[derive(Debug, Error)]
pub enum TrashError {
    #[error("could not resolve {}: {source}", path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("refusing to trash {}: not a regular file", path.display())]
    NotAFile { path: PathBuf },

    #[error("path is not valid UTF-8: {}", path.display())]
    NonUtf8Path { path: PathBuf },

    #[error("failed to launch `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` could not trash {} ({status})", path.display())]
    Status {
        program: String,
        path: PathBuf,
        status: std::process::ExitStatus,
    },

    #[error("could not move {} to trash: {source}", path.display())]
    Backend {
        path: PathBuf,
        #[source]
        source: trash::Error,
    },
}
