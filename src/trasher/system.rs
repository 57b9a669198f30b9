use std::path::Path;

use tracing::debug;

use super::{Result, TrashError, Trasher};

/// The platform recycle facility, via the `trash` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTrash;

impl Trasher for SystemTrash {
    fn name(&self) -> &str {
        "system"
    }

    fn move_to_trash(&self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), "moving file to system trash");
        ::trash::delete(path).map_err(|source| TrashError::Backend {
            path: path.to_path_buf(),
            source,
        })
    }
}
