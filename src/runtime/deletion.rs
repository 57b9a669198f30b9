use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use crate::history::{HistoryError, HistoryStore};
use crate::trasher::{self, TrashError, Trasher};

use super::Result;

/// What a deletion request ended up doing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletionOutcome {
    pub job_id: String,
    /// Absolute path of the image file, when the record names one.
    pub file: Option<PathBuf>,
    /// `false` when there was no file left to trash.
    pub trashed: bool,
    /// `false` when no record carried the job id.
    pub removed: bool,
    pub backup: Option<PathBuf>,
}

impl DeletionOutcome {
    fn not_found(job_id: &str) -> Self {
        Self {
            job_id: job_id.to_string(),
            file: None,
            trashed: false,
            removed: false,
            backup: None,
        }
    }
}

/// Deletes an image file and its history record together.
///
/// The file goes to the trash first. Only once that has succeeded (or there
/// was no file) is the current document copied to the backup slot, the record
/// removed, and the document rewritten in place.
pub struct DeletionService {
    trasher: Box<dyn Trasher>,
    indent: Option<usize>,
}

impl std::fmt::Debug for DeletionService {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("DeletionService")
            .field("trasher", &self.trasher.name())
            .field("indent", &self.indent)
            .finish()
    }
}

impl DeletionService {
    pub fn new(trasher: impl Trasher + 'static) -> Self {
        Self {
            trasher: Box::new(trasher),
            indent: None,
        }
    }

    pub fn with_indent(mut self, indent: Option<usize>) -> Self {
        self.indent = indent;
        self
    }

    pub fn trasher(&self) -> &dyn Trasher {
        self.trasher.as_ref()
    }

    pub fn delete_image(&self, store: &mut HistoryStore, job_id: &str) -> Result<DeletionOutcome> {
        let data_path = store
            .data_path()
            .ok_or(HistoryError::NoBackingPath)?
            .to_path_buf();
        let Some(location) = store.find_image(job_id) else {
            info!(job_id, "image already absent from history");
            return Ok(DeletionOutcome::not_found(job_id));
        };
        let file = location
            .image
            .generated_img()
            .map(|path| resolve(&path))
            .transpose()?;

        let trashed = match &file {
            Some(path) => self.trash_if_present(path)?,
            None => {
                warn!(job_id, "image record names no file; removing record only");
                false
            }
        };

        let backup = store.backup_path()?;
        store.save_to(&backup, self.indent)?;

        let mut staged = store.clone();
        let removed = staged.delete_image_by_job_id(job_id);
        staged.save_to(&data_path, self.indent)?;
        *store = staged;

        info!(
            job_id,
            trashed,
            backup = %backup.display(),
            "deleted image"
        );
        Ok(DeletionOutcome {
            job_id: job_id.to_string(),
            file,
            trashed,
            removed,
            backup: Some(backup),
        })
    }

    fn trash_if_present(&self, path: &Path) -> Result<bool> {
        let exists = path.try_exists().map_err(|source| TrashError::Resolve {
            path: path.to_path_buf(),
            source,
        })?;
        if !exists {
            warn!(path = %path.display(), "image file already gone; nothing to trash");
            return Ok(false);
        }
        if !path.is_file() {
            warn!(
                path = %path.display(),
                "image path is not a regular file; history left untouched"
            );
            return Err(TrashError::NotAFile {
                path: path.to_path_buf(),
            }
            .into());
        }
        self.trasher.move_to_trash(path).inspect_err(|error| {
            warn!(path = %path.display(), %error, "trash failed; history left untouched");
        })?;
        Ok(true)
    }
}

fn resolve(path: &Path) -> trasher::Result<PathBuf> {
    std::path::absolute(path).map_err(|source| TrashError::Resolve {
        path: path.to_path_buf(),
        source,
    })
}
