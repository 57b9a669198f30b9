use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, info};

use crate::model::{HistoryDocument, HistoryGroup, ImageLocation};

use super::{HistoryError, PromptGroups, Result};

/// Appended to the history path to name the single-slot backup.
pub const BACKUP_SUFFIX: &str = ".backup.json";

pub fn backup_path_for(path: impl AsRef<Path>) -> PathBuf {
    let mut raw = OsString::from(path.as_ref().as_os_str());
    raw.push(BACKUP_SUFFIX);
    PathBuf::from(raw)
}

/// In-memory history document plus the prompt-grouped view derived from it.
///
/// The grouped view is empty until [`HistoryStore::group_by_prompt`] builds
/// it. Once built, deletions rebuild it and re-apply the current search.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    document: HistoryDocument,
    data_path: Option<PathBuf>,
    grouped: Option<PromptGroups>,
    active: PromptGroups,
    query: String,
}

impl HistoryStore {
    pub fn new(document: HistoryDocument, data_path: Option<PathBuf>) -> Self {
        Self {
            document,
            data_path,
            grouped: None,
            active: PromptGroups::default(),
            query: String::new(),
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| HistoryError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let document = parse(&raw)?;
        info!(
            path = %path.display(),
            groups = document.group_count(),
            images = document.image_count(),
            "loaded history"
        );
        Ok(Self::new(document, Some(path.to_path_buf())))
    }

    pub fn load_from_text(text: &str) -> Result<Self> {
        Ok(Self::new(parse(text)?, None))
    }

    pub fn document(&self) -> &HistoryDocument {
        &self.document
    }

    pub fn data_path(&self) -> Option<&Path> {
        self.data_path.as_deref()
    }

    pub fn backup_path(&self) -> Result<PathBuf> {
        self.data_path
            .as_ref()
            .map(backup_path_for)
            .ok_or(HistoryError::NoBackingPath)
    }

    /// Newest group first.
    pub fn list_groups_reversed(&self) -> Vec<&HistoryGroup> {
        self.document.groups_reversed().collect()
    }

    /// Rebuilds the prompt grouping from the document and makes it the active
    /// view, discarding any search.
    pub fn group_by_prompt(&mut self) -> &PromptGroups {
        let grouped = PromptGroups::from_groups(self.document.groups_reversed());
        self.active = grouped.clone();
        self.grouped = Some(grouped);
        self.query.clear();
        &self.active
    }

    /// Narrows the active view to prompts matching `query`. Each call filters
    /// the full grouping afresh, so successive searches do not compound.
    pub fn search(&mut self, query: &str) {
        query.clone_into(&mut self.query);
        self.active = match &self.grouped {
            Some(grouped) => grouped.filter_by_query(query),
            None => PromptGroups::default(),
        };
        debug!(
            query,
            prompts = self.active.len(),
            "filtered prompt groups"
        );
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn prompt_groups(&self) -> &PromptGroups {
        &self.active
    }

    pub fn find_image(&self, job_id: &str) -> Option<ImageLocation<'_>> {
        self.document.find_image(job_id)
    }

    /// Removes the first image with `job_id`. Returns `false` when no such
    /// image exists, which callers treat as already deleted.
    pub fn delete_image_by_job_id(&mut self, job_id: &str) -> bool {
        if self.document.remove_image(job_id).is_none() {
            debug!(job_id, "no image with this job id");
            return false;
        }
        if self.grouped.is_some() {
            let query = std::mem::take(&mut self.query);
            self.group_by_prompt();
            self.search(&query);
        }
        true
    }

    /// Writes the document to `path`. `indent` of `None` writes compact JSON.
    pub fn save_to(&self, path: impl AsRef<Path>, indent: Option<usize>) -> Result<()> {
        let path = path.as_ref();
        let encoded = encode(&self.document, indent)?;
        fs::write(path, encoded).map_err(|source| HistoryError::Persist {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "saved history");
        Ok(())
    }

    /// Writes the document back to the file it was loaded from.
    pub fn save(&self, indent: Option<usize>) -> Result<()> {
        let path = self.data_path.as_ref().ok_or(HistoryError::NoBackingPath)?;
        self.save_to(path, indent)
    }

    /// Sum of the group-sequence lengths in the active view.
    pub fn total_images(&self) -> usize {
        self.active.total_groups()
    }

    pub fn total_image_records(&self) -> usize {
        self.active.total_image_records()
    }

    pub fn total_grouped_prompts(&self) -> usize {
        self.active.len()
    }
}

fn parse(text: &str) -> Result<HistoryDocument> {
    serde_json::from_str(text).map_err(HistoryError::Malformed)
}

fn encode(document: &HistoryDocument, indent: Option<usize>) -> Result<Vec<u8>> {
    let Some(width) = indent else {
        return serde_json::to_vec(document).map_err(HistoryError::Encode);
    };
    let indent = vec![b' '; width];
    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(&indent));
    document
        .serialize(&mut serializer)
        .map_err(HistoryError::Encode)?;
    Ok(buffer)
}
