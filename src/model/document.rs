use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{HistoryGroup, ImageRecord};

/// Root of `history.json`. Groups are kept in insertion (creation) order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryDocument {
    pub history: IndexMap<String, HistoryGroup>,
    #[serde(flatten)]
    pub extras: Map<String, Value>,
}

/// An image together with the group that owns it.
#[derive(Debug, Clone, Copy)]
pub struct ImageLocation<'a> {
    pub group_id: &'a str,
    pub group: &'a HistoryGroup,
    pub image: &'a ImageRecord,
}

impl HistoryDocument {
    pub fn groups_reversed(&self) -> impl Iterator<Item = &HistoryGroup> {
        self.history.values().rev()
    }

    pub fn group_count(&self) -> usize {
        self.history.len()
    }

    pub fn image_count(&self) -> usize {
        self.history.values().map(|group| group.imgs.len()).sum()
    }

    /// First image carrying `job_id`, scanning in document order.
    pub fn find_image(&self, job_id: &str) -> Option<ImageLocation<'_>> {
        self.history.iter().find_map(|(group_id, group)| {
            group.position_of(job_id).map(|index| ImageLocation {
                group_id,
                group,
                image: &group.imgs[index],
            })
        })
    }

    /// Removes the first image carrying `job_id` and drops its group if that
    /// left it empty. Later duplicates are untouched.
    pub fn remove_image(&mut self, job_id: &str) -> Option<ImageRecord> {
        let mut emptied = None;
        let mut removed = None;
        for (group_id, group) in self.history.iter_mut() {
            if let Some(index) = group.position_of(job_id) {
                removed = Some(group.remove_image(index));
                if group.is_empty() {
                    emptied = Some(group_id.clone());
                }
                break;
            }
        }
        if let Some(group_id) = emptied {
            self.history.shift_remove(&group_id);
        }
        removed
    }
}
