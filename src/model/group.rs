use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{ImageRecord, Params};

/// One generation run: every image produced for a single prompt submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryGroup {
    pub imgs: Vec<ImageRecord>,
    pub num_imgs: usize,
    pub params: Params,
    #[serde(flatten)]
    pub extras: Map<String, Value>,
}

impl HistoryGroup {
    pub fn new(params: Params, imgs: Vec<ImageRecord>) -> Self {
        Self {
            num_imgs: imgs.len(),
            imgs,
            params,
            extras: Map::new(),
        }
    }

    /// Grouping key; a group without a prompt groups under the empty string.
    pub fn prompt(&self) -> &str {
        self.params.get_str("prompt").unwrap_or_default()
    }

    pub fn negative_prompt(&self) -> Option<&str> {
        self.params.get_str("negative_prompt")
    }

    pub fn model(&self) -> String {
        self.params.display("selected_sd_model")
    }

    pub fn position_of(&self, job_id: &str) -> Option<usize> {
        self.imgs.iter().position(|image| image.has_job_id(job_id))
    }

    /// Removes the image at `index` and resynchronizes `num_imgs`.
    pub fn remove_image(&mut self, index: usize) -> ImageRecord {
        let removed = self.imgs.remove(index);
        self.num_imgs = self.imgs.len();
        removed
    }

    pub fn is_empty(&self) -> bool {
        self.num_imgs == 0
    }
}
