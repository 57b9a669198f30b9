use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::Params;

/// Labels and parameter keys shown in an image's detail table.
///
/// `Resolution` is synthesized from `img_width` and `img_height`.
pub const DETAIL_FIELDS: &[(&str, &str)] = &[
    ("Mode", "applet_name"),
    ("Prompt", "prompt"),
    ("Negative Prompt", "negative_prompt"),
    ("Model", "selected_sd_model"),
    ("Resolution", ""),
    ("Seed", "seed"),
    ("Num Steps", "num_steps"),
    ("Style", "selected_sd_style"),
    ("Sampler", "scheduler"),
    ("Guidance Scale", "guidance_scale"),
    ("Controlnet Model", "controlnet_model"),
    ("ControlNet Importance", "control_weight"),
    ("LoRA 0", "selected_sd_lora_0"),
    ("LoRA 1", "selected_sd_lora_1"),
    ("LoRA 2", "selected_sd_lora_2"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// `None` only when the key is absent; an explicit `null` is kept.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<Value>,
    pub params: Params,
    #[serde(flatten)]
    pub extras: Map<String, Value>,
}

impl ImageRecord {
    pub fn new(params: Params) -> Self {
        Self {
            image_url: None,
            params,
            extras: Map::new(),
        }
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_ref().and_then(Value::as_str)
    }

    pub fn job_id(&self) -> Option<String> {
        self.params.text("job_id")
    }

    pub fn has_job_id(&self, job_id: &str) -> bool {
        self.job_id().is_some_and(|own| own == job_id)
    }

    /// Filesystem location of the rendered image, as recorded.
    pub fn generated_img(&self) -> Option<PathBuf> {
        self.params
            .get_str("generated_img")
            .filter(|path| !path.is_empty())
            .map(PathBuf::from)
    }

    pub fn resolution(&self) -> String {
        format!(
            "{}x{}",
            self.params.display("img_width"),
            self.params.display("img_height")
        )
    }

    pub fn caption(&self) -> String {
        format!(
            "Seed: {} | Resolution: {} | Steps: {} | Style: {}",
            self.params.display("seed"),
            self.resolution(),
            self.params.display("num_steps"),
            self.params.display("selected_sd_style"),
        )
    }

    pub fn details(&self) -> Vec<(&'static str, String)> {
        DETAIL_FIELDS
            .iter()
            .map(|(label, key)| {
                let value = if key.is_empty() {
                    self.resolution()
                } else {
                    self.params.display(key)
                };
                (*label, value)
            })
            .collect()
    }
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
