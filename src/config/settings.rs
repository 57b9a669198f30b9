use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::paging::DEFAULT_PAGE_SIZE;
use crate::trasher::{CommandTrash, SystemTrash, Trasher};

use super::{ConfigError, Result};

pub const APP_DIR_NAME: &str = "history-mate";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub history_path: Option<PathBuf>,
    pub page_size: usize,
    /// Pretty-print width for rewritten history files; `None` keeps them compact.
    pub indent: Option<usize>,
    pub trash: TrashSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            history_path: None,
            page_size: DEFAULT_PAGE_SIZE,
            indent: None,
            trash: TrashSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "snake_case")]
pub enum TrashSettings {
    #[default]
    System,
    Finder,
    Command {
        program: String,
        #[serde(default)]
        args: Vec<String>,
    },
}

impl TrashSettings {
    pub fn build(&self) -> Box<dyn Trasher> {
        match self {
            Self::System => Box::new(SystemTrash),
            Self::Finder => Box::new(CommandTrash::finder()),
            Self::Command { program, args } => Box::new(CommandTrash::new(program, args.clone())),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(ConfigError::Invalid(
                "page_size must be at least 1".to_string(),
            ));
        }
        if let TrashSettings::Command { program, .. } = &self.trash {
            if program.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "trash command program must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Configured history file, or DiffusionBee's default location.
    pub fn resolved_history_path(&self) -> Result<PathBuf> {
        self.history_path
            .clone()
            .or_else(default_history_path)
            .ok_or_else(|| {
                ConfigError::Invalid(
                    "no history path configured and no home directory found".to_string(),
                )
            })
    }
}

pub fn default_history_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".diffusionbee").join("history.json"))
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join("config.yaml"))
}
