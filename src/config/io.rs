use std::fs;
use std::path::Path;

use tracing::debug;

use super::{Result, Settings, default_config_path};

fn is_yaml(path: &Path) -> bool {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    matches!(extension.as_str(), "yaml" | "yml")
}

pub fn load_settings(path: impl AsRef<Path>) -> Result<Settings> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let settings = if is_yaml(path) {
        serde_yaml::from_str::<Settings>(&raw)?
    } else {
        serde_json::from_str::<Settings>(&raw)?
    };
    settings.validate()?;
    debug!(path = %path.display(), "loaded settings");
    Ok(settings)
}

/// Loads `explicit` if given. Otherwise the default config file is used when
/// it exists, and built-in defaults when it does not.
pub fn load_settings_or_default(explicit: Option<&Path>) -> Result<Settings> {
    if let Some(path) = explicit {
        return load_settings(path);
    }
    match default_config_path() {
        Some(path) if path.is_file() => load_settings(path),
        _ => Ok(Settings::default()),
    }
}

pub fn save_settings(path: impl AsRef<Path>, settings: &Settings) -> Result<()> {
    let path = path.as_ref();
    settings.validate()?;
    let serialized = if is_yaml(path) {
        serde_yaml::to_string(settings)?
    } else {
        serde_json::to_string_pretty(settings)?
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serialized)?;
    Ok(())
}
