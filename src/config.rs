mod error;
mod io;
mod settings;


pub use error::{ConfigError, Result};
pub use io::{load_settings, load_settings_or_default, save_settings};
pub use settings::{
    APP_DIR_NAME, Settings, TrashSettings, default_config_path, default_history_path,
};
