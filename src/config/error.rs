use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid settings: {0}")]
    Invalid(String),

    #[error("settings I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings serialization failure: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("settings YAML serialization failure: {0}")]
    SerdeYaml(#[from] serde_yaml::Error),
}
