use crate::config::ConfigError;
use crate::history::HistoryError;
use crate::trasher::TrashError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("history error: {0}")]
    History(#[from] HistoryError),

    #[error("trash error: {0}")]
    Trash(#[from] TrashError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("no image with job id `{0}`")]
    UnknownJob(String),

    #[error("output failure: {0}")]
    Output(#[from] std::io::Error),

    #[error("JSON rendering failure: {0}")]
    Json(#[from] serde_json::Error),
}
