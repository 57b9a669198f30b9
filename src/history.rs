mod error;
mod grouping;
mod store;


pub use error::{HistoryError, Result};
pub use grouping::PromptGroups;
pub use store::{BACKUP_SUFFIX, HistoryStore, backup_path_for};
