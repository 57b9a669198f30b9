mod context;
mod deletion;
mod error;


pub use context::AppContext;
pub use deletion::{DeletionOutcome, DeletionService};
pub use error::{AppError, Result};
