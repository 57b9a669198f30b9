mod command;
mod error;
mod system;


use std::path::Path;

pub use command::{CommandTrash, PathEscape};
pub use error::{Result, TrashError};
pub use system::SystemTrash;

/// Moves files somewhere the user can still recover them from.
///
/// Implementations either move the file or fail; there is no partial outcome.
pub trait Trasher {
    fn name(&self) -> &str;

    fn move_to_trash(&self, path: &Path) -> Result<()>;
}

impl<T: Trasher + ?Sized> Trasher for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn move_to_trash(&self, path: &Path) -> Result<()> {
        (**self).move_to_trash(path)
    }
}
