use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use super::{Result, TrashError, Trasher};

/// Marker replaced by the file path inside [`CommandTrash`] arguments.
pub const PATH_PLACEHOLDER: &str = "{path}";

/// How the path is quoted before it is substituted into an argument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PathEscape {
    #[default]
    None,
    /// Backslashes and double quotes escaped for an AppleScript string literal.
    AppleScript,
}

impl PathEscape {
    fn apply(self, path: &str) -> String {
        match self {
            Self::None => path.to_string(),
            Self::AppleScript => path.replace('\\', "\\\\").replace('"', "\\\""),
        }
    }
}

/// Trashes a file by running an external program. The exit status is the
/// only signal consulted; output is discarded.
///
/// Arguments containing `{path}` get the path substituted; if none does, the
/// path is appended as the last argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTrash {
    program: String,
    args: Vec<String>,
    escape: PathEscape,
}

impl CommandTrash {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            escape: PathEscape::None,
        }
    }

    pub fn with_escape(mut self, escape: PathEscape) -> Self {
        self.escape = escape;
        self
    }

    /// macOS Finder, driven through `osascript`.
    pub fn finder() -> Self {
        Self::new(
            "osascript",
            vec![
                "-e".to_string(),
                format!("tell application \"Finder\" to delete POSIX file \"{PATH_PLACEHOLDER}\""),
            ],
        )
        .with_escape(PathEscape::AppleScript)
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Final argument list for trashing `path`.
    pub fn arguments_for(&self, path: &Path) -> Result<Vec<String>> {
        let raw = path.to_str().ok_or_else(|| TrashError::NonUtf8Path {
            path: path.to_path_buf(),
        })?;
        let escaped = self.escape.apply(raw);
        let mut substituted = false;
        let mut arguments = self
            .args
            .iter()
            .map(|arg| {
                if arg.contains(PATH_PLACEHOLDER) {
                    substituted = true;
                    arg.replace(PATH_PLACEHOLDER, &escaped)
                } else {
                    arg.clone()
                }
            })
            .collect::<Vec<_>>();
        if !substituted {
            arguments.push(escaped);
        }
        Ok(arguments)
    }
}

impl Trasher for CommandTrash {
    fn name(&self) -> &str {
        &self.program
    }

    fn move_to_trash(&self, path: &Path) -> Result<()> {
        let arguments = self.arguments_for(path)?;
        debug!(program = %self.program, ?arguments, "running trash command");
        let status = Command::new(&self.program)
            .args(&arguments)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|source| TrashError::Spawn {
                program: self.program.clone(),
                source,
            })?;
        if status.success() {
            Ok(())
        } else {
            Err(TrashError::Status {
                program: self.program.clone(),
                path: path.to_path_buf(),
                status,
            })
        }
    }
}
