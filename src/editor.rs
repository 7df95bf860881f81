use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{TrefError, TrefResult};

pub const EDITOR_ENV: &str = "EDITOR";
pub const DEFAULT_EDITOR: &str = "nano";

/// External editor attached to the current terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editor {
    program: String,
}

impl Editor {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Uses `$EDITOR`, falling back to nano when it is unset or empty.
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(EDITOR_ENV).ok())
    }

    fn from_value(value: Option<String>) -> Self {
        match value.filter(|v| !v.trim().is_empty()) {
            Some(program) => Self::new(program),
            None => Self::new(DEFAULT_EDITOR),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Runs the editor on `path` and blocks until it exits.
    pub fn open(&self, path: &Path) -> TrefResult<()> {
        log::info!("Running: {} {}", self.program, path.display());
        let status = Command::new(&self.program)
            .arg(path)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| TrefError::EditorLaunchError {
                command: format!("{} {}", self.program, path.display()),
                source: e,
            })?;

        if !status.success() {
            log::error!("{} failed with status: {}", self.program, status);
            return Err(TrefError::EditorExitError {
                command: self.program.clone(),
                status,
            });
        }

        Ok(())
    }
}
