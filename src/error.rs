use std::path::PathBuf;
use std::process::ExitStatus;

#[derive(Debug, thiserror::Error)]
pub enum TrefError {
    #[error("IO error")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("{0}")]
    UsageError(String),

    #[error("Failed to create directory: {path}")]
    DirectoryCreationError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read file: {path}")]
    FileReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to remove: {path}")]
    FileRemoveError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No cheat sheet found for '{0}'")]
    CheatSheetNotFound(String),

    #[error("Failed to launch editor: {command}")]
    EditorLaunchError {
        command: String,
        source: std::io::Error,
    },

    #[error("Editor '{command}' exited with {status}")]
    EditorExitError { command: String, status: ExitStatus },

    #[error("Invalid bundle URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to download cheat sheet JSON")]
    DownloadError(#[from] ureq::Error),

    #[error("Bad status downloading cheat sheet JSON: {0}")]
    BadStatus(String),

    #[error("Bundle exceeds the {0} byte download limit")]
    BundleTooLarge(u64),

    #[error("Bundle contains an invalid tool name: '{0}'")]
    InvalidToolName(String),

    #[error("Failed to parse cheat sheet JSON")]
    BundleParseError(#[from] serde_json::Error),
}

// Type alias for Result type using our custom error
pub type TrefResult<T> = Result<T, TrefError>;
