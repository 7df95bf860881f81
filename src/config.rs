use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{TrefError, TrefResult};

/// Name of the directory holding the cheat sheets, under the platform config home.
pub const APP_DIR_NAME: &str = "tref";

/// Bundle fetched by `--reset` when no `--url` is given.
pub const DEFAULT_BUNDLE_URL: &str =
    "https://raw.githubusercontent.com/pavandhadge/tref/main/defaultCheatsheets/devtools.json";

/// Where the cheat-sheet directory lives.
///
/// `config_dir` must return an existing directory, creating it when needed.
pub trait ConfigPaths {
    fn config_dir(&self) -> TrefResult<PathBuf>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Unix,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }
}

/// Resolves the directory from the real process environment.
#[derive(Debug, Default)]
pub struct SystemConfigPaths;

impl ConfigPaths for SystemConfigPaths {
    fn config_dir(&self) -> TrefResult<PathBuf> {
        let dir = resolve_config_dir(
            Platform::current(),
            |key| std::env::var(key).ok(),
            dirs::home_dir(),
        )?;
        ensure_dir(&dir)?;
        Ok(dir)
    }
}

/// A fixed directory, used when the location is already known.
#[derive(Debug, Clone)]
pub struct FixedConfigPaths {
    dir: PathBuf,
}

impl FixedConfigPaths {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ConfigPaths for FixedConfigPaths {
    fn config_dir(&self) -> TrefResult<PathBuf> {
        ensure_dir(&self.dir)?;
        Ok(self.dir.clone())
    }
}

/// Computes the cheat-sheet directory without touching the filesystem.
///
/// On Unix a non-empty `XDG_CONFIG_HOME` wins, otherwise `<home>/.config/tref`.
/// On Windows `AppData` is required.
pub fn resolve_config_dir<F>(
    platform: Platform,
    env: F,
    home: Option<PathBuf>,
) -> TrefResult<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| env(key).filter(|value| !value.is_empty());

    let dir = match platform {
        Platform::Unix => match non_empty("XDG_CONFIG_HOME") {
            Some(xdg) => {
                log::debug!("Using XDG_CONFIG_HOME: {}", xdg);
                PathBuf::from(xdg).join(APP_DIR_NAME)
            }
            None => {
                let home = home.ok_or_else(|| {
                    log::error!("Could not determine home directory");
                    TrefError::ConfigError("Failed to get home directory".to_string())
                })?;
                home.join(".config").join(APP_DIR_NAME)
            }
        },
        Platform::Windows => match non_empty("AppData") {
            Some(app_data) => PathBuf::from(app_data).join(APP_DIR_NAME),
            None => {
                log::error!("AppData is not set");
                return Err(TrefError::ConfigError(
                    "No valid config directory found".to_string(),
                ));
            }
        },
    };

    Ok(dir)
}

fn ensure_dir(dir: &Path) -> TrefResult<()> {
    if !dir.is_dir() {
        log::debug!("Creating config directory: {}", dir.display());
    }
    fs::create_dir_all(dir).map_err(|e| TrefError::DirectoryCreationError {
        path: dir.to_path_buf(),
        source: e,
    })
}
