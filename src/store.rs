use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::ConfigPaths;
use crate::error::{TrefError, TrefResult};

const SHEET_EXTENSION: &str = "json";

/// Flat directory of `<tool>.json` cheat sheets.
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Opens the store in the directory named by `paths`, creating it if needed.
    pub fn open(paths: &dyn ConfigPaths) -> TrefResult<Self> {
        let dir = paths.config_dir()?;
        log::debug!("Using cheat sheet directory: {}", dir.display());
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the sheet for `name`, whether or not it exists.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", name, SHEET_EXTENSION))
    }

    pub fn read(&self, name: &str) -> TrefResult<Vec<u8>> {
        let path = self.path_for(name);
        fs::read(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => TrefError::CheatSheetNotFound(name.to_string()),
            _ => TrefError::FileReadError { path, source: e },
        })
    }

    /// Creates an empty sheet, truncating any existing content.
    pub fn create_empty(&self, name: &str) -> TrefResult<PathBuf> {
        let path = self.path_for(name);
        fs::File::create(&path).map_err(|e| TrefError::FileWriteError {
            path: path.clone(),
            source: e,
        })?;
        log::info!("Created cheat sheet file: {}", path.display());
        Ok(path)
    }

    pub fn write_raw(&self, name: &str, content: &[u8]) -> TrefResult<PathBuf> {
        let path = self.path_for(name);
        fs::write(&path, content).map_err(|e| TrefError::FileWriteError {
            path: path.clone(),
            source: e,
        })?;
        Ok(path)
    }

    pub fn delete(&self, name: &str) -> TrefResult<()> {
        let path = self.path_for(name);
        fs::remove_file(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => TrefError::CheatSheetNotFound(name.to_string()),
            _ => TrefError::FileRemoveError { path: path.clone(), source: e },
        })?;
        log::info!("Deleted cheat sheet file: {}", path.display());
        Ok(())
    }

    /// Tool names of every sheet in the directory, sorted.
    pub fn list(&self) -> TrefResult<Vec<String>> {
        let entries = fs::read_dir(&self.dir).map_err(|e| TrefError::FileReadError {
            path: self.dir.clone(),
            source: e,
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some(SHEET_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Removes everything in the directory, or creates it if it is missing.
    ///
    /// Not transactional: a failure part way leaves the remaining entries in place.
    pub fn clear(&self) -> TrefResult<()> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return fs::create_dir_all(&self.dir).map_err(|e| {
                    TrefError::DirectoryCreationError {
                        path: self.dir.clone(),
                        source: e,
                    }
                });
            }
            Err(e) => {
                return Err(TrefError::FileReadError {
                    path: self.dir.clone(),
                    source: e,
                })
            }
        };

        for entry in entries {
            let entry = entry?;
            let path = entry.path();
            let removed = if entry.file_type()?.is_dir() {
                fs::remove_dir_all(&path)
            } else {
                fs::remove_file(&path)
            };
            removed.map_err(|e| TrefError::FileRemoveError {
                path: path.clone(),
                source: e,
            })?;
            log::debug!("Removed {}", path.display());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FixedConfigPaths;
    use tempfile::tempdir;

    fn open_store(root: &Path) -> Store {
        Store::open(&FixedConfigPaths::new(root.join("tref"))).unwrap()
    }

    #[test]
    fn test_open_creates_directory() {
        let dir = tempdir().unwrap();
        let store = open_store(dir.path());
        assert!(store.dir().is_dir());
    }

    #[test]
    fn test_path_for_uses_name_verbatim() {
        let dir = tempdir().unwrap();
        let store = open_store(dir.path());
        assert_eq!(store.path_for("git"), store.dir().join("git.json"));
        assert_eq!(store.path_for("docker-compose"), store.dir().join("docker-compose.json"));
    }

    #[test]
    fn test_read_missing_sheet_is_not_found() {
        let dir = tempdir().unwrap();
        let store = open_store(dir.path());
        match store.read("nope") {
            Err(TrefError::CheatSheetNotFound(name)) => assert_eq!(name, "nope"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_create_then_read_returns_written_bytes() {
        let dir = tempdir().unwrap();
        let store = open_store(dir.path());

        let path = store.create_empty("git").unwrap();
        assert_eq!(store.read("git").unwrap(), b"");

        let content = b"{\"git\": {\"Basics\": []}}\n";
        fs::write(&path, content).unwrap();
        assert_eq!(store.read("git").unwrap(), content);
    }

    #[test]
    fn test_create_empty_truncates_existing_sheet() {
        let dir = tempdir().unwrap();
        let store = open_store(dir.path());

        store.write_raw("curl", b"{\"old\": true}").unwrap();
        store.create_empty("curl").unwrap();
        assert!(store.read("curl").unwrap().is_empty());
    }

    #[test]
    fn test_delete_then_read_matches_never_added() {
        let dir = tempdir().unwrap();
        let store = open_store(dir.path());

        store.write_raw("ls", b"{}").unwrap();
        store.delete("ls").unwrap();

        let deleted = store.read("ls").unwrap_err().to_string();
        let never_added = store.read("never").unwrap_err().to_string();
        assert_eq!(deleted, "No cheat sheet found for 'ls'");
        assert_eq!(never_added, "No cheat sheet found for 'never'");
    }

    #[test]
    fn test_delete_missing_sheet_fails() {
        let dir = tempdir().unwrap();
        let store = open_store(dir.path());
        assert!(matches!(
            store.delete("ghost"),
            Err(TrefError::CheatSheetNotFound(_))
        ));
    }

    #[test]
    fn test_list_returns_sorted_json_stems_only() {
        let dir = tempdir().unwrap();
        let store = open_store(dir.path());

        store.write_raw("tar", b"{}").unwrap();
        store.write_raw("awk", b"{}").unwrap();
        fs::write(store.dir().join("notes.txt"), "x").unwrap();
        fs::create_dir(store.dir().join("sub.json")).unwrap();

        assert_eq!(store.list().unwrap(), vec!["awk", "tar"]);
    }

    #[test]
    fn test_clear_removes_files_and_directories() {
        let dir = tempdir().unwrap();
        let store = open_store(dir.path());

        store.write_raw("git", b"{}").unwrap();
        fs::create_dir_all(store.dir().join("nested").join("deep")).unwrap();
        fs::write(store.dir().join("nested").join("deep").join("f"), "x").unwrap();

        store.clear().unwrap();
        assert!(store.dir().is_dir());
        assert_eq!(fs::read_dir(store.dir()).unwrap().count(), 0);
    }

    #[test]
    fn test_clear_recreates_missing_directory() {
        let dir = tempdir().unwrap();
        let store = open_store(dir.path());

        fs::remove_dir(store.dir()).unwrap();
        store.clear().unwrap();
        assert!(store.dir().is_dir());
    }
}
