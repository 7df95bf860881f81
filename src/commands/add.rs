use super::require_name;
use crate::config::ConfigPaths;
use crate::editor::Editor;
use crate::error::TrefResult;
use crate::store::Store;

/// Starts a sheet from an empty file and hands it to the editor.
pub fn add_sheet(name: &str, paths: &dyn ConfigPaths, editor: &Editor) -> TrefResult<()> {
    let name = require_name(name, "add")?;
    let store = Store::open(paths)?;
    let path = store.create_empty(name)?;
    editor.open(&path)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::config::FixedConfigPaths;
    use crate::error::TrefError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_add_creates_empty_sheet() {
        let dir = tempdir().unwrap();
        let paths = FixedConfigPaths::new(dir.path());

        add_sheet("make", &paths, &Editor::new("true")).unwrap();
        assert_eq!(fs::read(dir.path().join("make.json")).unwrap(), b"");
    }

    #[test]
    fn test_add_truncates_existing_sheet() {
        let dir = tempdir().unwrap();
        let paths = FixedConfigPaths::new(dir.path());
        fs::write(dir.path().join("make.json"), "{\"old\": 1}").unwrap();

        add_sheet("make", &paths, &Editor::new("true")).unwrap();
        assert!(fs::read(dir.path().join("make.json")).unwrap().is_empty());
    }

    #[test]
    fn test_add_reports_editor_failure() {
        let dir = tempdir().unwrap();
        let paths = FixedConfigPaths::new(dir.path());

        let result = add_sheet("make", &paths, &Editor::new("false"));
        assert!(matches!(result, Err(TrefError::EditorExitError { .. })));
        assert!(dir.path().join("make.json").exists());
    }
}
