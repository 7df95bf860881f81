use std::io::Write;

use super::require_name;
use crate::config::ConfigPaths;
use crate::error::TrefResult;
use crate::store::Store;

pub fn delete_sheet(name: &str, paths: &dyn ConfigPaths, out: &mut dyn Write) -> TrefResult<()> {
    let name = require_name(name, "delete")?;
    let store = Store::open(paths)?;
    store.delete(name)?;
    writeln!(out, "Cheat sheet deleted successfully.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FixedConfigPaths;
    use crate::error::TrefError;
    use tempfile::tempdir;

    #[test]
    fn test_delete_existing_sheet() {
        let dir = tempdir().unwrap();
        let paths = FixedConfigPaths::new(dir.path());
        let store = Store::open(&paths).unwrap();
        store.write_raw("ls", b"{}").unwrap();

        let mut out = Vec::new();
        delete_sheet("ls", &paths, &mut out).unwrap();

        assert!(!store.path_for("ls").exists());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Cheat sheet deleted successfully.\n"
        );
    }

    #[test]
    fn test_delete_missing_sheet() {
        let dir = tempdir().unwrap();
        let paths = FixedConfigPaths::new(dir.path());

        let mut out = Vec::new();
        let result = delete_sheet("ls", &paths, &mut out);
        assert!(matches!(result, Err(TrefError::CheatSheetNotFound(_))));
        assert!(out.is_empty());
    }
}
