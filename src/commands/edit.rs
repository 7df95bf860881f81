use super::require_name;
use crate::config::ConfigPaths;
use crate::editor::Editor;
use crate::error::TrefResult;
use crate::store::Store;

/// Opens the sheet in the editor. The file need not exist yet.
pub fn edit_sheet(name: &str, paths: &dyn ConfigPaths, editor: &Editor) -> TrefResult<()> {
    let name = require_name(name, "edit")?;
    let store = Store::open(paths)?;
    editor.open(&store.path_for(name))
}
