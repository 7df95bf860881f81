use std::io::Write;

use crate::config::ConfigPaths;
use crate::error::TrefResult;
use crate::store::Store;

pub fn list_sheets(paths: &dyn ConfigPaths, out: &mut dyn Write) -> TrefResult<()> {
    let store = Store::open(paths)?;
    let names = store.list()?;
    log::debug!("Found {} cheat sheets in {}", names.len(), store.dir().display());

    if names.is_empty() {
        writeln!(out, "No cheat sheets found.")?;
        return Ok(());
    }

    writeln!(out, "Available cheat sheets:")?;
    for name in names {
        writeln!(out, "- {}", name)?;
    }
    Ok(())
}
