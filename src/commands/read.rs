use std::io::Write;

use super::require_name;
use crate::config::ConfigPaths;
use crate::error::TrefResult;
use crate::store::Store;

pub fn read_sheet(name: &str, paths: &dyn ConfigPaths, out: &mut dyn Write) -> TrefResult<()> {
    let name = require_name(name, "read")?;
    let store = Store::open(paths)?;
    let content = store.read(name)?;

    writeln!(out, "Cheat Sheet for {}:", name)?;
    out.write_all(&content)?;
    writeln!(out)?;
    Ok(())
}
