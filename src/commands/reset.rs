use std::io::Write;

use crate::bundle;
use crate::config::ConfigPaths;
use crate::error::TrefResult;
use crate::store::Store;

/// Replaces every local sheet with the contents of the bundle at `url`.
///
/// The bundle is downloaded and parsed before the directory is wiped.
pub fn reset_sheets(url: &str, paths: &dyn ConfigPaths, out: &mut dyn Write) -> TrefResult<()> {
    let url = bundle::parse_bundle_url(url)?;
    let fetched = bundle::fetch(&url)?;

    let store = Store::open(paths)?;
    let written = bundle::apply(&store, &fetched, out)?;
    log::info!("Wrote {} cheat sheets to {}", written, store.dir().display());

    writeln!(out, "Default cheat sheets downloaded and applied.")?;
    Ok(())
}
