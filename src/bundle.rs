//! Bulk import of cheat sheets from a single remote JSON document.
//!
//! The document is an object keyed by tool name. Each value is written
//! untouched to `<tool>.json`, replacing whatever the directory held before.

use std::collections::BTreeMap;
use std::io::Write;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use serde_json::value::RawValue;
use url::Url;

use crate::error::{TrefError, TrefResult};
use crate::store::Store;

const USER_AGENT: &str = concat!("tref/", env!("CARGO_PKG_VERSION"));

/// Upper bound on the downloaded bundle; ureq's own default is 10 MiB.
pub const MAX_BUNDLE_BYTES: u64 = 64 * 1024 * 1024;

/// Tool name to raw cheat sheet JSON, in name order.
#[derive(Debug)]
pub struct Bundle {
    sheets: BTreeMap<String, Box<RawValue>>,
}

impl Bundle {
    /// Parses the outer object only; sheet contents are kept as raw JSON.
    pub fn parse(body: &str) -> TrefResult<Self> {
        let sheets: BTreeMap<String, Box<RawValue>> = serde_json::from_str(body)?;
        if let Some(bad) = sheets.keys().find(|name| !is_safe_tool_name(name)) {
            log::error!("Refusing bundle with tool name {:?}", bad);
            return Err(TrefError::InvalidToolName(bad.clone()));
        }
        Ok(Self { sheets })
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    pub fn tool_names(&self) -> impl Iterator<Item = &str> {
        self.sheets.keys().map(String::as_str)
    }
}

/// Bundle keys become file names, so they must stay inside the store directory.
fn is_safe_tool_name(name: &str) -> bool {
    !name.trim().is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}

/// Accepts only absolute http(s) URLs.
pub fn parse_bundle_url(raw: &str) -> TrefResult<Url> {
    let url = Url::parse(raw).map_err(|e| {
        log::error!("Failed to parse bundle URL: {}", e);
        TrefError::InvalidUrl(format!("{}: {}", raw, e))
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(TrefError::InvalidUrl(format!(
            "{}: unsupported scheme '{}'",
            raw, scheme
        ))),
    }
}

/// Downloads and parses the bundle. Anything but a 200 is an error.
pub fn fetch(url: &Url) -> TrefResult<Bundle> {
    log::info!("Downloading cheat sheets from {}", url);

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("Fetching {}", url));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = download(url, MAX_BUNDLE_BYTES);
    spinner.finish_and_clear();

    let body = result?;
    let bundle = Bundle::parse(&body).map_err(|e| {
        log::error!("Rejected bundle from {}: {}", url, e);
        e
    })?;
    log::debug!("Bundle contains {} cheat sheets", bundle.len());
    Ok(bundle)
}

fn download(url: &Url, limit: u64) -> TrefResult<String> {
    let config = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build();
    let agent: ureq::Agent = config.into();

    let mut response = agent
        .get(url.as_str())
        .header("User-Agent", USER_AGENT)
        .call()?;

    let status = response.status();
    if status != 200 {
        log::error!("Download of {} failed with status: {}", url, status);
        return Err(TrefError::BadStatus(status.to_string()));
    }

    response
        .body_mut()
        .with_config()
        .limit(limit)
        .read_to_string()
        .map_err(|e| match e {
            ureq::Error::BodyExceedsLimit(limit) => TrefError::BundleTooLarge(limit),
            e => TrefError::DownloadError(e),
        })
}

/// Wipes the store and writes one file per bundle entry.
///
/// A failed write stops the import; files already written stay on disk.
pub fn apply(store: &Store, bundle: &Bundle, out: &mut dyn Write) -> TrefResult<usize> {
    store.clear()?;
    log::info!("Cleared {}", store.dir().display());

    let mut written = 0;
    for (tool, content) in &bundle.sheets {
        store.write_raw(tool, content.get().as_bytes()).map_err(|e| {
            log::error!("Failed to write cheat sheet for {}: {}", tool, e);
            e
        })?;
        writeln!(out, "Written cheat sheet for: {}", tool)?;
        written += 1;
    }

    Ok(written)
}
