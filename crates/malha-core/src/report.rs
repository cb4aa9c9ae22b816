//! JSON report writers
//!
//! The reporting layer consumes algorithm and metrics results and drops them
//! as pretty-printed JSON files, one file per report.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;

/// Write a serializable value as pretty-printed JSON to `path`.
///
/// Parent directories are created if missing.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    fs::write(path, json)?;
    tracing::debug!(path = %path.display(), "wrote report");
    Ok(())
}
