//! App manifest (`appmanifest_<id>.acf`) lookups.
//!
//! Manifests are text VDF files. Only the display name is needed here, so
//! a single key/value pattern is matched instead of parsing the whole tree.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::paths::Paths;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""name"\s+"([^"]+)""#).expect("valid manifest name regex"));

/// Returns the display name for `app_id`, or the `AppID <id>` placeholder
/// when the manifest is missing, unreadable or has no name entry.
pub fn resolve_app_name(paths: &Paths, app_id: &str) -> String {
    read_manifest_name(&paths.app_manifest_path(app_id))
        .unwrap_or_else(|| placeholder_name(app_id))
}

/// Reads a manifest file and returns its `"name"` value.
pub fn read_manifest_name(path: &Path) -> Option<String> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "app manifest not readable");
            return None;
        }
    };

    let name = extract_name(&content);
    if name.is_none() {
        tracing::debug!(path = %path.display(), "app manifest has no name entry");
    }
    name
}

/// Finds the first `"name" "<value>"` pair in manifest text.
pub fn extract_name(content: &str) -> Option<String> {
    NAME_RE
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Synthetic title used when the manifest gives no name.
pub fn placeholder_name(app_id: &str) -> String {
    format!("AppID {app_id}")
}

/// Returns true if `title` is the synthetic placeholder for `app_id`.
pub fn is_placeholder(title: &str, app_id: &str) -> bool {
    title == placeholder_name(app_id)
}
