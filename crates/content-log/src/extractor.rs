//! Infers the current download state from the tail of `content_log.txt`.
//!
//! The log is not meant for machine consumption, so this is a best-effort
//! heuristic keyed on substrings the client has been observed to write.
//! Lines are scanned newest first; the first terminal match decides.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::status::DownloadStatus;

const FULLY_INSTALLED: &str = "state changed : Fully Installed";
const UNINSTALLED: &str = "state changed : Uninstalled";
const FINISHED_UNINSTALL: &str = "finished uninstall";
const STATE_CHANGED: &str = "state changed";
const SUSPENDED: &str = "(Suspended)";
const RUNNING_UPDATE: &str = "App update changed : Running Update,Downloading,Staging,";
const STOPPING: &str = "Stopping";

/// Megabits to megabytes.
const BITS_PER_BYTE: f64 = 8.0;

static APP_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"AppID\s+(\d+)").expect("valid app id regex"));

static RATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Current download rate:\s*([\d.]+)\s*Mbps").expect("valid rate regex")
});

/// Classifies the most recent download-relevant event in `lines`.
///
/// `lines` is the log window in chronological order (oldest first).
pub fn extract<S: AsRef<str>>(lines: &[S]) -> DownloadStatus {
    let mut removed: HashSet<&str> = HashSet::new();
    let mut rate: Option<f64> = None;

    for line in lines.iter().rev() {
        let line = line.as_ref();

        // Nothing before a completed install matters.
        if line.contains(FULLY_INSTALLED) {
            break;
        }

        let app_id = find_app_id(line);

        if is_removal(line) {
            if let Some(id) = app_id {
                tracing::trace!(app_id = id, "app removed within window");
                removed.insert(id);
            }
        }

        if rate.is_none() {
            rate = parse_rate(line);
        }

        let Some(app_id) = app_id else {
            continue;
        };
        if removed.contains(app_id) {
            continue;
        }

        if is_suspended(line) {
            tracing::debug!(app_id, "download paused");
            return DownloadStatus::Paused {
                app_id: app_id.to_string(),
            };
        }

        if is_running_update(line) {
            let rate_mb_s = rate.unwrap_or(0.0);
            tracing::debug!(app_id, rate_mb_s, "download active");
            return DownloadStatus::Active {
                app_id: app_id.to_string(),
                rate_mb_s,
            };
        }
    }

    DownloadStatus::Idle
}

/// Returns the first `AppID <digits>` token in a line.
fn find_app_id(line: &str) -> Option<&str> {
    APP_ID_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Parses a `Current download rate: <x> Mbps` line into megabytes/second.
fn parse_rate(line: &str) -> Option<f64> {
    let figure = RATE_RE.captures(line)?.get(1)?.as_str();
    match figure.parse::<f64>() {
        Ok(mbps) => Some(mbps / BITS_PER_BYTE),
        Err(_) => {
            tracing::trace!(figure, "ignoring malformed download rate");
            None
        }
    }
}

fn is_removal(line: &str) -> bool {
    line.contains(UNINSTALLED) || line.to_lowercase().contains(FINISHED_UNINSTALL)
}

fn is_suspended(line: &str) -> bool {
    line.contains(STATE_CHANGED) && line.contains(SUSPENDED) && !line.contains("Uninstalled")
}

fn is_running_update(line: &str) -> bool {
    line.contains(RUNNING_UPDATE) && !line.contains(STOPPING)
}
