//! Turns an extracted status into a caller-facing report.

use std::fmt;

use dlwatch_steam::{Paths, is_placeholder, resolve_app_name};

use crate::error::ContentLogError;
use crate::extractor::extract;
use crate::status::DownloadStatus;
use crate::tail::read_log_tail;

/// Whether a reported download is transferring or suspended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadState {
    Active,
    Paused,
}

impl fmt::Display for DownloadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownloadState::Active => write!(f, "Active"),
            DownloadState::Paused => write!(f, "Paused"),
        }
    }
}

/// Result of one poll, with the game title resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum DownloadReport {
    Idle,
    Downloading {
        app_id: String,
        title: String,
        rate_mb_s: f64,
        state: DownloadState,
    },
}

/// Resolves the title for `status`.
///
/// An app without a readable manifest was cancelled or removed after the
/// log line was written, so it is reported as idle.
pub fn compose(status: DownloadStatus, paths: &Paths) -> DownloadReport {
    let (app_id, rate_mb_s, state) = match status {
        DownloadStatus::Idle => return DownloadReport::Idle,
        DownloadStatus::Paused { app_id } => (app_id, 0.0, DownloadState::Paused),
        DownloadStatus::Active { app_id, rate_mb_s } => (app_id, rate_mb_s, DownloadState::Active),
    };

    let title = resolve_app_name(paths, &app_id);
    if is_placeholder(&title, &app_id) {
        tracing::debug!(app_id, "no manifest for app, treating download as cancelled");
        return DownloadReport::Idle;
    }

    DownloadReport::Downloading {
        app_id,
        title,
        rate_mb_s,
        state,
    }
}

/// Reads the content log under `paths` and reports the current download.
///
/// A missing or unreadable log is reported as idle.
pub fn poll(paths: &Paths, window: usize) -> DownloadReport {
    let lines = match read_log_tail(&paths.content_log_path(), window) {
        Ok(lines) => lines,
        Err(ContentLogError::NotFound(path)) => {
            tracing::debug!(path = %path.display(), "content log not found");
            return DownloadReport::Idle;
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to read content log");
            return DownloadReport::Idle;
        }
    };

    compose(extract(&lines), paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACTIVE_LINE: &str =
        "[2024-05-01 12:00:00] AppID 70 App update changed : Running Update,Downloading,Staging,";
    const PAUSED_LINE: &str =
        "[2024-05-01 12:00:00] AppID 70 state changed : Update Required,Update Running (Suspended),";
    const RATE_LINE: &str = "[2024-05-01 12:00:01] Current download rate: 16.0 Mbps";

    fn steam_root(with_manifest: bool) -> (tempfile::TempDir, Paths) {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(tmp.path().join("steamapps")).unwrap();
        std::fs::create_dir_all(tmp.path().join("logs")).unwrap();
        let paths = Paths::with_base(tmp.path());
        if with_manifest {
            std::fs::write(
                paths.app_manifest_path("70"),
                "\"AppState\"\n{\n\t\"appid\"\t\t\"70\"\n\t\"name\"\t\t\"Half-Life\"\n}\n",
            )
            .unwrap();
        }
        (tmp, paths)
    }

    fn write_log(paths: &Paths, lines: &[&str]) {
        let mut content = lines.join("\n");
        content.push('\n');
        std::fs::write(paths.content_log_path(), content).unwrap();
    }

    #[test]
    fn compose_idle() {
        let (_tmp, paths) = steam_root(true);
        assert_eq!(compose(DownloadStatus::Idle, &paths), DownloadReport::Idle);
    }

    #[test]
    fn compose_active_with_title() {
        let (_tmp, paths) = steam_root(true);
        let status = DownloadStatus::Active {
            app_id: "70".into(),
            rate_mb_s: 2.0,
        };
        assert_eq!(
            compose(status, &paths),
            DownloadReport::Downloading {
                app_id: "70".into(),
                title: "Half-Life".into(),
                rate_mb_s: 2.0,
                state: DownloadState::Active,
            }
        );
    }

    #[test]
    fn compose_without_manifest_is_idle() {
        let (_tmp, paths) = steam_root(false);
        let status = DownloadStatus::Active {
            app_id: "70".into(),
            rate_mb_s: 2.0,
        };
        assert_eq!(compose(status, &paths), DownloadReport::Idle);
    }

    #[test]
    fn poll_active_download() {
        let (_tmp, paths) = steam_root(true);
        write_log(&paths, &[ACTIVE_LINE, RATE_LINE]);

        match poll(&paths, 100) {
            DownloadReport::Downloading {
                title,
                rate_mb_s,
                state,
                ..
            } => {
                assert_eq!(title, "Half-Life");
                assert_eq!(format!("{rate_mb_s:.2}"), "2.00");
                assert_eq!(state, DownloadState::Active);
            }
            other => panic!("expected download, got {other:?}"),
        }
    }

    #[test]
    fn poll_paused_download_reports_zero_rate() {
        let (_tmp, paths) = steam_root(true);
        write_log(&paths, &[PAUSED_LINE, RATE_LINE]);

        assert_eq!(
            poll(&paths, 100),
            DownloadReport::Downloading {
                app_id: "70".into(),
                title: "Half-Life".into(),
                rate_mb_s: 0.0,
                state: DownloadState::Paused,
            }
        );
    }

    #[test]
    fn poll_respects_window() {
        let (_tmp, paths) = steam_root(true);
        write_log(&paths, &[ACTIVE_LINE, "noise", "noise", "noise"]);

        assert_eq!(poll(&paths, 3), DownloadReport::Idle);
        assert!(matches!(
            poll(&paths, 4),
            DownloadReport::Downloading { .. }
        ));
    }

    #[test]
    fn poll_missing_log_is_idle() {
        let (_tmp, paths) = steam_root(true);
        assert_eq!(poll(&paths, 100), DownloadReport::Idle);
    }

    #[test]
    fn state_display() {
        assert_eq!(DownloadState::Active.to_string(), "Active");
        assert_eq!(DownloadState::Paused.to_string(), "Paused");
    }
}
