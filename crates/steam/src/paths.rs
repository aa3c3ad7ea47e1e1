use std::path::{Path, PathBuf};

use crate::SteamError;

/// Provides access to Steam directory paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    base_dir: PathBuf,
}

impl Paths {
    /// Creates a new `Paths` instance with auto-detected Steam directory.
    pub fn new() -> Result<Self, SteamError> {
        let base_dir = get_base_dir()?;
        tracing::debug!(path = %base_dir.display(), "detected steam installation");
        Ok(Self { base_dir })
    }

    /// Creates a new `Paths` instance with a custom base directory.
    pub fn with_base(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Returns the Steam base directory.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Returns the steamapps directory holding app manifests.
    pub fn steamapps_dir(&self) -> PathBuf {
        self.base_dir.join("steamapps")
    }

    /// Returns the path of the `.acf` manifest for an app.
    pub fn app_manifest_path(&self, app_id: &str) -> PathBuf {
        self.steamapps_dir().join(manifest_filename(app_id))
    }

    /// Returns the client logs directory.
    pub fn logs_dir(&self) -> PathBuf {
        self.base_dir.join("logs")
    }

    /// Returns the path of the content log (download/install activity).
    pub fn content_log_path(&self) -> PathBuf {
        self.logs_dir().join("content_log.txt")
    }
}

fn manifest_filename(app_id: &str) -> String {
    format!("appmanifest_{app_id}.acf")
}

// Platform-specific base directory detection.
#[cfg(target_os = "linux")]
fn get_base_dir() -> Result<PathBuf, SteamError> {
    crate::paths_linux::get_base_dir()
}

#[cfg(target_os = "windows")]
fn get_base_dir() -> Result<PathBuf, SteamError> {
    crate::paths_windows::get_base_dir()
}

#[cfg(not(any(target_os = "linux", target_os = "windows")))]
fn get_base_dir() -> Result<PathBuf, SteamError> {
    Err(SteamError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_with_base() {
        let paths = Paths::with_base("/tmp/steam");
        assert_eq!(paths.base_dir(), Path::new("/tmp/steam"));
        assert_eq!(paths.steamapps_dir(), PathBuf::from("/tmp/steam/steamapps"));
    }

    #[test]
    fn manifest_path_structure() {
        let paths = Paths::with_base("/steam");
        assert_eq!(
            paths.app_manifest_path("570"),
            PathBuf::from("/steam/steamapps/appmanifest_570.acf")
        );
    }

    #[test]
    fn content_log_structure() {
        let paths = Paths::with_base("/steam");
        assert_eq!(paths.logs_dir(), PathBuf::from("/steam/logs"));
        assert_eq!(
            paths.content_log_path(),
            PathBuf::from("/steam/logs/content_log.txt")
        );
    }

    #[test]
    fn manifest_filename_uses_app_id() {
        assert_eq!(manifest_filename("1245620"), "appmanifest_1245620.acf");
    }
}
