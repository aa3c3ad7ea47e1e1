pub mod manifest;
pub mod paths;
#[cfg(target_os = "linux")]
mod paths_linux;
#[cfg(target_os = "windows")]
mod paths_windows;

// Re-export primary types.
pub use manifest::{is_placeholder, placeholder_name, read_manifest_name, resolve_app_name};
pub use paths::Paths;

/// Errors for Steam operations.
#[derive(Debug, thiserror::Error)]
pub enum SteamError {
    #[error("steam installation not found")]
    NotFound,
}
