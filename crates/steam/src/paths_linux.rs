use std::path::{Path, PathBuf};

use crate::SteamError;

/// Returns the Steam base directory on Linux/Unix systems.
pub(crate) fn get_base_dir() -> Result<PathBuf, SteamError> {
    let home = home_dir()?;
    find_base_dir(&home).ok_or(SteamError::NotFound)
}

/// Returns the first known Steam location under `home` that exists.
fn find_base_dir(home: &Path) -> Option<PathBuf> {
    candidates(home).into_iter().find(|dir| dir.exists())
}

fn candidates(home: &Path) -> [PathBuf; 3] {
    [
        // Primary location: ~/.steam/steam
        home.join(".steam").join("steam"),
        // Fallback: ~/.local/share/Steam
        home.join(".local").join("share").join("Steam"),
        // Flatpak location
        home.join(".var")
            .join("app")
            .join("com.valvesoftware.Steam")
            .join(".steam")
            .join("steam"),
    ]
}

fn home_dir() -> Result<PathBuf, SteamError> {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .ok_or(SteamError::NotFound)
}
