use std::path::PathBuf;

use winreg::RegKey;
use winreg::enums::{HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE};

use crate::SteamError;

/// Returns the Steam base directory on Windows using the registry.
pub(crate) fn get_base_dir() -> Result<PathBuf, SteamError> {
    // Per-user key written by the running client
    let hkcu = RegKey::predef(HKEY_CURRENT_USER);
    if let Ok(path) = read_steam_registry(&hkcu, r"Software\Valve\Steam", "SteamPath") {
        return Ok(path);
    }

    // Machine-wide install, 64-bit view first
    let hklm = RegKey::predef(HKEY_LOCAL_MACHINE);
    if let Ok(path) = read_steam_registry(
        &hklm,
        r"SOFTWARE\Wow6432Node\Valve\Steam",
        "InstallPath",
    ) {
        return Ok(path);
    }

    if let Ok(path) = read_steam_registry(&hklm, r"SOFTWARE\Valve\Steam", "InstallPath") {
        return Ok(path);
    }

    Err(SteamError::NotFound)
}

fn read_steam_registry(root: &RegKey, subkey: &str, value: &str) -> Result<PathBuf, SteamError> {
    let key = root.open_subkey(subkey).map_err(|_| SteamError::NotFound)?;
    let install_path: String = key.get_value(value).map_err(|_| SteamError::NotFound)?;
    if install_path.is_empty() {
        return Err(SteamError::NotFound);
    }
    tracing::trace!(subkey, value, "steam path read from registry");
    Ok(PathBuf::from(install_path))
}
