//! Platform-aware path resolution for the dashboard composer.
//!
//! On **Linux**, follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/dashboard-composer` or `~/.config/dashboard-composer`
//! - Data: `$XDG_DATA_HOME/dashboard-composer` or `~/.local/share/dashboard-composer`
//!
//! On **macOS**, uses Apple conventions with XDG env var overrides:
//! - Config: `$XDG_CONFIG_HOME/dashboard-composer` or `~/Library/Application Support/dashboard-composer`
//! - Data: `$XDG_DATA_HOME/dashboard-composer` or `~/Library/Application Support/dashboard-composer`

use std::fs;
use std::path::PathBuf;

const APP_NAME: &str = "dashboard-composer";

/// Returns the configuration directory for the dashboard composer.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/dashboard-composer` (if env var set, any platform)
/// 2. Platform default:
///    - Linux: `~/.config/dashboard-composer`
///    - macOS: `~/Library/Application Support/dashboard-composer`
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join(APP_NAME);
    }
    platform_config_dir().join(APP_NAME)
}

/// Platform-native config base directory (without XDG override).
fn platform_config_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        dirs::config_dir().expect("could not determine config directory")
    }
    #[cfg(not(target_os = "macos"))]
    {
        dirs::home_dir()
            .expect("could not determine home directory")
            .join(".config")
    }
}

/// Returns the path to the main configuration file.
///
/// Resolves to `config_dir()/config.toml`.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Creates the configuration directory if it does not exist.
pub fn ensure_config_dir() -> std::io::Result<PathBuf> {
    let dir = config_dir();
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Returns the data directory holding the layout store slot.
///
/// Resolution order:
/// 1. `$XDG_DATA_HOME/dashboard-composer` (if env var set, any platform)
/// 2. Platform default:
///    - Linux: `~/.local/share/dashboard-composer`
///    - macOS: `~/Library/Application Support/dashboard-composer`
pub fn data_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        return PathBuf::from(xdg).join(APP_NAME);
    }
    platform_data_dir().join(APP_NAME)
}

/// Platform-native data base directory (without XDG override).
fn platform_data_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        dirs::data_dir().expect("could not determine data directory")
    }
    #[cfg(not(target_os = "macos"))]
    {
        dirs::home_dir()
            .expect("could not determine home directory")
            .join(".local")
            .join("share")
    }
}
