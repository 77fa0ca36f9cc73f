//! Default configuration template and file creation utilities.
//!
//! Provides a well-commented TOML template that matches `Config::default()`
//! and functions to write it to the XDG config path.

use std::fs;
use std::path::PathBuf;

use crate::config::error::ConfigError;
use crate::config::xdg;

// ---------------------------------------------------------------------------
// Default TOML template
// ---------------------------------------------------------------------------

/// A well-commented TOML template with all default values.
///
/// Every value here must match `Config::default()` from `schema.rs`.
/// Sections: `[canvas]`, `[table]`, `[store]`, `[log]`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Dashboard Composer Configuration
#
# This file was auto-generated with default values.
# All values shown below are the built-in defaults.
# Uncomment and modify options to customize the composer.
#
# Location: $XDG_CONFIG_HOME/dashboard-composer/config.toml

# ==============================================================================
# Canvas Configuration
# ==============================================================================

[canvas]

# Visible canvas dimensions in pixels. Drag moves keep every widget's
# bounding box inside this area.
width = 1200.0
height = 800.0

# Grid unit drag positions snap to (round-to-nearest).
grid_unit = 20.0

# Size assigned to freshly added widgets.
default_width = 280.0
default_height = 160.0

# Position assigned to freshly added widgets.
default_x = 20.0
default_y = 20.0

# ==============================================================================
# Table Configuration
# ==============================================================================

[table]

# Records per page for paginated table widgets.
page_size = 5

# ==============================================================================
# Store Configuration
# ==============================================================================

[store]

# Path to the saved-layouts slot file. Empty string means the default
# location under the user data directory (dashboard-layouts.json).
path = ""

# ==============================================================================
# Log Configuration
# ==============================================================================

[log]

# Logging verbosity level.
# Options: "error", "warn", "info", "debug", "trace"
#   error - Only errors
#   warn  - Errors and warnings
#   info  - General operational information (recommended)
#   debug - Detailed debugging information
#   trace - Very verbose, includes all internal operations
level = "info"

# Path to log file. Empty string means log to stderr.
file = ""
"#;

// ---------------------------------------------------------------------------
// File creation functions
// ---------------------------------------------------------------------------

/// Creates the default config file if it does not already exist.
///
/// Returns `Ok(true)` if the file was created, `Ok(false)` if it already
/// exists. Uses `xdg::config_path()` for the target location and creates
/// parent directories via `xdg::ensure_config_dir()`.
pub fn create_default_config_if_missing() -> Result<bool, ConfigError> {
    let path = xdg::config_path();

    if path.exists() {
        return Ok(false);
    }

    write_default_config(&path)?;
    tracing::info!("Created default configuration at {}", path.display());
    Ok(true)
}

/// Creates (or force-overwrites) the default config file.
///
/// - If the file exists and `force` is `false`, returns `ConfigError::AlreadyExists`.
/// - If the file exists and `force` is `true`, backs it up to `.toml.backup` first.
/// - Returns the path where the config was written.
pub fn create_default_config(force: bool) -> Result<PathBuf, ConfigError> {
    let path = xdg::config_path();

    if path.exists() {
        if !force {
            return Err(ConfigError::AlreadyExists { path: path.clone() });
        }
        // Back up existing file
        let backup_path = path.with_extension("toml.backup");
        fs::rename(&path, &backup_path).map_err(|e| ConfigError::WriteError {
            path: backup_path.clone(),
            source: e,
        })?;
        tracing::info!("Backed up existing config to {}", backup_path.display());
    }

    write_default_config(&path)?;
    Ok(path)
}

/// Writes the default template to `path`, creating parent dirs first.
fn write_default_config(path: &PathBuf) -> Result<(), ConfigError> {
    xdg::ensure_config_dir().map_err(|e| ConfigError::WriteError {
        path: path.clone(),
        source: e,
    })?;

    fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(|e| ConfigError::WriteError {
        path: path.clone(),
        source: e,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
