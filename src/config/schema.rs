//! TOML configuration schema types for the dashboard composer.
//!
//! All structs derive `Deserialize` and `Serialize` with sensible defaults
//! via `#[serde(default)]`, so a partial file fills the gaps from the
//! built-in values and an empty file equals `Config::default()`.

use serde::{Deserialize, Serialize};

use crate::canvas::CanvasOptions;
use dashboard_model::{Position, Size, DEFAULT_PAGE_SIZE};

/// Root configuration encompassing all sections.
///
/// Corresponds to the full TOML file structure:
/// ```toml
/// [canvas]
/// [table]
/// [store]
/// [log]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Canvas dimensions and widget placement defaults.
    pub canvas: CanvasSection,
    /// Table widget defaults.
    pub table: TableSection,
    /// Layout store location.
    pub store: StoreSection,
    /// Logging settings.
    pub log: LogSection,
}

/// Canvas geometry configuration from the `[canvas]` section.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CanvasSection {
    /// Visible canvas width in pixels.
    pub width: f64,
    /// Visible canvas height in pixels.
    pub height: f64,
    /// Grid unit drag positions snap to.
    pub grid_unit: f64,
    /// Width assigned to freshly added widgets.
    pub default_width: f64,
    /// Height assigned to freshly added widgets.
    pub default_height: f64,
    /// X coordinate assigned to freshly added widgets.
    pub default_x: f64,
    /// Y coordinate assigned to freshly added widgets.
    pub default_y: f64,
}

impl CanvasSection {
    /// Converts the section into engine options.
    pub fn to_options(&self) -> CanvasOptions {
        CanvasOptions {
            canvas_width: self.width,
            canvas_height: self.height,
            grid_unit: self.grid_unit,
            default_position: Position::new(self.default_x, self.default_y),
            default_size: Size::new(self.default_width, self.default_height),
        }
    }
}

impl Default for CanvasSection {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            grid_unit: 20.0,
            default_width: 280.0,
            default_height: 160.0,
            default_x: 20.0,
            default_y: 20.0,
        }
    }
}

/// Table defaults from the `[table]` section.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TableSection {
    /// Records per page for paginated tables.
    pub page_size: usize,
}

impl Default for TableSection {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Layout store location from the `[store]` section.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct StoreSection {
    /// Path to the layout slot file. Empty string means the default
    /// location under the user data directory.
    pub path: String,
}

impl StoreSection {
    /// Resolves the configured path, falling back to the default slot.
    pub fn resolve_path(&self) -> std::path::PathBuf {
        if self.path.is_empty() {
            crate::store::JsonFileStore::default_path()
        } else {
            std::path::PathBuf::from(&self.path)
        }
    }
}

/// Logging settings from the `[log]` section.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LogSection {
    /// Logging verbosity.
    pub level: LogLevel,
    /// Path to log file. Empty string means stderr.
    pub file: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            file: String::new(),
        }
    }
}

/// Log verbosity levels (kebab-case in TOML).
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings.
    Warn,
    /// Informational messages (default).
    Info,
    /// Debug-level detail.
    Debug,
    /// Full trace output.
    Trace,
}

impl LogLevel {
    /// Returns the level as an `EnvFilter` directive.
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
