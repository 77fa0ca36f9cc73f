//! Widget identity, geometry, and the placed-widget record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::WidgetConfig;
use crate::Record;

/// Opaque identifier for a placed widget.
///
/// Assigned by the canvas engine from a monotonic counter at creation time
/// and never reused within a session, even after the widget is deleted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct WidgetId(u64);

impl WidgetId {
    /// Wraps a raw counter value.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw counter value.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Widget kind enumeration.
///
/// A closed set: each kind implies which [`WidgetConfig`] variant the
/// widget carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    /// Key-performance-indicator card (value versus target).
    Kpi,
    /// Chart visualization backed by a dataset.
    Chart,
    /// Tabular view backed by a dataset.
    Table,
    /// Single-value metric card with a period-over-period delta.
    Metric,
}

impl WidgetKind {
    /// Returns the default title for a freshly added widget of this kind.
    pub fn placeholder_title(self) -> String {
        format!("new {} widget", self)
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WidgetKind::Kpi => "kpi",
            WidgetKind::Chart => "chart",
            WidgetKind::Table => "table",
            WidgetKind::Metric => "metric",
        };
        write!(f, "{}", s)
    }
}

/// Error type for parsing WidgetKind from string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid widget kind: {0}")]
pub struct ParseKindError(pub String);

impl FromStr for WidgetKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kpi" => Ok(WidgetKind::Kpi),
            "chart" => Ok(WidgetKind::Chart),
            "table" => Ok(WidgetKind::Table),
            "metric" => Ok(WidgetKind::Metric),
            _ => Err(ParseKindError(s.to_string())),
        }
    }
}

/// A point in canvas pixel space.
///
/// Also used for pointer coordinates and drag offsets; all canvas geometry
/// shares this one representation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal offset from the canvas left edge.
    pub x: f64,
    /// Vertical offset from the canvas top edge.
    pub y: f64,
}

impl Position {
    /// The canvas origin.
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    /// Creates a position from raw coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A widget's bounding-box dimensions in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Size {
    /// Creates a size from raw dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A placed, configured element on the dashboard canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    /// Unique identifier, assigned at creation, never reused.
    pub id: WidgetId,
    /// Display title, user-editable.
    pub title: String,
    /// Top-left corner in canvas pixel space. Grid-aligned once placed by a
    /// drag; direct numeric edits are applied verbatim.
    pub position: Position,
    /// Bounding-box dimensions.
    pub size: Size,
    /// Kind-specific configuration payload.
    pub config: WidgetConfig,
    /// Optional dataset attached to the widget. Renderers require this for
    /// Chart and Table kinds; KPI and Metric widgets carry none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Record>>,
}

impl Widget {
    /// Creates a widget with no attached dataset.
    pub fn new(
        id: WidgetId,
        title: String,
        position: Position,
        size: Size,
        config: WidgetConfig,
    ) -> Self {
        Self {
            id,
            title,
            position,
            size,
            config,
            data: None,
        }
    }

    /// Returns the widget kind, derived from the configuration variant.
    pub fn kind(&self) -> WidgetKind {
        self.config.kind()
    }
}
