//! Shared data model for the dashboard composer.
//!
//! This crate defines the typed records describing a placed widget and a
//! saved dashboard layout. It carries no behavior beyond construction and
//! kind derivation; both the canvas layout engine and the tabular data
//! engine in the main crate consume these types.
//!
//! # Architecture
//!
//! - [`Widget`] is a placed, configured element on the canvas. Its kind is
//!   not stored separately: it is derived from the [`WidgetConfig`] tagged
//!   union, so a widget's configuration shape can never disagree with its
//!   declared kind.
//! - [`DashboardLayout`] is a named, timestamped, immutable snapshot of all
//!   widgets, persisted as one record.
//! - [`Record`] is one uniformly-shaped row of a widget dataset: a mapping
//!   from field name to JSON scalar.

mod config;
mod layout;
mod widget;

pub use config::{
    ChartConfig, ChartType, KpiConfig, MetricConfig, TableConfig, Trend, WidgetConfig,
    DEFAULT_PAGE_SIZE,
};
pub use layout::DashboardLayout;
pub use widget::{ParseKindError, Position, Size, Widget, WidgetId, WidgetKind};

/// One row of a widget dataset: field name to scalar value.
///
/// Datasets are lists of uniformly-shaped records; the tabular data engine
/// treats every value through its JSON scalar representation.
pub type Record = serde_json::Map<String, serde_json::Value>;
