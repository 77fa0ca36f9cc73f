//! Per-kind widget configuration payloads.
//!
//! Configuration is a tagged union: one variant per widget kind, selected
//! by the `kind` tag in serialized form. Code that consumes a widget's
//! configuration matches on the variant instead of probing an untyped bag.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::widget::WidgetKind;

/// Default page size for paginated table widgets.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Kind-specific configuration payload, tagged by widget kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum WidgetConfig {
    /// KPI card configuration.
    Kpi(KpiConfig),
    /// Chart configuration.
    Chart(ChartConfig),
    /// Table configuration.
    Table(TableConfig),
    /// Metric card configuration.
    Metric(MetricConfig),
}

impl WidgetConfig {
    /// Returns the widget kind this configuration belongs to.
    pub fn kind(&self) -> WidgetKind {
        match self {
            WidgetConfig::Kpi(_) => WidgetKind::Kpi,
            WidgetConfig::Chart(_) => WidgetKind::Chart,
            WidgetConfig::Table(_) => WidgetKind::Table,
            WidgetConfig::Metric(_) => WidgetKind::Metric,
        }
    }
}

/// Direction of a KPI's recent movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Value is improving.
    Up,
    /// Value is declining.
    Down,
    /// No significant movement.
    Flat,
}

/// Configuration for a KPI card: current value against a target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KpiConfig {
    /// Current value of the indicator.
    pub value: f64,
    /// Target value the indicator is measured against.
    pub target: f64,
    /// Unit symbol or suffix shown next to the value.
    pub unit: String,
    /// Recent movement direction.
    pub trend: Trend,
}

impl Default for KpiConfig {
    fn default() -> Self {
        Self {
            value: 0.0,
            target: 0.0,
            unit: String::new(),
            trend: Trend::Flat,
        }
    }
}

/// Chart visualization variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    /// Line chart.
    Line,
    /// Bar chart.
    Bar,
    /// Pie chart.
    Pie,
    /// Area chart.
    Area,
}

/// Configuration for a chart widget: chart type and axis key mappings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Which chart visualization to render.
    pub chart_type: ChartType,
    /// Record field plotted on the x axis (category axis for bar/pie).
    pub x_field: String,
    /// Record field plotted on the y axis (value field for bar/pie).
    pub y_field: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            chart_type: ChartType::Line,
            x_field: String::new(),
            y_field: String::new(),
        }
    }
}

/// Configuration for a table widget: columns and behavior flags.
///
/// `columns` holds human-readable labels; `column_fields` optionally maps a
/// label to the underlying record field key. Labels without an explicit
/// mapping fall back to a derived key (lowercased, whitespace runs replaced
/// by underscores) — the tabular data engine owns that rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Ordered column labels, as displayed in the header row.
    pub columns: Vec<String>,
    /// Explicit label-to-field-key overrides.
    pub column_fields: HashMap<String, String>,
    /// Whether header clicks sort the table.
    pub sortable: bool,
    /// Whether the table is sliced into pages.
    pub paginated: bool,
    /// Whether rows get emphasis from status/severity values.
    pub highlighted: bool,
    /// Whether the search box filters rows.
    pub searchable: bool,
    /// Records per page when paginated.
    pub page_size: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            column_fields: HashMap::new(),
            sortable: true,
            paginated: true,
            highlighted: false,
            searchable: true,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Configuration for a metric card: one value and its period delta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricConfig {
    /// Current value.
    pub value: f64,
    /// Unit symbol or suffix.
    pub unit: String,
    /// Percent change versus the prior period.
    pub change: f64,
}

impl Default for MetricConfig {
    fn default() -> Self {
        Self {
            value: 0.0,
            unit: String::new(),
            change: 0.0,
        }
    }
}
