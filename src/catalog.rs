//! Widget template catalog.
//!
//! Templates feed the canvas engine's add operation: each one pairs a
//! kind-specific configuration with a display title and, for data-backed
//! kinds, a sample dataset. The catalog maps template identifiers to
//! factory functions so hosts can populate an "add widget" menu from
//! configuration or user input; the engine treats template configs
//! opaquely.

use std::collections::HashMap;

use dashboard_model::{
    ChartConfig, ChartType, KpiConfig, MetricConfig, Record, TableConfig, Trend, WidgetConfig,
    WidgetKind,
};
use serde_json::json;

/// A ready-to-place widget blueprint.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetTemplate {
    /// Title for the placed widget.
    pub title: String,
    /// Kind-specific configuration payload.
    pub config: WidgetConfig,
    /// Sample dataset for data-backed kinds (chart, table).
    pub data: Option<Vec<Record>>,
}

impl WidgetTemplate {
    /// Returns the widget kind this template produces.
    pub fn kind(&self) -> WidgetKind {
        self.config.kind()
    }
}

/// Factory function type for creating template instances.
pub type TemplateFactory = fn() -> WidgetTemplate;

/// Registry mapping template identifiers to factory functions.
///
/// # Example
///
/// ```
/// use dashboard_composer::catalog::TemplateCatalog;
///
/// let catalog = TemplateCatalog::new();
/// assert!(catalog.create("task-table").is_some());
/// assert!(catalog.create("nonexistent").is_none());
/// ```
pub struct TemplateCatalog {
    factories: HashMap<&'static str, TemplateFactory>,
}

impl TemplateCatalog {
    /// Creates a catalog with the built-in templates.
    ///
    /// The following template IDs are registered by default:
    /// - `revenue-kpi`
    /// - `monthly-sales-chart`
    /// - `task-table`
    /// - `uptime-metric`
    pub fn new() -> Self {
        let mut catalog = Self {
            factories: HashMap::new(),
        };
        catalog.register("revenue-kpi", revenue_kpi);
        catalog.register("monthly-sales-chart", monthly_sales_chart);
        catalog.register("task-table", task_table);
        catalog.register("uptime-metric", uptime_metric);
        catalog
    }

    /// Register a template factory for the given identifier.
    ///
    /// Overwrites any existing factory for the same ID.
    pub fn register(&mut self, id: &'static str, factory: TemplateFactory) {
        self.factories.insert(id, factory);
    }

    /// Create a template instance by identifier.
    ///
    /// Returns `None` if no factory is registered for the given ID.
    pub fn create(&self, id: &str) -> Option<WidgetTemplate> {
        self.factories.get(id).map(|f| f())
    }

    /// List all registered template identifiers.
    ///
    /// The order is not guaranteed.
    pub fn available_ids(&self) -> Vec<&'static str> {
        self.factories.keys().copied().collect()
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Built-in templates
// ---------------------------------------------------------------------------

fn revenue_kpi() -> WidgetTemplate {
    WidgetTemplate {
        title: "Quarterly revenue".to_string(),
        config: WidgetConfig::Kpi(KpiConfig {
            value: 1_250_000.0,
            target: 1_500_000.0,
            unit: "$".to_string(),
            trend: Trend::Up,
        }),
        data: None,
    }
}

fn monthly_sales_chart() -> WidgetTemplate {
    let rows = [
        ("Jan", 42_000), ("Feb", 38_500), ("Mar", 51_200),
        ("Apr", 47_800), ("May", 53_100), ("Jun", 49_400),
    ];
    WidgetTemplate {
        title: "Monthly sales".to_string(),
        config: WidgetConfig::Chart(ChartConfig {
            chart_type: ChartType::Bar,
            x_field: "month".to_string(),
            y_field: "sales".to_string(),
        }),
        data: Some(
            rows.iter()
                .map(|(month, sales)| sample_row(json!({"month": month, "sales": sales})))
                .collect(),
        ),
    }
}

fn task_table() -> WidgetTemplate {
    let rows = [
        json!({"name": "Data migration", "status": "in progress", "progress": 62, "severity": "high"}),
        json!({"name": "Auth rollout", "status": "done", "progress": 100, "severity": "low"}),
        json!({"name": "Billing revamp", "status": "waiting", "progress": 15, "severity": "medium"}),
        json!({"name": "Search upgrade", "status": "planned", "progress": 0, "severity": "low"}),
        json!({"name": "Incident review", "status": "delayed", "progress": 40, "severity": "high"}),
        json!({"name": "Docs refresh", "status": "in progress", "progress": 75, "severity": "low"}),
    ];
    WidgetTemplate {
        title: "Project tasks".to_string(),
        config: WidgetConfig::Table(TableConfig {
            columns: vec![
                "name".to_string(),
                "status".to_string(),
                "progress".to_string(),
                "severity".to_string(),
            ],
            highlighted: true,
            ..TableConfig::default()
        }),
        data: Some(rows.iter().cloned().map(sample_row).collect()),
    }
}

fn uptime_metric() -> WidgetTemplate {
    WidgetTemplate {
        title: "Service uptime".to_string(),
        config: WidgetConfig::Metric(MetricConfig {
            value: 99.97,
            unit: "%".to_string(),
            change: 0.02,
        }),
        data: None,
    }
}

fn sample_row(value: serde_json::Value) -> Record {
    value
        .as_object()
        .expect("sample rows are JSON objects")
        .clone()
}
