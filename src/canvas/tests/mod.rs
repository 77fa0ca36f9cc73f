//! Test suite for the canvas layout engine.
//!
//! Split by concern: widget lifecycle operations, the drag state machine,
//! and layout snapshots/persistence.

mod drag;
mod save;

use dashboard_model::{KpiConfig, Position, Size, TableConfig, WidgetConfig};

use super::{CanvasEngine, CanvasOptions};

/// Engine on a 600x400 canvas with a 20px grid.
fn create_test_engine() -> CanvasEngine {
    CanvasEngine::new(test_options())
}

/// Engine with explicit canvas dimensions (20px grid).
fn engine_with_canvas(width: f64, height: f64) -> CanvasEngine {
    CanvasEngine::new(CanvasOptions {
        canvas_width: width,
        canvas_height: height,
        ..test_options()
    })
}

fn test_options() -> CanvasOptions {
    CanvasOptions {
        canvas_width: 600.0,
        canvas_height: 400.0,
        grid_unit: 20.0,
        default_position: Position::new(20.0, 20.0),
        default_size: Size::new(280.0, 160.0),
    }
}

fn kpi_config() -> WidgetConfig {
    WidgetConfig::Kpi(KpiConfig::default())
}

fn table_config() -> WidgetConfig {
    WidgetConfig::Table(TableConfig::default())
}
