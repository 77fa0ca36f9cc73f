//! Dashboard composer core library.
//!
//! This crate provides the two engines behind the dashboard builder:
//!
//! - the **canvas layout engine** ([`canvas`]): widget placement, the
//!   drag-interaction state machine with grid snapping and boundary
//!   clamping, and layout snapshots;
//! - the **tabular data engine** ([`table`]): the filter → sort →
//!   paginate → format pipeline behind the table widget.
//!
//! Around them sit the layout persistence adapter ([`store`]), the widget
//! template catalog ([`catalog`]), and TOML configuration ([`config`]).
//! The shared data model lives in the `dashboard-model` crate and is
//! re-exported here.
//!
//! Rendering is out of scope: given a widget's title, configuration, and
//! optional dataset, a renderer produces a visual sized to exactly the box
//! the layout engine assigns. The engines never inspect renderer output.
//!
//! Everything is single-threaded and synchronous: each engine operation
//! runs to completion in response to one discrete input event, and events
//! are processed strictly in arrival order.

/// Canvas layout engine: widget placement, drag lifecycle, snapshots.
pub mod canvas;

/// Widget template catalog feeding the add operation.
pub mod catalog;

/// TOML configuration (schema, loader, defaults, XDG paths).
pub mod config;

/// Layout persistence adapter.
pub mod store;

/// Tabular data engine: filter/sort/paginate/format pipeline.
pub mod table;

pub use dashboard_model::{
    DashboardLayout, Position, Record, Size, Widget, WidgetConfig, WidgetId, WidgetKind,
};
