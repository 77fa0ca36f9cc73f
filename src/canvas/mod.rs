//! Canvas layout engine for the dashboard builder.
//!
//! Owns the ordered list of placed widgets and the ephemeral session state
//! (selection, active drag, preview mode), and exposes the operations the
//! builder UI calls in response to discrete input events: add, delete,
//! move, resize, retitle, the drag lifecycle, and layout snapshots.
//!
//! # Architecture
//!
//! All geometry math (grid snapping, boundary clamping) lives in
//! [`geometry`] as pure functions; the drag lifecycle is an explicit state
//! machine in [`session`]. Every operation runs synchronously to
//! completion — one call per input event, processed strictly in arrival
//! order — so there is no interior locking and no async boundary.
//!
//! Boundary enforcement is deliberately asymmetric: drag moves snap to the
//! grid and clamp to the canvas, while resizes and direct numeric edits
//! apply verbatim and may push a widget past the canvas edge.

pub mod geometry;
pub mod session;

#[cfg(test)]
mod tests;

use chrono::Utc;
use dashboard_model::{DashboardLayout, Position, Record, Size, Widget, WidgetConfig, WidgetId};

use crate::catalog::WidgetTemplate;
use crate::store::{LayoutStore, StoreError};
use geometry::{clamp_axis, parse_coordinate, parse_dimension, snap_to_grid, InputError};
use session::{DragState, SessionState};

/// Default canvas width in pixels.
pub const DEFAULT_CANVAS_WIDTH: f64 = 1200.0;

/// Default canvas height in pixels.
pub const DEFAULT_CANVAS_HEIGHT: f64 = 800.0;

/// Default grid unit for drag snapping.
pub const DEFAULT_GRID_UNIT: f64 = 20.0;

/// Canvas dimensions and placement defaults for new widgets.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasOptions {
    /// Visible canvas width in pixels.
    pub canvas_width: f64,
    /// Visible canvas height in pixels.
    pub canvas_height: f64,
    /// Grid unit drag positions snap to.
    pub grid_unit: f64,
    /// Position assigned to freshly added widgets.
    pub default_position: Position,
    /// Size assigned to freshly added widgets.
    pub default_size: Size,
}

impl Default for CanvasOptions {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            grid_unit: DEFAULT_GRID_UNIT,
            default_position: Position::new(20.0, 20.0),
            default_size: Size::new(280.0, 160.0),
        }
    }
}

/// The canvas layout engine.
///
/// The widget list and session state are owned exclusively by the engine;
/// renderers only read. Operations on ids that no longer exist are
/// absorbed as no-ops (returning `false`), never errors — the builder UI
/// must not crash on stale references.
#[derive(Debug)]
pub struct CanvasEngine {
    options: CanvasOptions,
    widgets: Vec<Widget>,
    session: SessionState,
    next_widget_id: u64,
    save_seq: u64,
}

impl CanvasEngine {
    /// Creates an empty canvas with the given options.
    pub fn new(options: CanvasOptions) -> Self {
        Self {
            options,
            widgets: Vec::new(),
            session: SessionState::new(),
            next_widget_id: 1,
            save_seq: 1,
        }
    }

    /// Returns the canvas options.
    pub fn options(&self) -> &CanvasOptions {
        &self.options
    }

    /// Returns the placed widgets in insertion order.
    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    /// Returns the widget with the given id, if it exists.
    pub fn widget(&self, id: WidgetId) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.id == id)
    }

    /// Returns the session state (selection, drag, preview).
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Returns the currently selected widget, if any.
    pub fn selected_widget(&self) -> Option<&Widget> {
        self.session.selected().and_then(|id| self.widget(id))
    }

    // -----------------------------------------------------------------------
    // Widget lifecycle
    // -----------------------------------------------------------------------

    /// Adds a widget with a fresh id at the default position and size.
    ///
    /// The title comes from the caller when given, otherwise from the
    /// kind-derived placeholder (`"new kpi widget"` and so on). Returns the
    /// created widget.
    pub fn add_widget(&mut self, config: WidgetConfig, title: Option<&str>) -> &Widget {
        let id = self.allocate_id();
        let title = match title {
            Some(t) => t.to_string(),
            None => config.kind().placeholder_title(),
        };
        tracing::debug!("add widget {} kind {}", id, config.kind());
        let widget = Widget::new(
            id,
            title,
            self.options.default_position,
            self.options.default_size,
            config,
        );
        self.widgets.push(widget);
        self.widgets.last().expect("widget was just pushed")
    }

    /// Adds a widget from a catalog template, copying its configuration,
    /// title, and sample dataset.
    pub fn add_from_template(&mut self, template: &WidgetTemplate) -> &Widget {
        let id = self.allocate_id();
        tracing::debug!("add widget {} from template {:?}", id, template.title);
        let mut widget = Widget::new(
            id,
            template.title.clone(),
            self.options.default_position,
            self.options.default_size,
            template.config.clone(),
        );
        widget.data = template.data.clone();
        self.widgets.push(widget);
        self.widgets.last().expect("widget was just pushed")
    }

    /// Removes the widget with the given id.
    ///
    /// Clears the selection if it pointed at the removed widget. Returns
    /// `false` (no-op) if the id is absent.
    pub fn delete_widget(&mut self, id: WidgetId) -> bool {
        let Some(index) = self.widgets.iter().position(|w| w.id == id) else {
            return false;
        };
        self.widgets.remove(index);
        if self.session.selected == Some(id) {
            self.session.selected = None;
        }
        tracing::debug!("deleted widget {}", id);
        true
    }

    /// Replaces the widget's size.
    ///
    /// The position is intentionally not re-clamped: a resize may extend a
    /// widget past the canvas edge, unlike a drag move.
    pub fn resize_widget(&mut self, id: WidgetId, size: Size) -> bool {
        match self.widgets.iter_mut().find(|w| w.id == id) {
            Some(widget) => {
                widget.size = size;
                true
            }
            None => false,
        }
    }

    /// Replaces the widget's title.
    pub fn retitle_widget(&mut self, id: WidgetId, title: &str) -> bool {
        match self.widgets.iter_mut().find(|w| w.id == id) {
            Some(widget) => {
                widget.title = title.to_string();
                true
            }
            None => false,
        }
    }

    /// Sets the widget position verbatim — no clamping, no grid snap.
    ///
    /// This is the direct numeric edit from the side panel; only the drag
    /// path snaps and clamps.
    pub fn set_widget_position(&mut self, id: WidgetId, position: Position) -> bool {
        match self.widgets.iter_mut().find(|w| w.id == id) {
            Some(widget) => {
                widget.position = position;
                true
            }
            None => false,
        }
    }

    /// Replaces the widget's kind-specific configuration.
    ///
    /// Rejected when the new configuration's kind differs from the
    /// widget's: a placed widget never changes kind.
    pub fn set_widget_config(&mut self, id: WidgetId, config: WidgetConfig) -> bool {
        match self.widgets.iter_mut().find(|w| w.id == id) {
            Some(widget) if widget.config.kind() == config.kind() => {
                widget.config = config;
                true
            }
            _ => false,
        }
    }

    /// Attaches or replaces the widget's dataset.
    pub fn set_widget_data(&mut self, id: WidgetId, data: Option<Vec<Record>>) -> bool {
        match self.widgets.iter_mut().find(|w| w.id == id) {
            Some(widget) => {
                widget.data = data;
                true
            }
            None => false,
        }
    }

    /// Applies a position edit from text fields.
    ///
    /// Both coordinates are parsed and validated before any mutation, so a
    /// rejected edit leaves the widget untouched. Non-numeric text, `NaN`,
    /// infinities, and negative coordinates are all rejected.
    pub fn set_position_from_input(
        &mut self,
        id: WidgetId,
        x_text: &str,
        y_text: &str,
    ) -> Result<bool, InputError> {
        let x = parse_coordinate(x_text)?;
        let y = parse_coordinate(y_text)?;
        Ok(self.set_widget_position(id, Position::new(x, y)))
    }

    /// Applies a size edit from text fields.
    ///
    /// Same validation contract as [`set_position_from_input`], with the
    /// stricter rule that dimensions must be positive.
    ///
    /// [`set_position_from_input`]: CanvasEngine::set_position_from_input
    pub fn set_size_from_input(
        &mut self,
        id: WidgetId,
        width_text: &str,
        height_text: &str,
    ) -> Result<bool, InputError> {
        let width = parse_dimension(width_text)?;
        let height = parse_dimension(height_text)?;
        Ok(self.resize_widget(id, Size::new(width, height)))
    }

    // -----------------------------------------------------------------------
    // Selection and drag lifecycle
    // -----------------------------------------------------------------------

    /// Selects the widget with the given id. No-op if it does not exist.
    pub fn select_widget(&mut self, id: WidgetId) -> bool {
        if self.widget(id).is_none() {
            return false;
        }
        self.session.selected = Some(id);
        true
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.session.selected = None;
    }

    /// Starts a drag on the widget under the pointer.
    ///
    /// Refused while in preview mode, while another drag is in progress,
    /// or when the id does not exist. On success the widget becomes
    /// selected and the pointer-to-origin offset is captured once.
    pub fn begin_drag(&mut self, id: WidgetId, pointer: Position) -> bool {
        if self.session.preview || self.session.is_dragging() {
            return false;
        }
        let Some(widget) = self.widget(id) else {
            return false;
        };
        let offset = Position::new(pointer.x - widget.position.x, pointer.y - widget.position.y);
        self.session.selected = Some(id);
        self.session.drag = DragState::Dragging { widget: id, offset };
        tracing::debug!("begin drag on widget {}", id);
        true
    }

    /// Moves the dragged widget to follow the pointer.
    ///
    /// No-op unless a drag is in progress, a widget is selected, preview
    /// mode is off, and the dragged widget still exists. The candidate
    /// position (`pointer - offset`) is snapped per axis to the nearest
    /// grid multiple, then clamped so the widget's box stays inside the
    /// canvas; a widget larger than the canvas pins to the origin.
    /// Repeated calls with the same pointer position are idempotent.
    pub fn update_drag(&mut self, pointer: Position) -> bool {
        let DragState::Dragging { widget: id, offset } = self.session.drag else {
            return false;
        };
        if self.session.preview || self.session.selected.is_none() {
            return false;
        }
        let grid = self.options.grid_unit;
        let (canvas_w, canvas_h) = (self.options.canvas_width, self.options.canvas_height);
        let Some(widget) = self.widgets.iter_mut().find(|w| w.id == id) else {
            return false;
        };
        let snapped_x = snap_to_grid(pointer.x - offset.x, grid);
        let snapped_y = snap_to_grid(pointer.y - offset.y, grid);
        widget.position = Position::new(
            clamp_axis(snapped_x, canvas_w - widget.size.width),
            clamp_axis(snapped_y, canvas_h - widget.size.height),
        );
        true
    }

    /// Ends the drag, keeping the selection.
    ///
    /// Hosts must route both pointer-release and pointer-leaving-canvas
    /// here, otherwise the engine would still believe a drag is in
    /// progress after the button is released elsewhere.
    pub fn end_drag(&mut self) {
        if self.session.is_dragging() {
            tracing::debug!("end drag");
        }
        self.session.drag = DragState::Idle;
    }

    /// Switches preview mode on or off.
    ///
    /// Entering preview ends any active drag; while on, new drags are
    /// refused.
    pub fn set_preview_mode(&mut self, on: bool) {
        if on {
            self.end_drag();
        }
        self.session.preview = on;
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    /// Snapshots the current arrangement into a new saved layout.
    ///
    /// The snapshot is a deep copy: mutating the live canvas afterwards
    /// never changes the stored record. Every save produces a fresh id and
    /// appends a new record; nothing is updated in place. A failing store
    /// surfaces as a [`StoreError`] so the UI can warn or retry.
    pub fn save_layout(
        &mut self,
        name: &str,
        description: &str,
        store: &dyn LayoutStore,
    ) -> Result<DashboardLayout, StoreError> {
        let id = format!("layout-{}-{}", Utc::now().timestamp_millis(), self.save_seq);
        self.save_seq += 1;
        let layout = DashboardLayout::new(
            id,
            name.to_string(),
            description.to_string(),
            self.widgets.clone(),
        );
        store.append(&layout)?;
        tracing::debug!(
            "saved layout {:?} ({} widgets) as {}",
            name,
            layout.widgets.len(),
            layout.id
        );
        Ok(layout)
    }

    fn allocate_id(&mut self) -> WidgetId {
        let id = WidgetId::new(self.next_widget_id);
        self.next_widget_id += 1;
        id
    }
}

impl Default for CanvasEngine {
    fn default() -> Self {
        Self::new(CanvasOptions::default())
    }
}
