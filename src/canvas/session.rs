//! Ephemeral interaction state: selection, the drag state machine, and
//! preview mode. None of this is persisted with a layout.

use dashboard_model::{Position, WidgetId};

/// Drag interaction state machine.
///
/// `Idle -> Dragging` on a successful drag start; `Dragging -> Idle` when
/// the pointer is released or leaves the canvas (both route to the same
/// end transition). The pointer-to-widget-origin offset is captured once
/// at drag start and dropped with the state on end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    /// No drag in progress.
    Idle,
    /// A widget is being dragged.
    Dragging {
        /// The widget under the pointer.
        widget: WidgetId,
        /// Pointer position minus widget origin, captured at drag start.
        offset: Position,
    },
}

/// Session state owned by the canvas engine.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    /// At most one widget is selected at a time.
    pub(crate) selected: Option<WidgetId>,
    /// Current drag interaction state.
    pub(crate) drag: DragState,
    /// When true, drag interactions are disabled.
    pub(crate) preview: bool,
}

impl SessionState {
    /// Creates an idle session with nothing selected.
    pub fn new() -> Self {
        Self {
            selected: None,
            drag: DragState::Idle,
            preview: false,
        }
    }

    /// Returns the selected widget id, if any.
    pub fn selected(&self) -> Option<WidgetId> {
        self.selected
    }

    /// Returns `true` while a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Returns the captured drag offset while dragging.
    pub fn drag_offset(&self) -> Option<Position> {
        match self.drag {
            DragState::Dragging { offset, .. } => Some(offset),
            DragState::Idle => None,
        }
    }

    /// Returns `true` while preview mode is on.
    pub fn is_preview(&self) -> bool {
        self.preview
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
