//! Drag lifecycle tests: the Idle/Dragging state machine, grid snapping,
//! and boundary clamping.

use dashboard_model::{Position, Size};

use super::{create_test_engine, engine_with_canvas, kpi_config};

#[test]
fn test_begin_drag_selects_and_captures_offset() {
    let mut engine = create_test_engine();
    let id = engine.add_widget(kpi_config(), None).id;
    engine.set_widget_position(id, Position::new(100.0, 80.0));

    assert!(engine.begin_drag(id, Position::new(112.0, 95.0)));
    assert_eq!(engine.session().selected(), Some(id));
    assert!(engine.session().is_dragging());
    assert_eq!(
        engine.session().drag_offset(),
        Some(Position::new(12.0, 15.0))
    );
}

#[test]
fn test_begin_drag_missing_widget_is_refused() {
    let mut engine = create_test_engine();
    let id = engine.add_widget(kpi_config(), None).id;
    engine.delete_widget(id);

    assert!(!engine.begin_drag(id, Position::ORIGIN));
    assert!(!engine.session().is_dragging());
}

#[test]
fn test_begin_drag_refused_in_preview_mode() {
    let mut engine = create_test_engine();
    let id = engine.add_widget(kpi_config(), None).id;
    engine.set_preview_mode(true);

    assert!(!engine.begin_drag(id, Position::new(25.0, 25.0)));
    assert!(!engine.session().is_dragging());
}

#[test]
fn test_begin_drag_refused_while_already_dragging() {
    let mut engine = create_test_engine();
    let first = engine.add_widget(kpi_config(), None).id;
    let second = engine.add_widget(kpi_config(), None).id;

    assert!(engine.begin_drag(first, Position::new(25.0, 25.0)));
    assert!(!engine.begin_drag(second, Position::new(25.0, 25.0)));
    assert_eq!(engine.session().selected(), Some(first));
}

#[test]
fn test_update_drag_snaps_to_nearest_grid_line() {
    let mut engine = create_test_engine();
    let id = engine.add_widget(kpi_config(), None).id;
    engine.set_widget_position(id, Position::new(20.0, 20.0));
    // Grab the widget exactly at its origin: offset is (0, 0).
    engine.begin_drag(id, Position::new(20.0, 20.0));

    // 31 rounds up to 40, 51 rounds up to 60, 9 rounds down to 0.
    engine.update_drag(Position::new(31.0, 51.0));
    assert_eq!(
        engine.widget(id).expect("exists").position,
        Position::new(40.0, 60.0)
    );

    engine.update_drag(Position::new(9.0, 9.0));
    assert_eq!(
        engine.widget(id).expect("exists").position,
        Position::new(0.0, 0.0)
    );
}

#[test]
fn test_update_drag_respects_captured_offset() {
    let mut engine = create_test_engine();
    let id = engine.add_widget(kpi_config(), None).id;
    engine.set_widget_position(id, Position::new(100.0, 100.0));
    engine.begin_drag(id, Position::new(110.0, 110.0));

    // Candidate is pointer minus the (10, 10) offset: (185, 145).
    engine.update_drag(Position::new(195.0, 155.0));
    assert_eq!(
        engine.widget(id).expect("exists").position,
        Position::new(180.0, 140.0)
    );
}

#[test]
fn test_update_drag_clamps_to_canvas_bounds() {
    // 600x400 canvas, 280x160 widget: x max 320, y max 240.
    let mut engine = create_test_engine();
    let id = engine.add_widget(kpi_config(), None).id;
    engine.begin_drag(id, Position::new(20.0, 20.0));

    engine.update_drag(Position::new(5000.0, 5000.0));
    assert_eq!(
        engine.widget(id).expect("exists").position,
        Position::new(320.0, 240.0)
    );

    engine.update_drag(Position::new(-5000.0, -5000.0));
    assert_eq!(
        engine.widget(id).expect("exists").position,
        Position::new(0.0, 0.0)
    );
}

#[test]
fn test_update_drag_oversized_widget_pins_to_origin() {
    // Widget as wide as the canvas: the legal x range collapses to {0}.
    let mut engine = engine_with_canvas(300.0, 300.0);
    let id = engine.add_widget(kpi_config(), None).id;
    engine.resize_widget(id, Size::new(300.0, 160.0));
    engine.begin_drag(id, Position::new(20.0, 20.0));

    engine.update_drag(Position::new(500.0, 100.0));
    let widget = engine.widget(id).expect("exists");
    assert_eq!(widget.position.x, 0.0);
    assert_eq!(widget.position.y, 100.0);
}

#[test]
fn test_update_drag_is_idempotent_for_same_pointer() {
    let mut engine = create_test_engine();
    let id = engine.add_widget(kpi_config(), None).id;
    engine.begin_drag(id, Position::new(20.0, 20.0));

    engine.update_drag(Position::new(151.0, 97.0));
    let first = engine.widget(id).expect("exists").position;
    engine.update_drag(Position::new(151.0, 97.0));
    assert_eq!(engine.widget(id).expect("exists").position, first);
}

#[test]
fn test_update_drag_positions_always_inside_canvas() {
    // Post-drag invariant: 0 <= x <= canvas - width (same for y) for any
    // pointer position, as long as the widget fits the canvas at all.
    let mut engine = create_test_engine();
    let id = engine.add_widget(kpi_config(), None).id;
    engine.begin_drag(id, Position::new(20.0, 20.0));

    for pointer in [
        Position::new(-999.0, 13.0),
        Position::new(0.0, 0.0),
        Position::new(37.0, 411.0),
        Position::new(599.0, 399.0),
        Position::new(10_000.0, -10_000.0),
    ] {
        engine.update_drag(pointer);
        let pos = engine.widget(id).expect("exists").position;
        assert!((0.0..=320.0).contains(&pos.x), "x out of range: {}", pos.x);
        assert!((0.0..=240.0).contains(&pos.y), "y out of range: {}", pos.y);
    }
}

#[test]
fn test_update_drag_without_begin_is_noop() {
    let mut engine = create_test_engine();
    let id = engine.add_widget(kpi_config(), None).id;
    let before = engine.widget(id).expect("exists").position;

    assert!(!engine.update_drag(Position::new(300.0, 300.0)));
    assert_eq!(engine.widget(id).expect("exists").position, before);
}

#[test]
fn test_end_drag_returns_to_idle_and_keeps_selection() {
    let mut engine = create_test_engine();
    let id = engine.add_widget(kpi_config(), None).id;
    engine.begin_drag(id, Position::new(25.0, 25.0));

    engine.end_drag();
    assert!(!engine.session().is_dragging());
    assert_eq!(engine.session().drag_offset(), None);
    assert_eq!(engine.session().selected(), Some(id));
}

#[test]
fn test_end_drag_when_idle_is_noop() {
    let mut engine = create_test_engine();
    engine.end_drag();
    assert!(!engine.session().is_dragging());
}

#[test]
fn test_drag_can_restart_after_end() {
    let mut engine = create_test_engine();
    let id = engine.add_widget(kpi_config(), None).id;

    assert!(engine.begin_drag(id, Position::new(25.0, 25.0)));
    engine.end_drag();
    assert!(engine.begin_drag(id, Position::new(45.0, 45.0)));
}

#[test]
fn test_entering_preview_ends_active_drag() {
    let mut engine = create_test_engine();
    let id = engine.add_widget(kpi_config(), None).id;
    engine.begin_drag(id, Position::new(25.0, 25.0));

    engine.set_preview_mode(true);
    assert!(!engine.session().is_dragging());
    assert!(!engine.update_drag(Position::new(300.0, 300.0)));

    // Leaving preview re-enables interaction.
    engine.set_preview_mode(false);
    assert!(engine.begin_drag(id, Position::new(25.0, 25.0)));
}

#[test]
fn test_deleting_dragged_widget_stops_movement() {
    let mut engine = create_test_engine();
    let id = engine.add_widget(kpi_config(), None).id;
    engine.begin_drag(id, Position::new(25.0, 25.0));

    engine.delete_widget(id);
    assert!(!engine.update_drag(Position::new(300.0, 300.0)));
    engine.end_drag();
    assert!(!engine.session().is_dragging());
}
