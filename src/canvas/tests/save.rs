//! Layout snapshot tests: deep-copy isolation and store delegation.

use dashboard_model::{DashboardLayout, Position};

use super::{create_test_engine, kpi_config};
use crate::store::{LayoutStore, MemoryStore, StoreError};

/// Store stub whose append always fails, for surfacing-error tests.
struct FailingStore;

impl LayoutStore for FailingStore {
    fn append(&self, _layout: &DashboardLayout) -> Result<(), StoreError> {
        Err(StoreError::Serialize {
            message: "store unavailable".to_string(),
        })
    }

    fn load_all(&self) -> Result<Vec<DashboardLayout>, StoreError> {
        Ok(Vec::new())
    }
}

#[test]
fn test_save_layout_snapshots_current_widgets() {
    let mut engine = create_test_engine();
    engine.add_widget(kpi_config(), Some("Revenue"));
    engine.add_widget(kpi_config(), Some("Churn"));

    let store = MemoryStore::new();
    let layout = engine
        .save_layout("Q3 board", "quarterly review", &store)
        .expect("save");

    assert_eq!(layout.name, "Q3 board");
    assert_eq!(layout.description, "quarterly review");
    assert_eq!(layout.widgets.len(), 2);
    assert_eq!(layout.widgets[0].title, "Revenue");
    assert_eq!(layout.created_at, layout.updated_at);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_save_layout_is_isolated_from_later_mutations() {
    let mut engine = create_test_engine();
    let id = engine.add_widget(kpi_config(), Some("Revenue")).id;

    let store = MemoryStore::new();
    engine.save_layout("before", "", &store).expect("save");

    // Mutate the live canvas after saving.
    engine.retitle_widget(id, "Renamed");
    engine.set_widget_position(id, Position::new(500.0, 500.0));
    engine.delete_widget(id);

    let saved = store.load_all().expect("load_all");
    assert_eq!(saved[0].widgets.len(), 1);
    assert_eq!(saved[0].widgets[0].title, "Revenue");
    assert_eq!(saved[0].widgets[0].position, Position::new(20.0, 20.0));
}

#[test]
fn test_each_save_appends_a_new_record_with_fresh_id() {
    let mut engine = create_test_engine();
    engine.add_widget(kpi_config(), None);

    let store = MemoryStore::new();
    let first = engine.save_layout("same name", "", &store).expect("save");
    let second = engine.save_layout("same name", "", &store).expect("save");

    assert_ne!(first.id, second.id);
    let all = store.load_all().expect("load_all");
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, first.id);
    assert_eq!(all[1].id, second.id);
}

#[test]
fn test_save_layout_of_empty_canvas() {
    let mut engine = create_test_engine();
    let store = MemoryStore::new();
    let layout = engine.save_layout("blank", "", &store).expect("save");
    assert!(layout.widgets.is_empty());
}

#[test]
fn test_store_failure_surfaces_as_error() {
    let mut engine = create_test_engine();
    engine.add_widget(kpi_config(), None);

    let err = engine
        .save_layout("doomed", "", &FailingStore)
        .expect_err("append should fail");
    assert!(err.to_string().contains("store unavailable"));

    // The live canvas is untouched by the failed save.
    assert_eq!(engine.widgets().len(), 1);
}
