//! Layout persistence adapter.
//!
//! Saved layouts live in a single namespaced slot holding a JSON-encoded
//! array of [`DashboardLayout`] records. Appending is read-modify-write of
//! the whole array — not a transactional log. Two writers from different
//! processes can race and lose a record; that is acceptable only because
//! the composer is a single-session application.
//!
//! Store failures are surfaced to the caller as [`StoreError`] so the UI
//! can warn or retry; a save is never silently dropped.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use dashboard_model::DashboardLayout;
use thiserror::Error;

/// Fixed namespace the layout slot is keyed by.
pub const LAYOUT_NAMESPACE: &str = "dashboard-layouts";

/// Errors that can occur during layout store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to read the layout slot from disk.
    #[error("Failed to read layout store: {path}")]
    Read {
        /// Path to the slot that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the layout slot to disk.
    #[error("Failed to write layout store: {path}")]
    Write {
        /// Path to the slot that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The slot contents did not parse as a layout array.
    #[error("Layout store at {path} is corrupt: {message}")]
    Corrupt {
        /// Path to the unparsable slot.
        path: PathBuf,
        /// Human-readable description of the parse failure.
        message: String,
    },

    /// Failed to encode the layout array as JSON.
    #[error("Failed to encode layouts: {message}")]
    Serialize {
        /// Description of the serialization failure.
        message: String,
    },
}

/// Append-only store of saved dashboard layouts.
///
/// `append` adds one record to the end of the slot; `load_all` returns
/// every record in insertion order. Nothing is ever updated in place.
pub trait LayoutStore {
    /// Appends one layout record to the slot.
    fn append(&self, layout: &DashboardLayout) -> Result<(), StoreError>;

    /// Loads all saved layouts in insertion order.
    fn load_all(&self) -> Result<Vec<DashboardLayout>, StoreError>;
}

/// In-process layout store for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    layouts: Mutex<Vec<DashboardLayout>>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the count of stored layouts.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` when nothing has been saved yet.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<DashboardLayout>> {
        self.layouts.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl LayoutStore for MemoryStore {
    fn append(&self, layout: &DashboardLayout) -> Result<(), StoreError> {
        self.lock().push(layout.clone());
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<DashboardLayout>, StoreError> {
        Ok(self.lock().clone())
    }
}

/// File-backed layout store: one JSON array per namespace.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by the given slot file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store at the default data-directory slot.
    pub fn at_default_path() -> Self {
        Self::new(Self::default_path())
    }

    /// Returns the default slot location under the user data directory.
    pub fn default_path() -> PathBuf {
        crate::config::xdg::data_dir().join(format!("{LAYOUT_NAMESPACE}.json"))
    }

    /// Returns the slot file path.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Reads the whole slot; a missing file is an empty store.
    fn read_slot(&self) -> Result<Vec<DashboardLayout>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };
        serde_json::from_str(&content).map_err(|e| StoreError::Corrupt {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    /// Writes the whole slot back, creating parent directories as needed.
    fn write_slot(&self, layouts: &[DashboardLayout]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::Write {
                path: self.path.clone(),
                source: e,
            })?;
        }
        let encoded =
            serde_json::to_string_pretty(layouts).map_err(|e| StoreError::Serialize {
                message: e.to_string(),
            })?;
        fs::write(&self.path, encoded).map_err(|e| StoreError::Write {
            path: self.path.clone(),
            source: e,
        })
    }
}

impl LayoutStore for JsonFileStore {
    fn append(&self, layout: &DashboardLayout) -> Result<(), StoreError> {
        let mut layouts = self.read_slot()?;
        layouts.push(layout.clone());
        self.write_slot(&layouts)?;
        tracing::debug!("appended layout {} to {}", layout.id, self.path.display());
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<DashboardLayout>, StoreError> {
        self.read_slot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_layout(id: &str) -> DashboardLayout {
        DashboardLayout::new(
            id.to_string(),
            format!("layout {id}"),
            String::new(),
            Vec::new(),
        )
    }

    // -- MemoryStore --------------------------------------------------------

    #[test]
    fn test_memory_store_starts_empty() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert!(store.load_all().expect("load_all").is_empty());
    }

    #[test]
    fn test_memory_store_appends_in_order() {
        let store = MemoryStore::new();
        store.append(&sample_layout("a")).expect("append a");
        store.append(&sample_layout("b")).expect("append b");
        let all = store.load_all().expect("load_all");
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, "a");
        assert_eq!(all[1].id, "b");
    }

    // -- JsonFileStore ------------------------------------------------------

    #[test]
    fn test_file_store_missing_slot_is_empty() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let store = JsonFileStore::new(dir.path().join("layouts.json"));
        assert!(store.load_all().expect("load_all").is_empty());
    }

    #[test]
    fn test_file_store_append_then_load_roundtrip() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let store = JsonFileStore::new(dir.path().join("layouts.json"));

        store.append(&sample_layout("first")).expect("append");
        store.append(&sample_layout("second")).expect("append");

        let all = store.load_all().expect("load_all");
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, "first");
        assert_eq!(all[1].id, "second");
        assert_eq!(all[0].name, "layout first");
    }

    #[test]
    fn test_file_store_creates_parent_directories() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let nested = dir.path().join("data").join("deep").join("layouts.json");
        let store = JsonFileStore::new(&nested);
        store.append(&sample_layout("one")).expect("append");
        assert!(nested.exists());
    }

    #[test]
    fn test_file_store_corrupt_slot_surfaces_error() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("layouts.json");
        std::fs::write(&path, "not json at all").expect("write corrupt slot");

        let store = JsonFileStore::new(&path);
        let err = store.load_all().expect_err("should fail");
        match err {
            StoreError::Corrupt { path: p, message } => {
                assert_eq!(p, path);
                assert!(!message.is_empty());
            }
            other => panic!("expected Corrupt, got: {other:?}"),
        }
    }

    #[test]
    fn test_file_store_append_does_not_clobber_corrupt_slot() {
        // A corrupt slot must fail the append rather than be overwritten.
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("layouts.json");
        std::fs::write(&path, "{broken").expect("write corrupt slot");

        let store = JsonFileStore::new(&path);
        assert!(store.append(&sample_layout("x")).is_err());
        let content = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(content, "{broken");
    }

    #[test]
    fn test_default_path_uses_namespace() {
        let path = JsonFileStore::default_path();
        let file = path.file_name().and_then(|n| n.to_str()).expect("file name");
        assert_eq!(file, "dashboard-layouts.json");
    }
}
