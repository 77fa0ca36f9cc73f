//! Saved dashboard arrangements.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::widget::Widget;

/// A named, timestamped snapshot of all widgets on the canvas.
///
/// The layout exclusively owns copies of the widgets captured at save time;
/// later edits to the live canvas never mutate a stored layout. Saving
/// again produces a new record with a new id rather than updating an
/// existing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardLayout {
    /// Unique identifier assigned at save time.
    pub id: String,
    /// User-supplied name.
    pub name: String,
    /// User-supplied description.
    pub description: String,
    /// Ordered snapshot of all widgets at save time.
    pub widgets: Vec<Widget>,
    /// When this record was first saved.
    pub created_at: DateTime<Utc>,
    /// When this record was last written. Equal to `created_at` in
    /// practice, since every save creates a fresh record.
    pub updated_at: DateTime<Utc>,
}

impl DashboardLayout {
    /// Creates a layout snapshot with both timestamps set to now.
    pub fn new(id: String, name: String, description: String, widgets: Vec<Widget>) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            description,
            widgets,
            created_at: now,
            updated_at: now,
        }
    }
}
