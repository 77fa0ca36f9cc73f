//! Column label to record-field mapping.
//!
//! Column labels are human-readable display strings; record lookup needs a
//! field key. The two are kept as explicit, separate fields on
//! [`ColumnSpec`], populated from the configured override table with a
//! deterministic fallback derivation. The same mapping is used for
//! sorting, cell lookup, and formatting, so a label can never resolve to
//! different keys in different parts of the pipeline.

use std::collections::HashMap;

/// Derives a record field key from a column label.
///
/// Lowercases the label and replaces every whitespace run with a single
/// underscore. Total: every label (including the empty one) resolves to
/// some key.
pub fn derive_field_key(label: &str) -> String {
    label
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// A table column: display label plus the record field it reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Header text shown to the user.
    pub label: String,
    /// Record field the column reads, sorts, and formats.
    pub field_key: String,
}

impl ColumnSpec {
    /// Resolves a label against the override table, falling back to
    /// [`derive_field_key`].
    pub fn resolve(label: &str, overrides: &HashMap<String, String>) -> Self {
        let field_key = overrides
            .get(label)
            .cloned()
            .unwrap_or_else(|| derive_field_key(label));
        Self {
            label: label.to_string(),
            field_key,
        }
    }
}

/// Resolves an ordered label list into column specs.
pub fn resolve_columns(labels: &[String], overrides: &HashMap<String, String>) -> Vec<ColumnSpec> {
    labels
        .iter()
        .map(|label| ColumnSpec::resolve(label, overrides))
        .collect()
}
