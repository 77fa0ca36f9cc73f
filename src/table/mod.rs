//! Tabular data engine: the filter → sort → paginate → format pipeline
//! behind the table widget.
//!
//! The engine is stateless with respect to the host: the host owns the
//! current search term, sort key/direction, and page index in a
//! [`TableState`] and passes it to [`TableEngine::render`] on every
//! change. The pipeline stages always run in the same fixed order, and
//! out-of-range state (a page index past the end after a filter shrank the
//! set) is clamped at render time, never an error.

pub mod columns;
pub mod format;

use std::cmp::Ordering;

use dashboard_model::{Record, TableConfig, DEFAULT_PAGE_SIZE};
use serde_json::Value;

use columns::{resolve_columns, ColumnSpec};
use format::{format_cell, row_emphasis, CellDisplay, RowEmphasis};

/// Sort direction for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// Returns the opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// An active sort: which field, which direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    /// Resolved record field key being sorted on.
    pub field_key: String,
    /// Current direction.
    pub direction: SortDirection,
}

/// Host-owned view state: search term, active sort, page index.
#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
    /// Current search term; empty means no filtering.
    pub search: String,
    /// Active sort, if any column header has been clicked.
    pub sort: Option<SortSpec>,
    /// One-based page index. Clamped at render time.
    pub page: usize,
}

impl TableState {
    /// Fresh state: no search, no sort, first page.
    pub fn new() -> Self {
        Self {
            search: String::new(),
            sort: None,
            page: 1,
        }
    }

    /// Replaces the search term.
    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_string();
    }

    /// Moves to the given one-based page. Render clamps it into range.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Applies a header click on the column with the given field key.
    ///
    /// Clicking the active sort column flips the direction; clicking a
    /// different column resets to ascending.
    pub fn toggle_sort(&mut self, field_key: &str) {
        match &mut self.sort {
            Some(spec) if spec.field_key == field_key => {
                spec.direction = spec.direction.toggled();
            }
            _ => {
                self.sort = Some(SortSpec {
                    field_key: field_key.to_string(),
                    direction: SortDirection::Ascending,
                });
            }
        }
    }
}

impl Default for TableState {
    fn default() -> Self {
        Self::new()
    }
}

/// One rendered row: formatted cells plus row-level emphasis.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// Cells in column order.
    pub cells: Vec<CellDisplay>,
    /// Emphasis from the record's status/severity values.
    pub emphasis: RowEmphasis,
}

/// One rendered page of the pipeline output.
#[derive(Debug, Clone, PartialEq)]
pub struct TablePage {
    /// The visible slice of rows, formatted.
    pub rows: Vec<TableRow>,
    /// Effective one-based page index after clamping.
    pub page: usize,
    /// Total page count for the filtered set (at least 1).
    pub page_count: usize,
    /// Size of the filtered (pre-pagination) set.
    pub total_rows: usize,
}

/// The table widget's transformation engine.
///
/// Built once from a widget's [`TableConfig`]; `render` applies the
/// pipeline to a dataset for the current [`TableState`].
#[derive(Debug, Clone)]
pub struct TableEngine {
    columns: Vec<ColumnSpec>,
    sortable: bool,
    paginated: bool,
    highlighted: bool,
    searchable: bool,
    page_size: usize,
}

impl TableEngine {
    /// Builds an engine from a table widget configuration.
    ///
    /// Column labels resolve to field keys through the configured override
    /// table with the derived-key fallback. A zero page size falls back to
    /// the default.
    pub fn new(config: &TableConfig) -> Self {
        let page_size = if config.page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            config.page_size
        };
        Self {
            columns: resolve_columns(&config.columns, &config.column_fields),
            sortable: config.sortable,
            paginated: config.paginated,
            highlighted: config.highlighted,
            searchable: config.searchable,
            page_size,
        }
    }

    /// Returns the resolved column specs in display order.
    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// Records per page when pagination is on.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Applies filter, sort, pagination, and formatting in that fixed
    /// order and returns the visible page.
    pub fn render(&self, data: &[Record], state: &TableState) -> TablePage {
        let mut rows: Vec<&Record> = data.iter().collect();

        if self.searchable {
            let term = state.search.trim().to_lowercase();
            if !term.is_empty() {
                rows.retain(|record| record_matches(record, &term));
            }
        }

        if self.sortable {
            if let Some(spec) = &state.sort {
                // Stable sort: equal keys keep their relative order.
                rows.sort_by(|a, b| {
                    let ord = compare_values(a.get(&spec.field_key), b.get(&spec.field_key));
                    match spec.direction {
                        SortDirection::Ascending => ord,
                        SortDirection::Descending => ord.reverse(),
                    }
                });
            }
        }

        let total_rows = rows.len();
        let (page, page_count, visible) = if self.paginated {
            let page_count = total_rows.div_ceil(self.page_size).max(1);
            let page = state.page.clamp(1, page_count);
            let start = (page - 1) * self.page_size;
            let visible: Vec<&Record> =
                rows.into_iter().skip(start).take(self.page_size).collect();
            (page, page_count, visible)
        } else {
            (1, 1, rows)
        };

        let rows = visible
            .into_iter()
            .map(|record| TableRow {
                cells: self
                    .columns
                    .iter()
                    .map(|column| format_cell(column, record.get(&column.field_key)))
                    .collect(),
                emphasis: if self.highlighted {
                    row_emphasis(record)
                } else {
                    RowEmphasis::None
                },
            })
            .collect();

        TablePage {
            rows,
            page,
            page_count,
            total_rows,
        }
    }
}

/// Case-insensitive substring match against every field's string form.
///
/// `term` must already be lowercased.
fn record_matches(record: &Record, term: &str) -> bool {
    record
        .values()
        .any(|value| value_text(value).to_lowercase().contains(term))
}

/// String form of a record value, as used for filtering.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Natural ordering over record values.
///
/// Numbers compare numerically, strings lexically; null and missing sort
/// first; mixed types fall back to their string forms.
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let (a, b) = match (normalize(a), normalize(b)) {
        (None, None) => return Ordering::Equal,
        (None, Some(_)) => return Ordering::Less,
        (Some(_), None) => return Ordering::Greater,
        (Some(a), Some(b)) => (a, b),
    };
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => match (a, b) {
            (Value::String(x), Value::String(y)) => x.cmp(y),
            (x, y) => value_text(x).cmp(&value_text(y)),
        },
    }
}

fn normalize(value: Option<&Value>) -> Option<&Value> {
    match value {
        Some(Value::Null) | None => None,
        Some(v) => Some(v),
    }
}
