//! Cell formatting and row emphasis rules.
//!
//! Presentation is derived from column semantics, not the raw value alone:
//! a `progress` column renders `"62%"`, a `budget` column renders
//! `"$1,200,000"`, and status/severity columns render labeled badges with
//! a tone from a fixed per-category lookup. Unknown category values get a
//! neutral badge rather than failing; missing values render a placeholder
//! dash.

use std::fmt;

use dashboard_model::Record;
use serde_json::Value;

use super::columns::ColumnSpec;

/// Placeholder rendered for null or missing values.
pub const NULL_PLACEHOLDER: &str = "\u{2014}";

/// What a column's values mean, inferred from its field key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSemantics {
    /// Completion or progress quantity, rendered with a `%` suffix.
    Percentage,
    /// Monetary quantity, rendered with a currency prefix and grouping.
    Currency,
    /// Categorical workflow status, rendered as a badge.
    Status,
    /// Categorical severity or priority, rendered as a badge.
    Severity,
    /// Anything else, rendered as its plain string form.
    Plain,
}

impl ColumnSemantics {
    /// Infers the semantics of a column from its resolved field key.
    pub fn of(column: &ColumnSpec) -> Self {
        let key = column.field_key.as_str();
        if key == "status" {
            return ColumnSemantics::Status;
        }
        if key == "severity" || key == "priority" {
            return ColumnSemantics::Severity;
        }
        if key.contains("percent") || key.contains("progress") || key.contains("completion") {
            return ColumnSemantics::Percentage;
        }
        if key.contains("budget")
            || key.contains("cost")
            || key.contains("revenue")
            || key.contains("amount")
            || key.contains("price")
            || key.contains("salary")
        {
            return ColumnSemantics::Currency;
        }
        ColumnSemantics::Plain
    }
}

/// Visual tone of a badge cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    /// Completed / healthy.
    Success,
    /// Active / in flight.
    Info,
    /// Needs attention soon.
    Warning,
    /// Urgent or failing.
    Danger,
    /// Backlog / not started.
    Muted,
    /// Unmapped category value.
    Neutral,
}

/// A formatted table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellDisplay {
    /// Plain text content.
    Text(String),
    /// A labeled badge with a visual tone.
    Badge {
        /// Badge text, the value's string form.
        label: String,
        /// Visual emphasis from the category lookup.
        tone: BadgeTone,
    },
}

impl fmt::Display for CellDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellDisplay::Text(text) => write!(f, "{}", text),
            CellDisplay::Badge { label, .. } => write!(f, "{}", label),
        }
    }
}

/// Row-level emphasis derived from status/severity values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowEmphasis {
    /// Top severity tier or most urgent status.
    High,
    /// Next tier down.
    Medium,
    /// No special treatment.
    None,
}

/// Formats one cell given its column and the record's value at the
/// column's field key.
pub fn format_cell(column: &ColumnSpec, value: Option<&Value>) -> CellDisplay {
    let value = match value {
        None | Some(Value::Null) => return CellDisplay::Text(NULL_PLACEHOLDER.to_string()),
        Some(v) => v,
    };
    match ColumnSemantics::of(column) {
        ColumnSemantics::Percentage => CellDisplay::Text(format!("{}%", scalar_text(value))),
        ColumnSemantics::Currency => match value.as_f64() {
            Some(_) => CellDisplay::Text(format!("${}", group_thousands(&scalar_text(value)))),
            None => CellDisplay::Text(scalar_text(value)),
        },
        ColumnSemantics::Status => CellDisplay::Badge {
            label: scalar_text(value),
            tone: status_tone(&scalar_text(value)),
        },
        ColumnSemantics::Severity => CellDisplay::Badge {
            label: scalar_text(value),
            tone: severity_tone(&scalar_text(value)),
        },
        ColumnSemantics::Plain => CellDisplay::Text(scalar_text(value)),
    }
}

/// Evaluates row emphasis from the record's severity and status fields.
///
/// High when severity is `high` or status is `delayed`; medium when
/// severity is `medium` or status is `waiting`. Case-insensitive, and
/// independent of filter/sort/page state.
pub fn row_emphasis(record: &Record) -> RowEmphasis {
    let severity = category_value(record, &["severity", "priority"]);
    let status = category_value(record, &["status"]);

    if severity.as_deref() == Some("high") || status.as_deref() == Some("delayed") {
        return RowEmphasis::High;
    }
    if severity.as_deref() == Some("medium") || status.as_deref() == Some("waiting") {
        return RowEmphasis::Medium;
    }
    RowEmphasis::None
}

/// Fixed lookup for status badge tones.
fn status_tone(value: &str) -> BadgeTone {
    match value.to_lowercase().as_str() {
        "done" => BadgeTone::Success,
        "in progress" => BadgeTone::Info,
        "planned" => BadgeTone::Muted,
        "waiting" => BadgeTone::Warning,
        "delayed" => BadgeTone::Danger,
        _ => BadgeTone::Neutral,
    }
}

/// Fixed lookup for severity badge tones.
fn severity_tone(value: &str) -> BadgeTone {
    match value.to_lowercase().as_str() {
        "high" => BadgeTone::Danger,
        "medium" => BadgeTone::Warning,
        "low" => BadgeTone::Success,
        _ => BadgeTone::Neutral,
    }
}

fn category_value(record: &Record, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| record.get(*key))
        .and_then(Value::as_str)
        .map(|s| s.to_lowercase())
}

/// Plain string form of a scalar value.
pub(super) fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Groups the integer digits of a numeric string with commas.
fn group_thousands(number: &str) -> String {
    let (sign, rest) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rest, None),
    };

    let mut grouped = String::new();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}
