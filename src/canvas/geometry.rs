//! Pure geometry helpers for the canvas: grid snapping, boundary clamping,
//! and validation of numeric input from text fields.
//!
//! These functions are independent of the drag state machine so the math
//! can be tested in isolation.

use thiserror::Error;

/// Snaps a coordinate to the nearest multiple of the grid unit.
///
/// Round-to-nearest, not floor: a value exactly between two grid lines
/// moves away from zero. A non-positive grid unit disables snapping and
/// returns the value unchanged.
pub fn snap_to_grid(value: f64, grid_unit: f64) -> f64 {
    if grid_unit <= 0.0 {
        return value;
    }
    (value / grid_unit).round() * grid_unit
}

/// Clamps a coordinate so a widget's extent stays inside the canvas.
///
/// `max` is `canvas_extent - widget_extent` for the axis. When the widget
/// is larger than the canvas the range collapses (`max <= 0`) and the only
/// legal position is the origin.
pub fn clamp_axis(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    value.max(0.0).min(max)
}

/// Rejected numeric edit from a text field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// The text did not parse as a finite number.
    #[error("not a number: {0:?}")]
    NotANumber(String),

    /// Coordinates cannot be negative.
    #[error("coordinate must be zero or positive: {0}")]
    NegativeCoordinate(f64),

    /// Widget dimensions must be strictly positive.
    #[error("dimension must be positive: {0}")]
    NonPositiveDimension(f64),
}

/// Parses a position coordinate from user text.
///
/// Rejects anything that is not a finite, non-negative number. `NaN`
/// notably parses as a float but is rejected here so it can never be
/// stored into a widget.
pub fn parse_coordinate(text: &str) -> Result<f64, InputError> {
    let value = parse_finite(text)?;
    if value < 0.0 {
        return Err(InputError::NegativeCoordinate(value));
    }
    Ok(value)
}

/// Parses a width or height from user text.
///
/// Rejects anything that is not a finite, strictly positive number.
pub fn parse_dimension(text: &str) -> Result<f64, InputError> {
    let value = parse_finite(text)?;
    if value <= 0.0 {
        return Err(InputError::NonPositiveDimension(value));
    }
    Ok(value)
}

fn parse_finite(text: &str) -> Result<f64, InputError> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InputError::NotANumber(trimmed.to_string())),
    }
}
