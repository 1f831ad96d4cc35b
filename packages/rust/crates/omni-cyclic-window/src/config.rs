//! Window options and their normalization.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::WindowError;

/// Window size used when the option is absent or zero.
pub const DEFAULT_WINDOW_SIZE: usize = 3;

/// Start index used when the option is absent.
pub const DEFAULT_START_INDEX: usize = 0;

/// Requested window options, as supplied by the caller.
///
/// Values are kept raw; use [`WindowConfig::normalized_window_size`] and
/// [`WindowConfig::normalized_start_index`] to read the effective settings.
/// Negative values are taken by magnitude and zero falls back to the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WindowConfig {
    /// Requested number of elements per window.
    pub window_size: Option<i64>,
    /// Requested cursor position at construction and after reset.
    pub start_index: Option<i64>,
}

impl WindowConfig {
    /// Empty options: default window size and start index.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            window_size: None,
            start_index: None,
        }
    }

    /// Set the requested window size.
    #[must_use]
    pub const fn with_window_size(mut self, window_size: i64) -> Self {
        self.window_size = Some(window_size);
        self
    }

    /// Set the requested start index.
    #[must_use]
    pub const fn with_start_index(mut self, start_index: i64) -> Self {
        self.start_index = Some(start_index);
        self
    }

    /// Effective window size: `|window_size|`, or 3 when absent or zero.
    #[must_use]
    pub fn normalized_window_size(&self) -> usize {
        normalize(self.window_size, DEFAULT_WINDOW_SIZE)
    }

    /// Effective start index: `|start_index|`, or 0 when absent.
    #[must_use]
    pub fn normalized_start_index(&self) -> usize {
        normalize(self.start_index, DEFAULT_START_INDEX)
    }

    /// Parse a loosely typed JSON options object.
    ///
    /// Accepts `{"windowSize": .., "startIndex": ..}` where each value may be an
    /// integer, a float, a numeric string or a boolean. Values that cannot be read
    /// as a number are treated as absent; unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::InvalidJson`] for malformed JSON and
    /// [`WindowError::InvalidOptions`] when the payload is not an object or `null`.
    pub fn from_json(raw: &str) -> Result<Self, WindowError> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_json_value(&value)
    }

    /// Same as [`WindowConfig::from_json`] for an already parsed value.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::InvalidOptions`] when `value` is not an object or `null`.
    pub fn from_json_value(value: &Value) -> Result<Self, WindowError> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(options) => Ok(Self {
                window_size: options
                    .get("windowSize")
                    .and_then(|v| coerce_option(v, Rounding::Up)),
                start_index: options
                    .get("startIndex")
                    .and_then(|v| coerce_option(v, Rounding::Down)),
            }),
            other => Err(WindowError::InvalidOptions(json_kind(other).to_string())),
        }
    }
}

fn normalize(value: Option<i64>, default: usize) -> usize {
    match value.map(i64::unsigned_abs) {
        None | Some(0) => default,
        Some(magnitude) => usize::try_from(magnitude).unwrap_or(usize::MAX),
    }
}

/// How a fractional option is brought to an integer.
#[derive(Debug, Clone, Copy)]
enum Rounding {
    /// A fractional window size still yields a trailing element.
    Up,
    /// A fractional start index points at the element it falls within.
    Down,
}

fn coerce_option(value: &Value, rounding: Rounding) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|u| i64::try_from(u).unwrap_or(i64::MAX)))
            .or_else(|| n.as_f64().and_then(|f| coerce_float(f, rounding))),
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed.parse::<i64>().ok().or_else(|| {
                trimmed
                    .parse::<f64>()
                    .ok()
                    .and_then(|f| coerce_float(f, rounding))
            })
        }
        Value::Bool(true) => Some(1),
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn coerce_float(value: f64, rounding: Rounding) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }
    let magnitude = match rounding {
        Rounding::Up => value.abs().ceil(),
        Rounding::Down => value.abs().trunc(),
    };
    if magnitude >= i64::MAX as f64 {
        Some(i64::MAX)
    } else {
        Some(magnitude as i64)
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
