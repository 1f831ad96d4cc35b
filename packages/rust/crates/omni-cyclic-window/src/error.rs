//! Error types for window option parsing.
//!
//! Follows ODF-REP: Library crates use `thiserror` for explicit error enums.

use thiserror::Error;

/// Errors raised while reading window options.
///
/// Window operations themselves never fail; only the loose JSON entry point does.
#[derive(Error, Debug)]
pub enum WindowError {
    /// Options payload is not valid JSON.
    #[error("Invalid window options JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Options payload is valid JSON but not an object.
    #[error("Window options must be a JSON object or null, got {0}")]
    InvalidOptions(String),
}
