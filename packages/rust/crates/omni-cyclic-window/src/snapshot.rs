//! Serializable view of a window's state.

use serde::{Deserialize, Serialize};

/// Point-in-time view of a [`crate::CyclicWindow`] for logs and UI.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct WindowSnapshot<T> {
    /// Effective window size.
    pub window_size: usize,
    /// Effective start index restored by `reset`.
    pub start_index: usize,
    /// Raw cursor value.
    pub cursor: usize,
    /// Cursor folded into the sequence bounds; `None` for an empty sequence.
    pub position: Option<usize>,
    /// Source sequence length.
    pub len: usize,
    /// Elements of the current window.
    pub contents: Vec<T>,
}
