//! Cyclic window: fixed-size view stepping over an immutable sequence.

use crate::{WindowConfig, WindowProjector, WindowSnapshot};

/// Wrap-around sliding window over a sequence copied at construction.
///
/// The cursor marks the first element of the current window. Reads fold it into
/// the sequence bounds, so `right` and `left` walk the sequence indefinitely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CyclicWindow<T> {
    items: Vec<T>,
    window_size: usize,
    start_index: usize,
    cursor: usize,
}

impl<T: Clone> CyclicWindow<T> {
    /// Create a window over `sequence` with normalized options.
    #[must_use]
    pub fn new(sequence: impl IntoIterator<Item = T>, config: WindowConfig) -> Self {
        let items: Vec<T> = sequence.into_iter().collect();
        let window_size = config.normalized_window_size();
        let start_index = config.normalized_start_index();
        log::debug!(
            "cyclic window: len={} window_size={window_size} start_index={start_index}",
            items.len()
        );
        Self {
            items,
            window_size,
            start_index,
            cursor: start_index,
        }
    }

    /// Create a window over a copy of `sequence`.
    #[must_use]
    pub fn from_slice(sequence: &[T], config: WindowConfig) -> Self {
        Self::new(sequence.iter().cloned(), config)
    }

    /// Create a window with default options (size 3, start 0).
    #[must_use]
    pub fn with_defaults(sequence: impl IntoIterator<Item = T>) -> Self {
        Self::new(sequence, WindowConfig::default())
    }

    /// Elements of the window at the cursor. Does not move the cursor.
    #[must_use]
    pub fn current(&self) -> Vec<T> {
        WindowProjector::project(&self.items, self.window_size, self.cursor)
    }

    /// Step one position right, wrapping past the end, and return the new window.
    pub fn right(&mut self) -> Vec<T> {
        let len = self.items.len();
        if len == 0 {
            log::debug!("cyclic window: right on empty sequence skipped");
            return Vec::new();
        }
        self.cursor = (self.cursor % len + 1) % len;
        log::trace!("cyclic window: right -> cursor={}", self.cursor);
        self.current()
    }

    /// Step one position left, wrapping from 0 to the last element, and return the
    /// new window.
    pub fn left(&mut self) -> Vec<T> {
        let len = self.items.len();
        if len == 0 {
            log::debug!("cyclic window: left on empty sequence skipped");
            return Vec::new();
        }
        let from = if self.cursor == 0 { len } else { self.cursor };
        self.cursor = from - 1;
        log::trace!("cyclic window: left -> cursor={}", self.cursor);
        self.current()
    }

    /// Move the cursor back to the start index captured at construction.
    pub fn reset(&mut self) {
        self.cursor = self.start_index;
        log::trace!("cyclic window: reset -> cursor={}", self.cursor);
    }

    /// Fresh copy of the source sequence.
    #[must_use]
    pub fn array(&self) -> Vec<T> {
        self.items.clone()
    }

    /// Snapshot of the window state and current contents.
    pub fn snapshot(&self) -> WindowSnapshot<T> {
        WindowSnapshot {
            window_size: self.window_size,
            start_index: self.start_index,
            cursor: self.cursor,
            position: self.position(),
            len: self.items.len(),
            contents: self.current(),
        }
    }
}

impl<T> CyclicWindow<T> {
    /// Source sequence length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the source sequence is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Effective window size.
    #[must_use]
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Effective start index.
    #[must_use]
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Raw cursor. May exceed `len()` until the first `right` after construction
    /// with a large start index.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Cursor folded into `[0, len)`; `None` for an empty sequence.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        self.cursor.checked_rem(self.items.len())
    }

    /// Borrowed view of the source sequence.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Source indices the current window reads, in window order.
    pub fn current_indices(&self) -> impl Iterator<Item = usize> + use<T> {
        WindowProjector::indices(self.items.len(), self.window_size, self.cursor)
    }
}
