//! Stateless window materialization.

/// Maps (sequence, window size, start) to a window with wrap-around indexing.
///
/// Holds no state; every call allocates an independent result.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowProjector;

impl WindowProjector {
    /// Source indices read by a window of `window_size` elements starting at `start`.
    ///
    /// Yields `start mod len, (start + 1) mod len, ..` for `window_size` steps, or
    /// nothing at all when `len == 0`.
    pub fn indices(len: usize, window_size: usize, start: usize) -> impl Iterator<Item = usize> {
        let (count, offset) = if len == 0 {
            (0, 0)
        } else {
            (window_size, start % len)
        };
        (0..count).map(move |step| (offset + step % len) % len)
    }

    /// Materialize `window_size` elements of `sequence` starting at `start`.
    ///
    /// An empty `sequence` always yields an empty window, whatever the size. A size
    /// larger than the sequence repeats it in order as many times as needed.
    #[must_use]
    pub fn project<T: Clone>(sequence: &[T], window_size: usize, start: usize) -> Vec<T> {
        Self::indices(sequence.len(), window_size, start)
            .map(|idx| sequence[idx].clone())
            .collect()
    }

    /// [`WindowProjector::project`] for a signed start; negative starts count back
    /// from the end of the sequence.
    #[must_use]
    pub fn project_signed<T: Clone>(sequence: &[T], window_size: usize, start: i64) -> Vec<T> {
        let len = sequence.len() as u64;
        if len == 0 {
            return Vec::new();
        }
        let rem = start.unsigned_abs() % len;
        let offset = if start < 0 { (len - rem) % len } else { rem };
        // offset < len, so it always fits back into usize.
        Self::project(sequence, window_size, usize::try_from(offset).unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::WindowProjector;

    #[test]
    fn indices_wrap_from_offset() {
        let idx: Vec<usize> = WindowProjector::indices(4, 6, 2).collect();
        assert_eq!(idx, vec![2, 3, 0, 1, 2, 3]);
    }

    #[test]
    fn indices_empty_when_len_zero() {
        assert_eq!(WindowProjector::indices(0, 5, 3).count(), 0);
    }

    #[test]
    fn indices_fold_start_past_len() {
        let idx: Vec<usize> = WindowProjector::indices(3, 2, 10).collect();
        assert_eq!(idx, vec![1, 2]);
    }
}
