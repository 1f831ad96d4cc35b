//! Python bindings for omni-cyclic-window.

use pyo3::prelude::*;

use crate::{CyclicWindow, WindowConfig};

/// Python-exposed cyclic window over a list of arbitrary objects.
///
/// The Rust window walks element positions; objects are shared with `clone_ref`.
#[pyclass]
pub struct PyCyclicWindow {
    items: Vec<Py<PyAny>>,
    positions: CyclicWindow<usize>,
}

impl PyCyclicWindow {
    fn materialize(&self, py: Python<'_>, positions: &[usize]) -> Vec<Py<PyAny>> {
        positions
            .iter()
            .map(|&idx| self.items[idx].clone_ref(py))
            .collect()
    }
}

#[pymethods]
impl PyCyclicWindow {
    #[new]
    #[pyo3(signature = (items, window_size=None, start_index=None))]
    fn new(items: Vec<Py<PyAny>>, window_size: Option<i64>, start_index: Option<i64>) -> Self {
        let config = WindowConfig {
            window_size,
            start_index,
        };
        Self {
            positions: CyclicWindow::new(0..items.len(), config),
            items,
        }
    }

    fn current(&self, py: Python<'_>) -> Vec<Py<PyAny>> {
        self.materialize(py, &self.positions.current())
    }

    fn right(&mut self, py: Python<'_>) -> Vec<Py<PyAny>> {
        let positions = self.positions.right();
        self.materialize(py, &positions)
    }

    fn left(&mut self, py: Python<'_>) -> Vec<Py<PyAny>> {
        let positions = self.positions.left();
        self.materialize(py, &positions)
    }

    fn reset(&mut self) {
        self.positions.reset();
    }

    fn array(&self, py: Python<'_>) -> Vec<Py<PyAny>> {
        self.items.iter().map(|item| item.clone_ref(py)).collect()
    }

    fn __len__(&self) -> usize {
        self.items.len()
    }

    #[getter]
    fn window_size(&self) -> usize {
        self.positions.window_size()
    }

    #[getter]
    fn start_index(&self) -> usize {
        self.positions.start_index()
    }

    #[getter]
    fn cursor(&self) -> usize {
        self.positions.cursor()
    }
}
