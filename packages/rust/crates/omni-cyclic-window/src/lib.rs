//! omni-cyclic-window: wrap-around sliding window over a fixed sequence.
//!
//! A [`CyclicWindow`] copies its input once, then steps a fixed-size view left or
//! right forever, wrapping at both ends. Reads are materialized by the stateless
//! [`WindowProjector`]. Python can use this via `PyO3` when feature "pybindings"
//! is enabled.
//!
//! # Example
//!
//! ```rust
//! use omni_cyclic_window::{CyclicWindow, WindowConfig};
//!
//! let mut window = CyclicWindow::new(vec![1, 2, 3, 4], WindowConfig::default());
//! assert_eq!(window.current(), vec![1, 2, 3]);
//! assert_eq!(window.right(), vec![2, 3, 4]);
//! assert_eq!(window.right(), vec![3, 4, 1]);
//! window.reset();
//! assert_eq!(window.left(), vec![4, 1, 2]);
//! ```

mod config;
mod error;
mod projector;
mod snapshot;
mod window;

pub use config::{DEFAULT_START_INDEX, DEFAULT_WINDOW_SIZE, WindowConfig};
pub use error::WindowError;
pub use projector::WindowProjector;
pub use snapshot::WindowSnapshot;
pub use window::CyclicWindow;

#[cfg(feature = "pybindings")]
mod pymodule_impl;

#[cfg(feature = "pybindings")]
pub use pymodule_impl::PyCyclicWindow;
