//! Filesystem utilities for cookiecutter.
//!
//! Output tables are written atomically so an interrupted run never leaves a
//! truncated file behind under the requested name.

pub mod atomic;

pub use atomic::atomic_write_with;
