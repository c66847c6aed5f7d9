//! Configuration model for cookiecutter.
//!
//! This module defines the Config struct read from the optional `--config`
//! YAML file. It supports forward-compatible YAML parsing (unknown fields are
//! ignored), sensible defaults for every field, and validation of values.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use types::ProgramNames;
