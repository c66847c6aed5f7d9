//! Error types for the cookiecutter CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! Child processes that exit non-zero are not errors; the launcher logs them
//! and moves on.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for cookiecutter operations.
#[derive(Error, Debug)]
pub enum CutterError {
    /// User provided invalid arguments, config, or unreadable files.
    #[error("{0}")]
    UserError(String),

    /// The input file lists are inconsistent (e.g. unequal paired-end counts).
    #[error("invalid input configuration: {0}")]
    ConfigurationError(String),

    /// One or more tool executables are missing or not executable.
    #[error("missing Cookiecutter binaries, please run make ({0})")]
    MissingBinaries(String),

    /// The launcher could not poll one of its child processes.
    #[error("launch failed: {0}")]
    LaunchError(String),
}

impl CutterError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            CutterError::UserError(_) => exit_codes::USER_ERROR,
            CutterError::ConfigurationError(_) => exit_codes::CONFIGURATION_ERROR,
            CutterError::MissingBinaries(_) => exit_codes::USER_ERROR,
            CutterError::LaunchError(_) => exit_codes::LAUNCH_FAILURE,
        }
    }
}

/// Result type alias for cookiecutter operations.
pub type Result<T> = std::result::Result<T, CutterError>;
