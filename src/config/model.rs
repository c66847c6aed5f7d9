//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for a cookiecutter run.
///
/// This struct represents the optional YAML file passed with `--config`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the tool executables (default: the working directory).
    #[serde(default = "default_bin_dir")]
    pub bin_dir: PathBuf,

    /// File names of the tool executables inside `bin_dir`.
    #[serde(default)]
    pub programs: ProgramNames,

    /// Milliseconds the launcher sleeps between poll passes that reap nothing.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Wait for every launched job to exit before returning.
    ///
    /// Off by default: the launcher returns as soon as the last job is started.
    #[serde(default)]
    pub wait_for_jobs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bin_dir: default_bin_dir(),
            programs: ProgramNames::default(),
            poll_interval_ms: default_poll_interval_ms(),
            wait_for_jobs: false,
        }
    }
}
