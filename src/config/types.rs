//! Configuration types and defaults for cookiecutter.
//!
//! This module defines the per-tool program names and the default value
//! functions used by the Config struct.

use crate::toolset::Tool;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File names of the four tool executables inside `bin_dir`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgramNames {
    pub extractor: String,
    pub remove: String,
    pub rm_reads: String,
    pub separate: String,
}

impl Default for ProgramNames {
    fn default() -> Self {
        Self {
            extractor: Tool::Extractor.default_program().to_string(),
            remove: Tool::Remove.default_program().to_string(),
            rm_reads: Tool::RmReads.default_program().to_string(),
            separate: Tool::Separate.default_program().to_string(),
        }
    }
}

impl ProgramNames {
    /// Program file name configured for `tool`.
    pub fn get(&self, tool: Tool) -> &str {
        match tool {
            Tool::Extractor => &self.extractor,
            Tool::Remove => &self.remove,
            Tool::RmReads => &self.rm_reads,
            Tool::Separate => &self.separate,
        }
    }
}

// Default value functions for serde
pub(crate) fn default_bin_dir() -> PathBuf {
    PathBuf::from(".")
}
pub(crate) fn default_poll_interval_ms() -> u64 {
    100
}
