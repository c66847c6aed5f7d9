//! The four Cookiecutter filtering tools.
//!
//! Each tool is a fixed argument template (`-f <fragments> -o <output>`, plus the
//! read filters for `rm_reads`) bound to one external executable. All execution
//! is delegated to a [`Launcher`].

use crate::config::Config;
use crate::error::{CutterError, Result};
use crate::launch::{ArgValue, ArgumentSet, InputUnit, Launcher};
use std::path::{Path, PathBuf};

/// An external Cookiecutter executable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    /// Keeps only reads matching the k-mer list.
    Extractor,
    /// Drops reads matching the k-mer list.
    Remove,
    /// `remove` with additional read quality filters.
    RmReads,
    /// Writes matching and non-matching reads to separate files.
    Separate,
}

impl Tool {
    pub const ALL: [Tool; 4] = [Tool::Extractor, Tool::Remove, Tool::RmReads, Tool::Separate];

    /// Executable file name used when the config does not override it.
    pub fn default_program(self) -> &'static str {
        match self {
            Tool::Extractor => "extractor",
            Tool::Remove => "remove",
            Tool::RmReads => "rm_reads",
            Tool::Separate => "separate",
        }
    }
}

/// Read filters understood by `rm_reads`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOptions {
    /// PolyG/polyC track length cutoff.
    pub polygc: u32,
    /// Read length cutoff.
    pub length: u32,
    /// Apply the DUST low-complexity filter.
    pub dust: bool,
    /// DUST window size.
    pub dust_k: u32,
    /// DUST score cutoff.
    pub dust_cutoff: u32,
    /// Drop reads containing unknown bases.
    pub filter_n: bool,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            polygc: 13,
            length: 50,
            dust: false,
            dust_k: 4,
            dust_cutoff: 2,
            filter_n: false,
        }
    }
}

/// One invocation of a tool over a set of input units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolRun {
    pub tool: Tool,
    /// File of fragment k-mers.
    pub fragments: PathBuf,
    /// Output directory.
    pub output: PathBuf,
    /// Number of parallel jobs.
    pub threads: usize,
    /// Only meaningful for [`Tool::RmReads`].
    pub filters: Option<FilterOptions>,
}

impl ToolRun {
    pub fn new(
        tool: Tool,
        fragments: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        threads: usize,
    ) -> Self {
        Self {
            tool,
            fragments: fragments.into(),
            output: output.into(),
            threads,
            filters: None,
        }
    }

    pub fn with_filters(mut self, filters: FilterOptions) -> Self {
        self.filters = Some(filters);
        self
    }

    /// Arguments shared by every job of this run.
    pub fn argument_set(&self) -> ArgumentSet {
        let mut args = ArgumentSet::new()
            .with("-f", ArgValue::path(&self.fragments))
            .with("-o", ArgValue::path(&self.output));

        if self.tool == Tool::RmReads {
            let filters = self.filters.unwrap_or_default();
            args.set("-p", ArgValue::value(filters.polygc))
                .set("-l", ArgValue::value(filters.length))
                .set("-d", ArgValue::Switch(filters.dust))
                .set("-k", ArgValue::value(filters.dust_k))
                .set("-c", ArgValue::value(filters.dust_cutoff))
                .set("-N", ArgValue::Switch(filters.filter_n));
        }

        args
    }

    /// Build the launcher for this run.
    pub fn launcher(&self, units: &[InputUnit], config: &Config) -> Result<Launcher> {
        let program = config.program_path(self.tool);
        let args = self.argument_set();
        Ok(Launcher::new(&program, units, Some(&args), self.threads)?
            .with_poll_interval(config.poll_interval()))
    }
}

/// Assemble input units from `-i` files or from the `-1`/`-2` lists.
///
/// Paired lists are zipped position by position and must have equal lengths.
pub fn collect_units(
    input: &[PathBuf],
    fastq1: &[PathBuf],
    fastq2: &[PathBuf],
) -> Result<Vec<InputUnit>> {
    if !input.is_empty() {
        return Ok(input.iter().cloned().map(InputUnit::Single).collect());
    }

    if fastq1.len() != fastq2.len() {
        return Err(CutterError::ConfigurationError(format!(
            "different paired FASTQ file numbers ({} first, {} second)",
            fastq1.len(),
            fastq2.len()
        )));
    }

    Ok(fastq1
        .iter()
        .zip(fastq2)
        .map(|(first, second)| InputUnit::Paired(first.clone(), second.clone()))
        .collect())
}

/// Check that every tool executable exists in `config.bin_dir` and is executable.
pub fn verify_binaries(config: &Config) -> Result<()> {
    let missing: Vec<String> = Tool::ALL
        .iter()
        .map(|&tool| config.program_path(tool))
        .filter(|path| !is_executable(path))
        .map(|path| path.display().to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(CutterError::MissingBinaries(missing.join(", ")))
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
