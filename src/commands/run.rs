//! Implementation of the four tool commands.
//!
//! Input files are grouped into units, one command line is built per unit,
//! and the launcher either prints them (`--echo`) or runs them in parallel.

use crate::cli::ToolArgs;
use crate::config::Config;
use crate::error::Result;
use crate::toolset::{FilterOptions, Tool, ToolRun, collect_units};
use log::info;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Mode {
    /// Print the command lines only.
    Echo,
    /// Spawn the command lines.
    Launch,
}

pub(super) fn cmd_tool<W: Write>(
    tool: Tool,
    args: ToolArgs,
    filters: Option<FilterOptions>,
    mode: Mode,
    config: &Config,
    out: &mut W,
) -> Result<()> {
    let units = collect_units(&args.input, &args.fastq1, &args.fastq2)?;

    let mut run = ToolRun::new(tool, args.fragments, args.output, args.threads);
    if let Some(filters) = filters {
        run = run.with_filters(filters);
    }

    let mut launcher = run.launcher(&units, config)?;

    if mode == Mode::Echo {
        return launcher.print_commands(out);
    }

    let stats = launcher.launch()?;
    info!(
        "{} launched {} of {} commands ({} still running)",
        tool.default_program(),
        stats.launched,
        units.len(),
        stats.in_flight
    );

    if config.wait_for_jobs {
        let stats = launcher.wait_all()?;
        info!(
            "{} finished: {} processes reaped",
            tool.default_program(),
            stats.reaped
        );
    }

    Ok(())
}
