//! Command implementations for cookiecutter.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Every command first checks that the tool executables are
//! installed, so a broken installation is reported before any work starts.

mod make_library;
mod run;

#[cfg(test)]
mod tests;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::Result;
use crate::toolset::{FilterOptions, Tool, verify_binaries};
use std::io::{self, Write};

/// Dispatch a command to its implementation, printing dry runs to stdout.
pub fn dispatch(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    dispatch_to(cli, &mut out)
}

/// Dispatch a command, writing dry-run command lines to `out`.
pub fn dispatch_to<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if cli.wait {
        config.wait_for_jobs = true;
    }

    verify_binaries(&config)?;

    let mode = if cli.echo { run::Mode::Echo } else { run::Mode::Launch };

    match cli.command {
        Command::Extractor(args) => run::cmd_tool(Tool::Extractor, args, None, mode, &config, out),
        Command::Remove(args) => run::cmd_tool(Tool::Remove, args, None, mode, &config, out),
        Command::Separate(args) => run::cmd_tool(Tool::Separate, args, None, mode, &config, out),
        Command::RmReads(args) => {
            let filters = FilterOptions {
                polygc: args.polygc,
                length: args.length,
                dust: args.dust,
                dust_k: args.dust_k,
                dust_cutoff: args.dust_cutoff,
                filter_n: args.filter_n,
            };
            run::cmd_tool(Tool::RmReads, args.common, Some(filters), mode, &config, out)
        }
        Command::MakeLibrary(args) => make_library::cmd_make_library(args),
    }
}
