//! CLI argument parsing for cookiecutter.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgGroup, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Cookiecutter: a k-mer based read filtration and extraction tool.
///
/// Runs one of the Cookiecutter tools over many FASTQ files in parallel,
/// or builds a k-mer library from a FASTA file.
#[derive(Parser, Debug)]
#[command(name = "cookiecutter")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Print the commands to be launched instead of launching them.
    #[arg(short, long, global = true)]
    pub echo: bool,

    /// Wait for every launched command to finish before exiting.
    #[arg(long, global = true)]
    pub wait: bool,

    /// YAML file with binary locations and launcher settings.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for cookiecutter.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Extract reads matching a list of k-mers.
    ///
    /// Outputs only the reads that matched the list.
    Extractor(ToolArgs),

    /// Remove reads matching a list of k-mers.
    ///
    /// Outputs only reads without any matches to the provided list.
    Remove(ToolArgs),

    /// Extended `remove` with read quality filters.
    ///
    /// Adds the DUST filter, removal of (G)n and (C)n tracks and of reads with
    /// unknown nucleotides, and a read length cutoff; outputs both filtered
    /// and unfiltered reads.
    #[command(name = "rm_reads")]
    RmReads(RmReadsArgs),

    /// Write matched and unmatched reads to separate files.
    Separate(ToolArgs),

    /// Create a library of k-mers from a FASTA file.
    #[command(name = "make_library")]
    MakeLibrary(MakeLibraryArgs),
}

/// Input and output arguments shared by the four tools.
#[derive(Args, Debug)]
#[command(group(
    ArgGroup::new("reads")
        .required(true)
        .args(["input", "fastq1"])
))]
pub struct ToolArgs {
    /// FASTQ files of single-end reads.
    #[arg(short = 'i', long, num_args = 1..)]
    pub input: Vec<PathBuf>,

    /// FASTQ files of the first paired-end reads.
    #[arg(short = '1', long, num_args = 1.., requires = "fastq2")]
    pub fastq1: Vec<PathBuf>,

    /// FASTQ files of the second paired-end reads.
    #[arg(short = '2', long, num_args = 1.., requires = "fastq1", conflicts_with = "input")]
    pub fastq2: Vec<PathBuf>,

    /// File of fragment k-mers.
    #[arg(short, long)]
    pub fragments: PathBuf,

    /// Directory for output files.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Number of input files processed in parallel.
    #[arg(short, long, default_value_t = 1)]
    pub threads: usize,
}

/// Arguments for the `rm_reads` command.
#[derive(Args, Debug)]
pub struct RmReadsArgs {
    #[command(flatten)]
    pub common: ToolArgs,

    /// PolyG/polyC sequence length cutoff.
    #[arg(short, long, default_value_t = 13)]
    pub polygc: u32,

    /// Read length cutoff.
    #[arg(short, long, default_value_t = 50)]
    pub length: u32,

    /// Use the DUST filter.
    #[arg(short, long)]
    pub dust: bool,

    /// Window size for the DUST filter.
    #[arg(short = 'k', long = "dust_k", default_value_t = 4)]
    pub dust_k: u32,

    /// Score cutoff for the DUST filter.
    #[arg(short = 'c', long = "dust_cutoff", default_value_t = 2)]
    pub dust_cutoff: u32,

    /// Filter reads containing unknown nucleotides.
    #[arg(short = 'N', long = "filterN")]
    pub filter_n: bool,
}

/// Arguments for the `make_library` command.
#[derive(Args, Debug)]
pub struct MakeLibraryArgs {
    /// FASTA file to take k-mers from.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output file of k-mers.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Length of generated k-mers.
    #[arg(short, long)]
    pub length: usize,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
