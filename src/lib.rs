//! Cookiecutter: parallel launching of k-mer based read filters.
//!
//! The [`launch`] module holds the bounded process pool and command
//! synthesis; [`toolset`] binds it to the four external tools, and
//! [`library`] builds k-mer libraries from FASTA files.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod launch;
pub mod library;
pub mod toolset;

#[cfg(test)]
mod test_support;
