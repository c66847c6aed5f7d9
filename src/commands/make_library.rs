//! Implementation of the `cookiecutter make_library` command.

use crate::cli::MakeLibraryArgs;
use crate::error::Result;
use crate::library::create_kmer_file;

pub(super) fn cmd_make_library(args: MakeLibraryArgs) -> Result<()> {
    create_kmer_file(&args.input, &args.output, args.length)?;
    Ok(())
}
