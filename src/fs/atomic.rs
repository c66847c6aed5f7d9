//! Atomic file output.
//!
//! All atomic writes follow this pattern:
//! 1. Stream content into a temporary file in the same directory
//! 2. Flush and sync the file to disk (fsync)
//! 3. Rename it over the target
//!
//! Source and destination must be on the same filesystem for the rename to be
//! atomic. On crash, a temporary file named `.{filename}.tmp` may remain.

use crate::error::{CutterError, Result};
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

/// Atomically write a file whose content is produced by `write`.
///
/// # Example
///
/// ```no_run
/// use cookiecutter::fs::atomic_write_with;
/// use std::io::Write;
///
/// atomic_write_with("kmers.tsv", |out| writeln!(out, "AT\t2"))?;
/// # Ok::<(), cookiecutter::error::CutterError>(())
/// ```
///
/// The closure receives a buffered writer over the temporary file. If it fails,
/// the temporary file is removed and the target is left untouched.
pub fn atomic_write_with<P, F>(path: P, write: F) -> Result<()>
where
    P: AsRef<Path>,
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            CutterError::UserError(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = generate_temp_path(path)?;

    if let Err(e) = write_and_sync(&temp_path, write) {
        let _ = fs::remove_file(&temp_path);
        return Err(CutterError::UserError(format!(
            "failed to write '{}': {}",
            path.display(),
            e
        )));
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        CutterError::UserError(format!(
            "failed to atomically replace '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Generate a temporary file path in the same directory as the target.
fn generate_temp_path(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            CutterError::UserError(format!("invalid output path '{}'", target.display()))
        })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync<F>(path: &Path, write: F) -> io::Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let mut out = BufWriter::new(File::create(path)?);
    write(&mut out)?;
    let file = out.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()
}
