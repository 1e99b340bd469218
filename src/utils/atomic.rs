//! Atomic file operations
//!
//! Store files are rewritten whole on every mutation, so each write goes
//! through a sibling `.tmp` file:
//!
//! 1. Write to a temporary file (.tmp)
//! 2. Call sync_all() to flush to disk
//! 3. Rename temp file to final path (atomic on most filesystems)

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for atomic operations
pub type AtomicResult<T> = Result<T, AtomicError>;

/// Errors that can occur during atomic operations
#[derive(Debug, Error)]
pub enum AtomicError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn io_err(path: &Path) -> impl FnOnce(io::Error) -> AtomicError + '_ {
    move |source| AtomicError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Temp file path used while `path` is being rewritten
pub fn temp_path_for(path: &Path) -> PathBuf {
    path.with_extension("tmp")
}

/// Atomically write content using a writer function
///
/// # Example
///
/// ```ignore
/// atomic_write_with("herbs.jsonl", |out| {
///     writeln!(out, "line1")?;
///     Ok(())
/// })?;
/// ```
pub fn atomic_write_with<P, F>(path: P, write_fn: F) -> AtomicResult<()>
where
    P: AsRef<Path>,
    F: FnOnce(&mut BufWriter<&File>) -> io::Result<()>,
{
    let path = path.as_ref();
    let temp_path = temp_path_for(path);

    // Ensure parent directory exists
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err(parent))?;
    }

    let file = File::create(&temp_path).map_err(io_err(&temp_path))?;
    {
        let mut writer = BufWriter::new(&file);
        write_fn(&mut writer).map_err(io_err(&temp_path))?;
        writer.flush().map_err(io_err(&temp_path))?;
    }
    file.sync_all().map_err(io_err(&temp_path))?;

    fs::rename(&temp_path, path).map_err(io_err(path))?;
    Ok(())
}

/// Remove a temp file left behind by an interrupted write of `path`
///
/// Returns whether a leftover file was found.
pub fn cleanup_temp_file<P: AsRef<Path>>(path: P) -> AtomicResult<bool> {
    let temp_path = temp_path_for(path.as_ref());
    if !temp_path.exists() {
        return Ok(false);
    }
    fs::remove_file(&temp_path).map_err(io_err(&temp_path))?;
    Ok(true)
}
