//! Atomic file write for the seed document.
//!
//! The document is written to a hidden temporary file in the destination
//! directory and renamed over the target, so an interrupted run never leaves
//! a partially written seed file for the database loader to trip over.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use camino::Utf8PathBuf;
use cap_std::fs::{Dir, OpenOptions};

use crate::error::WriteError;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Writes `contents` to `file_name` inside `dir` via a temp file and rename.
///
/// The temporary name mixes the process id, a wall-clock suffix, and a
/// monotonic counter so concurrent writers in the same directory cannot
/// collide. The temp file is synced before the rename and removed again on
/// any failure.
///
/// # Errors
///
/// Returns [`WriteError::Io`] if the temporary file cannot be created,
/// written, synced, or renamed into place.
pub(crate) fn write_atomic(dir: &Dir, file_name: &str, contents: &str) -> Result<(), WriteError> {
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    let tmp_name = format!(".{file_name}.tmp.{}.{suffix}.{counter}", std::process::id());

    write_temp_file(dir, &tmp_name, contents)?;
    rename_over_target(dir, &tmp_name, file_name)?;
    sync_directory(dir);

    Ok(())
}

fn write_temp_file(dir: &Dir, tmp_name: &str, contents: &str) -> Result<(), WriteError> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir
        .open_with(tmp_name, &options)
        .map_err(|err| io_error(tmp_name, &err))?;

    if let Err(err) = file
        .write_all(contents.as_bytes())
        .and_then(|()| file.sync_all())
    {
        drop(file);
        drop(dir.remove_file(tmp_name));
        return Err(io_error(tmp_name, &err));
    }

    Ok(())
}

fn rename_over_target(dir: &Dir, tmp_name: &str, target_name: &str) -> Result<(), WriteError> {
    if let Err(err) = rename_impl(dir, tmp_name, target_name) {
        // Best-effort cleanup of the orphaned temp file.
        drop(dir.remove_file(tmp_name));
        return Err(io_error(target_name, &err));
    }
    Ok(())
}

#[cfg(windows)]
fn rename_impl(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    // Windows rename fails if the target exists, so remove it first.
    match dir.remove_file(target_name) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(tmp_name, dir, target_name)
}

#[cfg(not(windows))]
fn rename_impl(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    dir.rename(tmp_name, dir, target_name)
}

fn sync_directory(dir: &Dir) {
    // Best-effort durability for the rename; ignore failures.
    if dir.open(".").and_then(|handle| handle.sync_all()).is_err() {
        // Ignore sync failures.
    }
}

fn io_error(name: &str, err: &io::Error) -> WriteError {
    WriteError::Io {
        path: Utf8PathBuf::from(name),
        message: err.to_string(),
    }
}
