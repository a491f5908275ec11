//! Atomic file writes.
//!
//! Content is written to a temp file next to the target and renamed into
//! place, so readers never observe a half-written file. The temp file is
//! removed automatically if any step fails.

use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Write `content` to `path` atomically.
///
/// A bare file name (no parent component) is written in the current
/// directory.
///
/// # Errors
///
/// Returns an `io::Error` if the temp file cannot be created or written, or
/// if the final rename fails.
pub fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut temp_file = NamedTempFile::new_in(parent)?;
    temp_file.write_all(content.as_bytes())?;
    temp_file.flush()?;

    // Consumes the NamedTempFile, so it is not deleted on drop
    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
#[path = "atomic_tests.rs"]
mod tests;
