//! Whole-file replacement through a temporary file.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Replace the contents of `path` with `contents`.
///
/// The data is written to a temporary file in the same directory, flushed,
/// and then renamed over the destination, so readers see either the old or
/// the new contents. The temporary file is removed if any step fails.
///
/// # Example
/// ```rust,no_run
/// use course_registration::utils::atomic_file;
/// use std::path::Path;
///
/// atomic_file::write_atomic(Path::new("Enrollments.json"), b"[]")?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp_file =
        NamedTempFile::new_in(parent).context("Failed to create temporary file")?;

    temp_file
        .write_all(contents)
        .context("Failed to write to temporary file")?;
    temp_file
        .as_file()
        .sync_all()
        .context("Failed to flush temporary file")?;

    temp_file
        .persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to persist file to {}", path.display()))?;

    Ok(())
}
