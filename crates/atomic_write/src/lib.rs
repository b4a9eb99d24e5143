use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

/// Writes `contents` to `path` in a single replacement.
///
/// The content is staged in a temporary file in the destination's directory
/// and renamed into place, so a failed write leaves the destination either
/// untouched or fully replaced, never truncated.
pub fn atomic_write(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Error creating temporary file in {}", dir.display()))?;
    tmp.write_all(contents.as_bytes())
        .with_context(|| format!("Error writing staged content for {}", path.display()))?;
    tmp.persist(path)
        .with_context(|| format!("Error replacing {}", path.display()))?;
    Ok(())
}
