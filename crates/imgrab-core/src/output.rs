//! Writing a finished archive to disk.
//!
//! The zip is staged in a temp file inside the destination directory and
//! renamed into place, so a failed run never leaves a partial archive.

use crate::archive::Archive;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes `archive` to `dir/{archive.file_name}`, replacing any existing file.
/// Returns the final path.
pub fn persist_archive(dir: &Path, archive: &Archive) -> Result<PathBuf> {
    let final_path = dir.join(&archive.file_name);
    let mut staged = tempfile::Builder::new()
        .prefix(".imgrab-")
        .suffix(".part")
        .tempfile_in(dir)
        .with_context(|| format!("create staging file in {}", dir.display()))?;
    staged
        .write_all(&archive.bytes)
        .context("write archive bytes")?;
    staged.as_file().sync_all().context("sync archive")?;
    staged
        .persist(&final_path)
        .map_err(|e| e.error)
        .with_context(|| format!("persist {}", final_path.display()))?;
    tracing::info!(path = %final_path.display(), bytes = archive.bytes.len(), "archive written");
    Ok(final_path)
}
