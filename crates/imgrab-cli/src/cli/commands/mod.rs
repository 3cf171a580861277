//! CLI command handlers, one per file.

mod config;
mod fetch;
mod retrieve;
mod scan;

pub use config::run_config;
pub use fetch::run_fetch;
pub use retrieve::run_retrieve;
pub use scan::run_scan;

use anyhow::{Context, Result};
use imgrab_core::archive::{Archive, AssetOutcome};
use imgrab_core::config::ImgrabConfig;
use imgrab_core::output::persist_archive;
use imgrab_core::service::Scraper;
use std::path::Path;

/// Builds the archive on the blocking pool; curl transfers block the thread.
async fn retrieve_blocking(
    cfg: &ImgrabConfig,
    urls: Vec<String>,
    label: String,
) -> Result<Archive> {
    let cfg = cfg.clone();
    let archive =
        tokio::task::spawn_blocking(move || Scraper::from_config(&cfg).retrieve(&urls, &label))
            .await
            .context("retrieve task join")??;
    Ok(archive)
}

fn print_outcomes(archive: &Archive) {
    let total = archive.outcomes.len();
    for outcome in &archive.outcomes {
        match outcome {
            AssetOutcome::Stored { index, url, name, size } => {
                println!("[{}/{}] Downloaded: {} -> {} ({} bytes)", index, total, url, name, size);
            }
            AssetOutcome::Skipped { index, url, reason } => {
                println!("[{}/{}] Failed to download {}: {}", index, total, url, reason);
            }
        }
    }
}

/// Writes the archive unless nothing was stored. Returns whether a file was written.
fn write_if_any(archive: &Archive, out_dir: &Path) -> Result<bool> {
    if archive.stored_count() == 0 {
        println!("No images could be downloaded.");
        return Ok(false);
    }
    let path = persist_archive(out_dir, archive)?;
    println!(
        "Done! Saved {} of {} image(s) to {}",
        archive.stored_count(),
        archive.outcomes.len(),
        path.display()
    );
    Ok(true)
}
