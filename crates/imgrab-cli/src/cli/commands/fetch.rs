//! `imgrab fetch <url>`: scan, download, zip.

use super::scan::scan_blocking;
use super::{print_outcomes, retrieve_blocking, write_if_any};
use anyhow::Result;
use imgrab_core::config::ImgrabConfig;
use imgrab_core::url_model::{last_path_segment, parse_absolute, split_extension};
use std::path::Path;

pub async fn run_fetch(
    cfg: &ImgrabConfig,
    url: &str,
    out_dir: &Path,
    only: &[String],
) -> Result<()> {
    println!("Scanning {} for images...", url);
    let report = scan_blocking(cfg, url).await?;
    if report.count == 0 {
        println!("No images found.");
        return Ok(());
    }

    let selected = select_by_extension(report.sorted_images(), only);
    if selected.is_empty() {
        println!("No images match --only {}.", only.join(","));
        return Ok(());
    }
    println!("Found {} image(s). Downloading {}...", report.count, selected.len());

    let archive = retrieve_blocking(cfg, selected, report.label).await?;
    print_outcomes(&archive);
    write_if_any(&archive, out_dir)?;
    Ok(())
}

/// Keeps URLs whose last path segment has one of `extensions`
/// (case-insensitive, leading dot optional). An empty filter keeps all.
pub(crate) fn select_by_extension(urls: Vec<String>, extensions: &[String]) -> Vec<String> {
    if extensions.is_empty() {
        return urls;
    }
    let wanted: Vec<String> = extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();
    urls.into_iter()
        .filter(|url| {
            let Ok(parsed) = parse_absolute(url) else {
                return false;
            };
            let (_, ext) = split_extension(last_path_segment(&parsed));
            let ext = ext.trim_start_matches('.').to_ascii_lowercase();
            wanted.iter().any(|w| *w == ext)
        })
        .collect()
}
