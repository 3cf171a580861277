//! `imgrab retrieve <url>...`: download a chosen list into a zip.

use super::{print_outcomes, retrieve_blocking, write_if_any};
use anyhow::Result;
use imgrab_core::config::ImgrabConfig;
use std::path::Path;

pub async fn run_retrieve(
    cfg: &ImgrabConfig,
    urls: Vec<String>,
    label: &str,
    out_dir: &Path,
) -> Result<()> {
    println!("Downloading {} image(s)...", urls.len());
    let archive = retrieve_blocking(cfg, urls, label.to_string()).await?;
    print_outcomes(&archive);
    write_if_any(&archive, out_dir)?;
    Ok(())
}
