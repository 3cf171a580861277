//! `imgrab scan <url>`: list a page's images.

use anyhow::{Context, Result};
use imgrab_core::config::ImgrabConfig;
use imgrab_core::service::{ScanReport, Scraper};

pub(super) async fn scan_blocking(cfg: &ImgrabConfig, url: &str) -> Result<ScanReport> {
    let cfg = cfg.clone();
    let url = url.to_string();
    let report = tokio::task::spawn_blocking(move || Scraper::from_config(&cfg).scan(&url))
        .await
        .context("scan task join")??;
    Ok(report)
}

pub async fn run_scan(cfg: &ImgrabConfig, url: &str, json: bool) -> Result<()> {
    let report = scan_blocking(cfg, url).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    for image in report.sorted_images() {
        println!("{}", image);
    }
    println!("Found {} image(s) on {} (label: {})", report.count, report.page_url, report.label);
    Ok(())
}
