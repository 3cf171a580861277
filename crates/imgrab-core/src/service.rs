//! The two caller-facing operations, Scan and Retrieve, bound to one fetcher
//! and the configured timeouts.

use crate::archive::{self, Archive, BuildOptions};
use crate::config::ImgrabConfig;
use crate::error::Result;
use crate::fetch::{CurlFetcher, Fetcher};
use crate::locate;
use crate::url_model;
use serde::Serialize;
use std::collections::HashSet;
use std::time::Duration;

/// Result of scanning one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    /// Normalized page URL.
    pub page_url: String,
    /// Distinct absolute image URLs, unordered.
    pub images: HashSet<String>,
    pub count: usize,
    /// Host without a leading `www.`, used to name the archive.
    pub label: String,
}

impl ScanReport {
    /// Images sorted lexicographically, for stable display and naming.
    pub fn sorted_images(&self) -> Vec<String> {
        let mut images: Vec<String> = self.images.iter().cloned().collect();
        images.sort();
        images
    }
}

pub struct Scraper<F> {
    fetcher: F,
    page_timeout: Duration,
    build: BuildOptions,
}

impl Scraper<CurlFetcher> {
    pub fn from_config(cfg: &ImgrabConfig) -> Self {
        Self {
            fetcher: CurlFetcher::from_config(cfg),
            page_timeout: cfg.page_timeout(),
            build: cfg.build_options(),
        }
    }
}

impl<F: Fetcher + Sync> Scraper<F> {
    /// Scraper over `fetcher` with the default timeouts (15s page, 10s image).
    pub fn new(fetcher: F) -> Self {
        let cfg = ImgrabConfig::default();
        Self {
            fetcher,
            page_timeout: cfg.page_timeout(),
            build: cfg.build_options(),
        }
    }

    pub fn with_page_timeout(mut self, timeout: Duration) -> Self {
        self.page_timeout = timeout;
        self
    }

    pub fn with_build_options(mut self, build: BuildOptions) -> Self {
        self.build = build;
        self
    }

    /// Scan: locate the page's images and derive the archive label.
    pub fn scan(&self, page_url: &str) -> Result<ScanReport> {
        let page = url_model::parse_absolute(page_url)?;
        let images = locate::locate(&self.fetcher, page.as_str(), self.page_timeout)?;
        Ok(ScanReport {
            page_url: page.to_string(),
            count: images.len(),
            label: url_model::host_label(&page),
            images,
        })
    }

    /// Retrieve: fetch `urls` and pack them into `images_{label}.zip`.
    pub fn retrieve(&self, urls: &[String], label: &str) -> Result<Archive> {
        archive::build(&self.fetcher, urls, label, &self.build)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::fetch::stub::StubFetcher;

    fn site() -> StubFetcher {
        StubFetcher::new()
            .ok(
                "http://www.ex.com/",
                "text/html",
                br#"<img src="/a.jpg"><link rel="icon" href="/f.ico"><img src="/gone.png">"#,
            )
            .ok("http://www.ex.com/a.jpg", "image/jpeg", b"a")
            .ok("http://www.ex.com/f.ico", "image/x-icon", b"f")
    }

    #[test]
    fn scan_reports_images_count_and_label() {
        let scraper = Scraper::new(site());
        let report = scraper.scan("http://www.ex.com").unwrap();
        assert_eq!(report.page_url, "http://www.ex.com/");
        assert_eq!(report.count, 3);
        assert_eq!(report.label, "ex.com");
        assert_eq!(
            report.sorted_images(),
            vec![
                "http://www.ex.com/a.jpg".to_string(),
                "http://www.ex.com/f.ico".to_string(),
                "http://www.ex.com/gone.png".to_string(),
            ]
        );
    }

    #[test]
    fn scan_rejects_bad_input() {
        let scraper = Scraper::new(site());
        let err = scraper.scan("www.ex.com").unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn scan_then_retrieve_partial() {
        let scraper = Scraper::new(site());
        let report = scraper.scan("http://www.ex.com/").unwrap();
        let archive = scraper.retrieve(&report.sorted_images(), &report.label).unwrap();
        assert_eq!(archive.file_name, "images_ex.com.zip");
        assert_eq!(archive.stored_count(), 2);
        assert_eq!(archive.skipped_count(), 1);
        assert_eq!(
            archive.entry_names().collect::<Vec<_>>(),
            vec!["a_1.jpg", "f_2.ico"]
        );
    }

    #[test]
    fn retrieve_empty_is_no_images() {
        let scraper = Scraper::new(site());
        assert!(matches!(scraper.retrieve(&[], "ex.com"), Err(Error::NoImages)));
    }

    #[test]
    fn report_serializes() {
        let scraper = Scraper::new(site());
        let report = scraper.scan("http://www.ex.com/").unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["count"], 3);
        assert_eq!(json["label"], "ex.com");
        assert_eq!(json["images"].as_array().unwrap().len(), 3);
    }
}
