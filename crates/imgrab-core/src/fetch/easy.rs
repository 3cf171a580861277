//! libcurl-backed [`Fetcher`].

use super::headers::content_type;
use super::{FetchFailure, FetchedResponse, Fetcher};
use crate::config::ImgrabConfig;
use std::str;
use std::time::Duration;
use url::Url;

const ALLOWED_SCHEMES: &[&str] = &["http", "https"];

/// One curl easy handle per request; follows redirects up to a bound.
#[derive(Debug, Clone)]
pub struct CurlFetcher {
    connect_timeout: Duration,
    max_redirects: u32,
    user_agent: Option<String>,
}

impl Default for CurlFetcher {
    fn default() -> Self {
        Self::from_config(&ImgrabConfig::default())
    }
}

impl CurlFetcher {
    pub fn from_config(cfg: &ImgrabConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            max_redirects: cfg.max_redirects,
            user_agent: cfg.user_agent.clone(),
        }
    }
}

impl Fetcher for CurlFetcher {
    fn get(&self, url: &str, timeout: Duration) -> Result<FetchedResponse, FetchFailure> {
        check_scheme(url)?;

        let mut header_lines: Vec<String> = Vec::new();
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.max_redirections(self.max_redirects)?;
        easy.connect_timeout(self.connect_timeout.min(timeout))?;
        easy.timeout(timeout)?;
        if let Some(agent) = &self.user_agent {
            easy.useragent(agent)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    header_lines.push(s.trim_end().to_string());
                }
                true
            })?;
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        tracing::debug!(url, status, bytes = body.len(), "GET finished");
        Ok(FetchedResponse {
            status,
            content_type: content_type(&header_lines),
            body,
        })
    }
}

/// libcurl speaks many protocols (ftp, gopher, dict, file...); refuse
/// anything but http(s) before a handle is created.
fn check_scheme(url: &str) -> Result<(), FetchFailure> {
    let scheme = match Url::parse(url) {
        Ok(parsed) => parsed.scheme().to_string(),
        Err(_) => url.split(':').next().unwrap_or_default().to_ascii_lowercase(),
    };
    if ALLOWED_SCHEMES.contains(&scheme.as_str()) {
        Ok(())
    } else {
        Err(FetchFailure::UnsupportedScheme(scheme))
    }
}
