//! Generic blocking HTTP GET capability.
//!
//! The locator and archive builder only depend on [`Fetcher`]; the libcurl
//! implementation lives in [`CurlFetcher`].

mod easy;
mod headers;
#[cfg(test)]
pub(crate) mod stub;

pub use easy::CurlFetcher;

use std::time::Duration;
use thiserror::Error;

/// A completed GET: final status, declared content type and raw body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedResponse {
    pub status: u32,
    /// `Content-Type` of the final response (after redirects), if sent.
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl FetchedResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Why a GET did not yield a usable response.
#[derive(Debug, Error)]
pub enum FetchFailure {
    /// Curl reported an error (timeout, DNS, connection reset, ...).
    #[error(transparent)]
    Transport(#[from] curl::Error),
    /// The server answered with a status the caller does not accept.
    #[error("HTTP {0}")]
    Status(u32),
    /// Only `http` and `https` URLs are fetched.
    #[error("unsupported scheme `{0}`")]
    UnsupportedScheme(String),
}

/// Blocking HTTP GET. Any status is returned as `Ok`; callers decide which
/// statuses they accept.
pub trait Fetcher {
    fn get(&self, url: &str, timeout: Duration) -> Result<FetchedResponse, FetchFailure>;
}

impl<T: Fetcher + ?Sized> Fetcher for &T {
    fn get(&self, url: &str, timeout: Duration) -> Result<FetchedResponse, FetchFailure> {
        (**self).get(url, timeout)
    }
}
