//! Operation-level error kinds for scan and retrieve.
//!
//! Per-asset failures during retrieve are not errors; they are reported as
//! [`crate::archive::AssetOutcome::Skipped`].

use crate::fetch::FetchFailure;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Input URL is malformed or lacks a scheme or host. No request was made.
    #[error("invalid URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: &'static str },

    /// The page GET failed (transport error, timeout or non-2xx status).
    #[error("failed to fetch page {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: FetchFailure,
    },

    /// Retrieve was called with an empty URL list.
    #[error("no images provided")]
    NoImages,

    /// The zip container could not be finalized.
    #[error("failed to assemble archive: {0}")]
    Archive(#[from] zip::result::ZipError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// True for errors caused by the caller's input rather than upstream.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidUrl { .. } | Error::NoImages)
    }
}
