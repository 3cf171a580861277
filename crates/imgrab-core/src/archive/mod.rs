//! Archive Builder: fetch a list of image URLs and pack the successful ones
//! into one deflate-compressed zip.
//!
//! Fetching is best effort. A URL that fails to parse, fails to transfer or
//! answers anything but 200 is recorded as [`AssetOutcome::Skipped`] and the
//! batch continues.

mod naming;
mod pool;

pub use naming::{archive_file_name, entry_name, extension_for_content_type, DEFAULT_LABEL};

use crate::error::{Error, Result};
use crate::fetch::Fetcher;
use pool::{Fetched, FetchedAsset};
use serde::Serialize;
use std::io::{Cursor, Write};
use std::time::Duration;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Knobs for [`build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    /// Whole-request timeout per image.
    pub timeout: Duration,
    /// Concurrent fetches; 1 runs the loop on the calling thread.
    pub workers: usize,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            workers: 1,
        }
    }
}

/// What happened to one input URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum AssetOutcome {
    Stored {
        index: usize,
        url: String,
        name: String,
        size: usize,
    },
    Skipped {
        index: usize,
        url: String,
        reason: String,
    },
}

impl AssetOutcome {
    pub fn index(&self) -> usize {
        match self {
            AssetOutcome::Stored { index, .. } | AssetOutcome::Skipped { index, .. } => *index,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            AssetOutcome::Stored { url, .. } | AssetOutcome::Skipped { url, .. } => url,
        }
    }

    pub fn is_stored(&self) -> bool {
        matches!(self, AssetOutcome::Stored { .. })
    }
}

/// A finished zip plus the per-URL record of how it was assembled.
#[derive(Debug, Clone)]
pub struct Archive {
    /// Suggested download name, `images_{label}.zip`.
    pub file_name: String,
    pub bytes: Vec<u8>,
    /// One entry per input URL, in input order.
    pub outcomes: Vec<AssetOutcome>,
}

impl Archive {
    pub fn stored_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_stored()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes.len() - self.stored_count()
    }

    /// Names of the entries written into the zip, in index order.
    pub fn entry_names(&self) -> impl Iterator<Item = &str> {
        self.outcomes.iter().filter_map(|o| match o {
            AssetOutcome::Stored { name, .. } => Some(name.as_str()),
            AssetOutcome::Skipped { .. } => None,
        })
    }
}

/// Fetches each of `urls` and writes the successful ones into a zip named
/// after `label`.
///
/// Fails only with [`Error::NoImages`] for an empty list, or
/// [`Error::Archive`] if the container itself cannot be written. A zip with
/// zero entries is a valid result.
pub fn build<F>(
    fetcher: &F,
    urls: &[String],
    label: &str,
    options: &BuildOptions,
) -> Result<Archive>
where
    F: Fetcher + Sync + ?Sized,
{
    if urls.is_empty() {
        return Err(Error::NoImages);
    }

    let fetched = pool::fetch_all(fetcher, urls, options.timeout, options.workers);

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let file_options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut outcomes = Vec::with_capacity(fetched.len());
    for Fetched { index, url, result } in fetched {
        let outcome = match result {
            Ok(asset) => write_entry(&mut zip, file_options, index, url, asset)?,
            Err(reason) => AssetOutcome::Skipped { index, url, reason },
        };
        outcomes.push(outcome);
    }
    let bytes = zip.finish()?.into_inner();

    let archive = Archive {
        file_name: archive_file_name(label),
        bytes,
        outcomes,
    };
    tracing::info!(
        file = %archive.file_name,
        requested = urls.len(),
        stored = archive.stored_count(),
        skipped = archive.skipped_count(),
        "archive built"
    );
    Ok(archive)
}

/// Writes one entry. A rejected entry name skips the asset; a failing write
/// after the entry was opened poisons the archive and is returned as an error.
fn write_entry(
    zip: &mut ZipWriter<Cursor<Vec<u8>>>,
    file_options: SimpleFileOptions,
    index: usize,
    url: String,
    asset: FetchedAsset,
) -> Result<AssetOutcome> {
    if let Err(e) = zip.start_file(asset.name.as_str(), file_options) {
        tracing::warn!(index, %url, name = %asset.name, "zip rejected entry: {}", e);
        return Ok(AssetOutcome::Skipped {
            index,
            url,
            reason: format!("zip entry {}: {}", asset.name, e),
        });
    }
    zip.write_all(&asset.body).map_err(zip::result::ZipError::from)?;
    Ok(AssetOutcome::Stored {
        index,
        url,
        size: asset.body.len(),
        name: asset.name,
    })
}
