//! Per-URL fetch loop, sequential or on a bounded worker pool.

use super::naming::entry_name;
use crate::fetch::{FetchFailure, Fetcher};
use crate::url_model;
use std::collections::VecDeque;
use std::sync::{mpsc, Mutex, PoisonError};
use std::thread;
use std::time::Duration;

/// A fetched image ready to be written, already named.
#[derive(Debug)]
pub(crate) struct FetchedAsset {
    pub name: String,
    pub body: Vec<u8>,
}

/// Result for one input URL; `index` is 1-based input position.
#[derive(Debug)]
pub(crate) struct Fetched {
    pub index: usize,
    pub url: String,
    pub result: Result<FetchedAsset, String>,
}

/// Fetches every URL and returns one [`Fetched`] per input, in input order.
///
/// Indices are assigned before dispatch so naming does not depend on
/// completion order. With `workers > 1`, that many scoped threads pull from
/// a shared queue.
pub(crate) fn fetch_all<F>(
    fetcher: &F,
    urls: &[String],
    timeout: Duration,
    workers: usize,
) -> Vec<Fetched>
where
    F: Fetcher + Sync + ?Sized,
{
    let jobs: VecDeque<(usize, &str)> = urls
        .iter()
        .enumerate()
        .map(|(i, url)| (i + 1, url.as_str()))
        .collect();
    let workers = workers.clamp(1, jobs.len().max(1));

    if workers == 1 {
        return jobs
            .into_iter()
            .map(|(index, url)| fetch_one(fetcher, index, url, timeout))
            .collect();
    }

    let work = Mutex::new(jobs);
    let (tx, rx) = mpsc::channel();
    thread::scope(|scope| {
        for _ in 0..workers {
            let tx = tx.clone();
            let work = &work;
            scope.spawn(move || loop {
                let next = work.lock().unwrap_or_else(PoisonError::into_inner).pop_front();
                let Some((index, url)) = next else { break };
                if tx.send(fetch_one(fetcher, index, url, timeout)).is_err() {
                    break;
                }
            });
        }
    });
    drop(tx);

    let mut results: Vec<Fetched> = rx.into_iter().collect();
    results.sort_by_key(|f| f.index);
    results
}

fn fetch_one<F>(fetcher: &F, index: usize, url: &str, timeout: Duration) -> Fetched
where
    F: Fetcher + ?Sized,
{
    let result = fetch_asset(fetcher, index, url, timeout);
    match &result {
        Ok(asset) => tracing::debug!(
            index,
            url,
            name = %asset.name,
            bytes = asset.body.len(),
            "fetched image"
        ),
        Err(reason) => tracing::warn!(index, url, %reason, "skipping image"),
    }
    Fetched {
        index,
        url: url.to_string(),
        result,
    }
}

fn fetch_asset<F>(
    fetcher: &F,
    index: usize,
    url: &str,
    timeout: Duration,
) -> Result<FetchedAsset, String>
where
    F: Fetcher + ?Sized,
{
    let parsed = url_model::parse_absolute(url).map_err(|e| e.to_string())?;
    let response = fetcher.get(parsed.as_str(), timeout).map_err(|e| e.to_string())?;
    if response.status != 200 {
        return Err(FetchFailure::Status(response.status).to_string());
    }
    Ok(FetchedAsset {
        name: entry_name(index, &parsed, response.content_type.as_deref()),
        body: response.body,
    })
}
