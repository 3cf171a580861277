//! In-memory [`Fetcher`] for unit tests.

use super::{FetchFailure, FetchedResponse, Fetcher};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

enum Route {
    Respond(FetchedResponse),
    Unreachable,
}

/// Serves canned responses by exact URL; unknown URLs answer 404.
#[derive(Default)]
pub(crate) struct StubFetcher {
    routes: HashMap<String, Route>,
    calls: AtomicUsize,
}

impl StubFetcher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with(
        mut self,
        url: &str,
        status: u32,
        content_type: Option<&str>,
        body: &[u8],
    ) -> Self {
        self.routes.insert(
            url.to_string(),
            Route::Respond(FetchedResponse {
                status,
                content_type: content_type.map(str::to_string),
                body: body.to_vec(),
            }),
        );
        self
    }

    pub(crate) fn ok(self, url: &str, content_type: &str, body: &[u8]) -> Self {
        self.with(url, 200, Some(content_type), body)
    }

    pub(crate) fn unreachable(mut self, url: &str) -> Self {
        self.routes.insert(url.to_string(), Route::Unreachable);
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Fetcher for StubFetcher {
    fn get(&self, url: &str, _timeout: Duration) -> Result<FetchedResponse, FetchFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.routes.get(url) {
            Some(Route::Respond(r)) => Ok(r.clone()),
            // CURLE_COULDNT_CONNECT
            Some(Route::Unreachable) => Err(FetchFailure::Transport(curl::Error::new(7))),
            None => Ok(FetchedResponse {
                status: 404,
                content_type: Some("text/html".to_string()),
                body: b"not found".to_vec(),
            }),
        }
    }
}
