//! Image Locator: fetch a page and collect the absolute URLs of its images
//! and icon links.

use crate::error::{Error, Result};
use crate::fetch::{FetchFailure, Fetcher};
use crate::url_model;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::ParseOpts;
use scraper::{Html, HtmlTreeSink, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;
use std::time::Duration;
use url::Url;

macro_rules! selector {
    ($name:ident, $css:expr) => {
        static $name: LazyLock<Selector> =
            LazyLock::new(|| Selector::parse($css).expect("static CSS selector"));
    };
}

selector!(IMG_SELECTOR, "img[src]");
selector!(LINK_SELECTOR, "link[rel][href]");

/// Fetches `page_url` and returns the distinct image URLs it references.
///
/// The URL is validated before any request is made. Transport errors and
/// non-2xx statuses fail with [`Error::Fetch`]. Iteration order of the
/// returned set is unspecified.
pub fn locate<F: Fetcher + ?Sized>(
    fetcher: &F,
    page_url: &str,
    timeout: Duration,
) -> Result<HashSet<String>> {
    let base = url_model::parse_absolute(page_url)?;
    tracing::debug!(url = %base, ?timeout, "fetching page");

    let response = fetcher.get(base.as_str(), timeout).map_err(|source| Error::Fetch {
        url: base.to_string(),
        source,
    })?;
    if !response.is_success() {
        return Err(Error::Fetch {
            url: base.to_string(),
            source: FetchFailure::Status(response.status),
        });
    }

    let html = String::from_utf8_lossy(&response.body);
    let images = extract_image_urls(&html, &base);
    tracing::info!(url = %base, count = images.len(), "located images");
    Ok(images)
}

/// Collects `img[src]` and icon `link[href]` references from `html`,
/// resolved against `base`.
///
/// Empty references and references that do not resolve to a URL with a host
/// are dropped. The document is parsed with scripting disabled, so
/// `<noscript>` fallbacks are seen as markup rather than raw text.
pub fn extract_image_urls(html: &str, base: &Url) -> HashSet<String> {
    let document = parse_without_scripting(html);

    let images = document
        .select(&IMG_SELECTOR)
        .filter_map(|el| el.value().attr("src"));
    let icons = document
        .select(&LINK_SELECTOR)
        .filter(|el| el.value().attr("rel").is_some_and(is_icon_rel))
        .filter_map(|el| el.value().attr("href"));

    images
        .chain(icons)
        .filter(|reference| !reference.trim().is_empty())
        .filter_map(|reference| url_model::resolve(base, reference))
        .map(String::from)
        .collect()
}

fn parse_without_scripting(html: &str) -> Html {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            scripting_enabled: false,
            ..Default::default()
        },
        ..Default::default()
    };
    html5ever::parse_document(HtmlTreeSink::new(Html::new_document()), opts).one(html)
}

/// `rel` is a space-separated token list; any token mentioning "icon"
/// counts (`icon`, `shortcut icon`, `apple-touch-icon`, `mask-icon`).
fn is_icon_rel(rel: &str) -> bool {
    rel.split_ascii_whitespace()
        .any(|token| token.to_ascii_lowercase().contains("icon"))
}
