//! Article sources and title conventions.
//!
//! Raw wiki markup reaches the pipeline through [`ArticleSource`], which
//! keeps the transport pluggable: an HTTP client, a dump reader and an
//! in-memory fixture all look the same to the summarizer. The helpers here
//! cover the wiki-side title conventions: request normalization, redirect
//! stubs and the raw-page URL scheme.

use url::Url;

use crate::error::{Error, Result};
use crate::patterns::SQUARE_LINK;

/// Supplies raw wiki markup by article title.
pub trait ArticleSource {
    /// Returns the raw markup of `title`.
    ///
    /// A page that cannot be produced is an [`Error::FetchError`]; the
    /// summarizer answers those with its not-found message rather than
    /// failing the request.
    fn fetch_raw(&self, title: &str) -> Result<String>;
}

/// Normalizes a user-entered topic into request-title form: spaces become
/// underscores and the title is lowercased.
#[must_use]
pub fn normalize_topic(topic: &str) -> String {
    topic.replace(' ', "_").to_lowercase()
}

/// Whether a raw page is a redirect stub.
#[must_use]
pub fn is_redirect(raw: &str) -> bool {
    raw.starts_with("#REDIRECT") || raw.starts_with("#redirect")
}

/// The title a redirect stub points at: the content of its first wiki
/// link, spaces underscored. Case is preserved, redirect targets are
/// already canonical titles. `None` when the stub carries no link.
#[must_use]
pub fn redirect_target(raw: &str) -> Option<String> {
    let link = SQUARE_LINK.find(raw)?.as_str();
    let target = &link[2..link.len() - 2];
    Some(target.replace(' ', "_"))
}

/// The raw-markup URL for a title under a MediaWiki base such as
/// `https://en.wikipedia.org/w/index.php`.
pub fn raw_page_url(base: &str, title: &str) -> Result<Url> {
    Url::parse_with_params(base, [("action", "raw"), ("title", title)])
        .map_err(|e| Error::FetchError(format!("bad base URL {base}: {e}")))
}

/// The summary text served when no page exists for a topic.
#[must_use]
pub fn not_found_message(topic: &str) -> String {
    format!(
        "Looks like there is no Wikipedia page for \"{}\"!<br>Try another topic.",
        topic.replace('_', " ")
    )
}
