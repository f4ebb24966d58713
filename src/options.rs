//! Configuration options for summarization.
//!
//! The `Options` struct controls request-level behavior: redirect handling,
//! output rendering and the wiki endpoint used by HTTP-backed sources.

/// Configuration options for summarization.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use wikisum::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     render_html: false,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Follow a redirect stub to its target page.
    ///
    /// One hop only: when the target page is itself a redirect, the second
    /// page is summarized as fetched.
    ///
    /// Default: `true`
    pub resolve_redirects: bool,

    /// Rewrite wiki emphasis, heading and list markers in the assembled
    /// summary to HTML tags.
    ///
    /// When disabled, the summary keeps its cleaned wiki markup.
    ///
    /// Default: `true`
    pub render_html: bool,

    /// MediaWiki index base used to build raw-page URLs for HTTP-backed
    /// sources.
    ///
    /// Default: `"https://en.wikipedia.org/w/index.php"`
    pub base_url: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            resolve_redirects: true,
            render_html: true,
            base_url: "https://en.wikipedia.org/w/index.php".to_string(),
        }
    }
}
