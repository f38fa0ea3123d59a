//! URL validators used by the fetch tools.
//!
//! Both functions are pure: no I/O, and malformed input is a normal
//! "no match" outcome rather than an error.

use std::sync::LazyLock;

use regex::Regex;

static GOOGLE_DOC_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://(?:www\.)?docs\.google\.com/document/d/([a-zA-Z0-9_-]+)")
        .expect("google doc pattern is valid")
});

static TWEET_STATUS_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/status/(\d+)").expect("tweet status pattern is valid"));

/// Extract the document id from a Google Docs URL.
///
/// Accepts `https://docs.google.com/document/d/<id>` with an optional `www.`
/// prefix. Anything after the id (more path, a query string, a trailing
/// slash) is ignored.
///
/// ```
/// use ireader_mcp_server::domains::tools::validation::extract_google_doc_id;
///
/// let url = "https://docs.google.com/document/d/1234567890abcdefg/edit?usp=sharing";
/// assert_eq!(extract_google_doc_id(url), Some("1234567890abcdefg"));
/// assert_eq!(extract_google_doc_id("invalid-url"), None);
/// ```
pub fn extract_google_doc_id(url: &str) -> Option<&str> {
    GOOGLE_DOC_ID
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Extract the tweet id from a status URL, or return the input as-is.
///
/// `https://x.com/user/status/42/photo` yields `42`; a bare id like `42`
/// has no `/status/` segment and is returned unchanged.
pub fn extract_tweet_id(input: &str) -> &str {
    TWEET_STATUS_ID
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map_or(input, |m| m.as_str())
}
