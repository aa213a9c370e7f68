//! Validating decoders for GBFS JSON documents.

use serde::de::DeserializeOwned;

use crate::error::GbfsError;
use crate::gbfs::types::{Discovery, Envelope, FeedRef, LanguageFeeds};

/// Extracts the feed list for `language` from a discovery document.
///
/// # Errors
///
/// Returns [`GbfsError::ConfigurationMismatch`] if the document does not
/// have a `data.<language>.feeds` list of `{name, url}` records.
pub fn parse_discovery(
    url: &str,
    value: serde_json::Value,
    language: &str,
) -> Result<Vec<FeedRef>, GbfsError> {
    let mismatch = |reason: String| GbfsError::ConfigurationMismatch {
        url: url.to_string(),
        reason,
    };

    let mut discovery: Discovery =
        serde_json::from_value(value).map_err(|e| mismatch(e.to_string()))?;

    let section = discovery
        .data
        .remove(language)
        .ok_or_else(|| mismatch(format!("no feeds listed for language `{language}`")))?;

    serde_json::from_value::<LanguageFeeds>(section)
        .map(|lang| lang.feeds)
        .map_err(|e| mismatch(format!("language `{language}`: {e}")))
}

/// Decodes the envelope of the feed called `feed`.
///
/// # Errors
///
/// Returns [`GbfsError::Schema`] if a required field is missing or mistyped.
pub fn parse_feed<T: DeserializeOwned>(
    feed: &str,
    value: serde_json::Value,
) -> Result<Envelope<T>, GbfsError> {
    serde_json::from_value(value).map_err(|source| GbfsError::Schema {
        feed: feed.to_string(),
        source,
    })
}
