//! Error type shared by the GBFS client, parser and summary join.

use thiserror::Error;

/// Errors that can occur while discovering, fetching or joining GBFS feeds.
#[derive(Debug, Error)]
pub enum GbfsError {
    /// The discovery document no longer has the `data.<language>.feeds` layout.
    ///
    /// The upstream feed is unversioned, so this usually means the operator
    /// changed the format.
    #[error("discovery document at {url} has changed: {reason}")]
    ConfigurationMismatch { url: String, reason: String },

    /// The requested feed name was not listed in the discovery document.
    #[error("feed `{0}` is not available")]
    UnknownFeed(String),

    /// A station from `station_information` has no entry in a status mapping.
    #[error("station `{station_id}` is missing from {mapping}")]
    KeyLookup {
        station_id: String,
        mapping: &'static str,
    },

    /// A feed payload is missing a required field or has the wrong type.
    #[error("feed `{feed}` has an unexpected shape: {source}")]
    Schema {
        feed: String,
        #[source]
        source: serde_json::Error,
    },

    /// The client identifier cannot be sent as an HTTP header value.
    #[error("invalid client identifier: {0}")]
    InvalidClientIdentifier(#[from] reqwest::header::InvalidHeaderValue),

    /// A discovered feed URL could not be parsed.
    #[error("invalid URL `{url}`: {message}")]
    InvalidUrl { url: String, message: String },

    /// The response body was not JSON.
    #[error("response from {url} is not valid JSON: {source}")]
    Json {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Network, timeout or HTTP status error.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
