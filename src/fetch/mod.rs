//! HTTP plumbing: the [`HttpClient`] seam, a default implementation and the
//! `Client-Identifier` header wrapper.

mod basic;
mod client;
mod identifier;

pub use basic::BasicClient;
pub use client::HttpClient;
pub use identifier::{CLIENT_IDENTIFIER_HEADER, ClientIdentifier};

use crate::error::GbfsError;
use tracing::debug;

/// Issues a GET for `url` and parses the body as JSON.
///
/// Non-2xx statuses are reported as [`GbfsError::Http`].
pub async fn fetch_json<C: HttpClient>(
    client: &C,
    url: &str,
) -> Result<serde_json::Value, GbfsError> {
    let parsed = reqwest::Url::parse(url).map_err(|e| GbfsError::InvalidUrl {
        url: url.to_string(),
        message: e.to_string(),
    })?;
    let req = reqwest::Request::new(reqwest::Method::GET, parsed);

    let resp = client.execute(req).await?.error_for_status()?;
    let bytes = resp.bytes().await?;
    debug!(url, bytes = bytes.len(), "Response received");

    serde_json::from_slice(&bytes).map_err(|source| GbfsError::Json {
        url: url.to_string(),
        source,
    })
}
