use crate::error::GbfsError;
use crate::fetch::client::HttpClient;
use async_trait::async_trait;
use reqwest::header::{HeaderName, HeaderValue};

/// Header GBFS operators use to attribute traffic to a client application.
pub const CLIENT_IDENTIFIER_HEADER: &str = "client-identifier";

/// An [`HttpClient`] wrapper that sends `Client-Identifier: <identifier>` with
/// every request.
///
/// The identifier is validated once, at construction, so `execute` never
/// has to deal with an unrepresentable header value.
#[derive(Debug, Clone)]
pub struct ClientIdentifier<C> {
    inner: C,
    identifier: String,
    value: HeaderValue,
}

impl<C> ClientIdentifier<C> {
    pub fn new(inner: C, identifier: &str) -> Result<Self, GbfsError> {
        let value = HeaderValue::from_str(identifier)?;
        Ok(Self {
            inner,
            identifier: identifier.to_string(),
            value,
        })
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

#[async_trait]
impl<C: HttpClient> HttpClient for ClientIdentifier<C> {
    async fn execute(&self, mut req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        req.headers_mut().insert(
            HeaderName::from_static(CLIENT_IDENTIFIER_HEADER),
            self.value.clone(),
        );
        self.inner.execute(req).await
    }
}
