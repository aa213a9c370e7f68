use super::client::HttpClient;
use async_trait::async_trait;

/// Plain [`HttpClient`] backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct BasicClient(reqwest::Client);

impl BasicClient {
    /// Same as [`BasicClient::default`].
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HttpClient for BasicClient {
    async fn execute(&self, req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        self.0.execute(req).await
    }
}
