use async_trait::async_trait;
use reqwest::{Request, Response};

/// Executes a prepared HTTP request.
///
/// Every GBFS request goes through this trait, so wrappers such as
/// [`ClientIdentifier`](super::ClientIdentifier) can decorate requests and
/// tests can observe the traffic.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}
