use async_trait::async_trait;
use reqwest::{Request, Response};

/// Transport used by the fetcher. Implementations only execute requests;
/// status handling and decoding happen in [`super::fetch_bytes`].
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}
