use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issues one GET and reports the HTTP status code. The body is never read.
    async fn fetch_status(&self, url: &str) -> Result<u16>;
}
