use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use crate::core::interfaces::adapters::HttpTransport;
use crate::core::models::SearchSettings;
use crate::global_constants;

pub struct ReqwestHttpTransport {
    client: reqwest::Client,
}

impl ReqwestHttpTransport {
    pub fn build(settings: &SearchSettings) -> Result<Self> {
        log::info!(
            "{} Building HTTP client with {}s timeout",
            global_constants::LOG_TAG_HTTP,
            settings.request_timeout_secs
        );

        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&settings.user_agent).context("Invalid user agent")?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(settings.request_timeout())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestHttpTransport {
    async fn fetch_status(&self, url: &str) -> Result<u16> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to send HTTP request")?;

        let status = response.status().as_u16();
        log::debug!("{} {} -> {}", global_constants::LOG_TAG_HTTP, url, status);

        Ok(status)
    }
}
