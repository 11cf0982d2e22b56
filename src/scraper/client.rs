use std::time::Duration;

use tracing::debug;

use crate::error::{Result, ScrapeError};

/// Shared HTTP client for every page of a run.
pub struct DocClient {
    client: reqwest::Client,
}

impl DocClient {
    pub fn new(user_agent: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build().map_err(ScrapeError::Client)?,
        })
    }

    /// GET `url` and return the body. Non-success statuses are errors.
    pub async fn get_text(&self, url: &str) -> Result<String> {
        let http = |source: reqwest::Error| ScrapeError::Http {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(http)?;
        let response = response.error_for_status().map_err(http)?;
        let html_content = response.text().await.map_err(http)?;

        debug!(url, bytes = html_content.len(), "Fetched page");
        Ok(html_content)
    }
}
