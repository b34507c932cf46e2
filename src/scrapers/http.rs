//! Plain HTTP page source.
//!
//! Sends a single GET with the configured browser-like headers. There is no
//! retry: a failed request is reported to the caller, which treats it as "no
//! document".

use super::PageSource;
use crate::config::ScraperConfig;
use crate::utils::truncate_for_log;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::error::Error;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Fetches pages with a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    /// Build a client carrying the headers and timeout from `config`.
    pub fn new(config: &ScraperConfig) -> Result<Self, Box<dyn Error>> {
        let client = Client::builder()
            .default_headers(header_map(config)?)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client })
    }
}

impl PageSource for HttpSource {
    #[instrument(level = "info", skip(self))]
    async fn fetch(&self, url: &str) -> Result<Option<String>, Box<dyn Error>> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Profile request was not successful");
            return Ok(None);
        }

        let body = response.text().await?;
        info!(bytes = body.len(), "Fetched profile page");
        debug!(preview = %truncate_for_log(&body, 300), "Profile page body");
        Ok(Some(body))
    }
}

/// Convert the configured header map into a `reqwest` header map.
pub fn header_map(config: &ScraperConfig) -> Result<HeaderMap, Box<dyn Error>> {
    let mut headers = HeaderMap::new();
    for (name, value) in &config.headers {
        let name = HeaderName::from_bytes(name.as_bytes())?;
        headers.insert(name, HeaderValue::from_str(value)?);
    }
    Ok(headers)
}
