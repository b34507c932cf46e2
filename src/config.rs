//! Scraper configuration loaded from an optional YAML file.
//!
//! Every key is optional; anything left out falls back to the defaults below,
//! which reproduce a desktop Chrome navigation to medium.com.
//!
//! ```yaml
//! base_url: https://medium.com
//! timeout_secs: 20
//! headers:
//!   accept-language: en-US,en;q=0.9
//! webdriver_url: http://localhost:4444
//! ```
//!
//! A `headers` map in the file replaces the default header set entirely.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use tracing::{info, instrument};
use url::Url;

/// Settings for reaching the platform and resolving scraped links.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// Platform origin. Profile URLs are built from it and relative story
    /// links are resolved against it.
    pub base_url: String,
    /// Request headers sent by the HTTP fetcher.
    pub headers: BTreeMap<String, String>,
    /// Per-request timeout for the HTTP fetcher.
    pub timeout_secs: u64,
    /// WebDriver endpoint used by the rendering fetcher.
    pub webdriver_url: String,
    /// Run the rendering browser without a window.
    pub headless: bool,
    /// How long the rendering fetcher lets the page settle before reading it.
    pub render_settle_ms: u64,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: "https://medium.com".to_string(),
            headers: default_headers(),
            timeout_secs: 30,
            webdriver_url: "http://localhost:9515".to_string(),
            headless: true,
            render_settle_ms: 750,
        }
    }
}

impl ScraperConfig {
    /// Profile page URL for `author`, e.g. `https://medium.com/@jane`.
    ///
    /// The handle is percent-encoded so it always lands in a single path
    /// segment.
    pub fn profile_url(&self, author: &str) -> Result<Url, url::ParseError> {
        let base = Url::parse(&self.base_url)?;
        base.join(&format!("@{}", urlencoding::encode(author)))
    }

    /// The base URL without a trailing slash, used to absolutize story links.
    pub fn origin(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

/// Load configuration from a YAML file.
#[instrument(level = "info")]
pub fn load_config(path: &str) -> Result<ScraperConfig, Box<dyn Error>> {
    let raw = std::fs::read_to_string(path)?;
    let config: ScraperConfig = serde_yaml::from_str(&raw)?;
    Url::parse(&config.base_url)?;
    info!(base_url = %config.base_url, headers = config.headers.len(), "Loaded configuration");
    Ok(config)
}

fn default_headers() -> BTreeMap<String, String> {
    [
        ("authority", "medium.com"),
        ("pragma", "no-cache"),
        ("cache-control", "no-cache"),
        ("dnt", "1"),
        ("upgrade-insecure-requests", "1"),
        (
            "user-agent",
            "Mozilla/5.0 (X11; CrOS x86_64 8172.45.0) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/78.0.3904.97 Safari/537.36",
        ),
        (
            "accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.9",
        ),
        ("sec-fetch-site", "same-origin"),
        ("sec-fetch-user", "?1"),
        ("sec-fetch-mode", "navigate"),
        ("sec-fetch-dest", "document"),
        ("accept-language", "en-GB,en-US;q=0.9,en;q=0.8"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}
