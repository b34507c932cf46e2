//! WebDriver-rendered page source.
//!
//! Opens a fresh Chrome session per fetch against a running WebDriver
//! (chromedriver by default), waits for the page's scripts to settle, and
//! returns the rendered DOM's source. Only compiled with the `render` feature.

use super::PageSource;
use crate::config::ScraperConfig;
use fantoccini::ClientBuilder;
use serde_json::json;
use std::error::Error;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, instrument, warn};

/// Fetches pages by driving a real browser.
#[derive(Debug, Clone)]
pub struct BrowserSource {
    webdriver_url: String,
    headless: bool,
    settle: Duration,
}

impl BrowserSource {
    pub fn new(config: &ScraperConfig) -> Self {
        Self {
            webdriver_url: config.webdriver_url.clone(),
            headless: config.headless,
            settle: Duration::from_millis(config.render_settle_ms),
        }
    }

    fn chrome_args(&self) -> Vec<&'static str> {
        let mut args = Vec::new();
        if self.headless {
            args.push("--headless");
        }
        args.extend([
            "--no-sandbox",
            "--disable-dev-shm-usage",
            "--disable-notifications",
            "--remote-debugging-port=9222",
        ]);
        args
    }
}

impl PageSource for BrowserSource {
    #[instrument(level = "info", skip(self), fields(webdriver = %self.webdriver_url))]
    async fn fetch(&self, url: &str) -> Result<Option<String>, Box<dyn Error>> {
        let mut caps = serde_json::Map::new();
        caps.insert(
            "goog:chromeOptions".to_string(),
            json!({ "args": self.chrome_args() }),
        );

        let client = ClientBuilder::native()
            .capabilities(caps)
            .connect(&self.webdriver_url)
            .await?;

        let rendered = async {
            client.goto(url).await?;
            sleep(self.settle).await;
            client.source().await
        }
        .await;

        if let Err(e) = client.close().await {
            warn!(error = %e, "Failed to close WebDriver session");
        }

        let source = rendered?;
        info!(bytes = source.len(), "Rendered profile page");
        Ok(Some(source))
    }
}
