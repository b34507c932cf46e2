//! Medium profile scraping.
//!
//! Fetches `https://medium.com/@{author}` through a [`PageSource`] and runs
//! the card extraction over whatever came back. Fetch failures are logged and
//! degrade to an empty result; they never abort a batch.

use super::PageSource;
use crate::config::ScraperConfig;
use crate::extract::organize_response;
use crate::models::ExtractionResult;
use futures::stream::{self, StreamExt};
use tracing::{error, info, instrument, warn};

/// Scrape one author's profile page.
///
/// Returns an empty result when `author` is empty, the profile URL cannot be
/// built, or the page cannot be fetched.
#[instrument(level = "info", skip(source, config))]
pub async fn scrape_profile<S: PageSource>(
    source: &S,
    config: &ScraperConfig,
    author: &str,
) -> ExtractionResult {
    if author.is_empty() {
        warn!("Empty author handle; skipping fetch");
        return ExtractionResult::default();
    }

    let url = match config.profile_url(author) {
        Ok(url) => url,
        Err(e) => {
            error!(error = %e, base_url = %config.base_url, "Could not build profile URL");
            return ExtractionResult::default();
        }
    };

    let html = match source.fetch(url.as_str()).await {
        Ok(Some(html)) => Some(html),
        Ok(None) => {
            warn!(%url, "Fetch produced no document");
            None
        }
        Err(e) => {
            error!(error = %e, %url, "Fetch failed");
            None
        }
    };

    organize_response(author, html.as_deref(), config.origin())
}

/// Scrape several authors, at most `concurrency` fetches in flight.
///
/// Results are returned paired with their author, in completion order.
#[instrument(level = "info", skip_all, fields(authors = authors.len()))]
pub async fn scrape_profiles<S: PageSource>(
    source: &S,
    config: &ScraperConfig,
    authors: &[String],
    concurrency: usize,
) -> Vec<(String, ExtractionResult)> {
    let results: Vec<(String, ExtractionResult)> = stream::iter(authors)
        .map(|author| async move {
            let result = scrape_profile(source, config, author).await;
            (author.clone(), result)
        })
        .buffer_unordered(concurrency.max(1))
        .collect()
        .await;

    info!(
        profiles = results.len(),
        articles = results.iter().map(|(_, r)| r.article_count()).sum::<usize>(),
        "Scraped profiles"
    );
    results
}
