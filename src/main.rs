//! # Medium Scraper
//!
//! Extracts the article cards shown on Medium author profile pages and writes
//! them out as JSON, one file per author.
//!
//! ## Features
//!
//! - Locates article cards structurally, without relying on class names
//! - Extracts title, link, publication, publish date, read time, preview
//!   image and clap count for every card
//! - Tolerates malformed cards: a missing field becomes `null` (or `"Self"`
//!   for the publication) without affecting other fields or cards
//! - Fetches over plain HTTP, or through a WebDriver browser with the
//!   `render` feature
//!
//! ## Usage
//!
//! ```sh
//! medium_scraper -j ./json sameeruddinmohammed
//! ```
//!
//! ## Architecture
//!
//! 1. **Fetching**: A page source downloads each profile page
//! 2. **Locating**: Article cards are found by pairing links with headlines
//! 3. **Extracting**: Each field is read at a fixed position inside the card
//! 4. **Output**: Records are zipped per card and written as JSON

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod extract;
mod models;
mod outputs;
mod scrapers;
mod utils;

use cli::Cli;
use config::{ScraperConfig, load_config};
use outputs::json;
use scrapers::{Source, http::HttpSource};
use utils::ensure_writable_dir;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("medium_scraper starting up");

    let args = Cli::parse();
    debug!(?args.authors, ?args.json_output_dir, "Parsed CLI arguments");

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => ScraperConfig::default(),
    };

    // Early check: ensure JSON output dir is writable
    if let Err(e) = ensure_writable_dir(&args.json_output_dir).await {
        error!(
            path = %args.json_output_dir,
            error = %e,
            "JSON output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    let source = build_source(&args, &config)?;

    let results =
        scrapers::medium::scrape_profiles(&source, &config, &args.authors, args.concurrency).await;

    let mut written = 0usize;
    for (author, result) in &results {
        let articles = result.articles(author).map_or(0, <[_]>::len);
        info!(%author, articles, "Profile extracted");
        match json::write_profile(result, author, &args.json_output_dir).await {
            Ok(_) => written += 1,
            Err(e) => error!(%author, error = %e, "Failed to write profile JSON"),
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        profiles = results.len(),
        written,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}

/// Pick the page source requested on the command line.
#[cfg(feature = "render")]
fn build_source(args: &Cli, config: &ScraperConfig) -> Result<Source, Box<dyn Error>> {
    if !args.render {
        return http_source(config);
    }

    let mut config = config.clone();
    if let Some(url) = &args.webdriver_url {
        config.webdriver_url = url.clone();
    }
    info!(webdriver_url = %config.webdriver_url, "Using WebDriver page source");
    Ok(Source::Browser(scrapers::browser::BrowserSource::new(&config)))
}

/// Pick the page source requested on the command line.
#[cfg(not(feature = "render"))]
fn build_source(_args: &Cli, config: &ScraperConfig) -> Result<Source, Box<dyn Error>> {
    http_source(config)
}

fn http_source(config: &ScraperConfig) -> Result<Source, Box<dyn Error>> {
    info!(base_url = %config.base_url, "Using HTTP page source");
    Ok(Source::Http(HttpSource::new(config)?))
}
