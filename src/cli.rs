//! Command-line interface definitions for the Medium profile scraper.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Connection settings that rarely change live in the YAML config file instead
//! (see [`crate::config`]).

use clap::Parser;

/// Command-line arguments for the Medium profile scraper.
///
/// # Examples
///
/// ```sh
/// # Scrape two authors into ./json/<author>.json
/// medium_scraper -j ./json sameeruddinmohammed jane
///
/// # With a config file
/// medium_scraper -j ./json -c scraper.yaml jane
///
/// # Render through a WebDriver (needs the `render` feature and chromedriver)
/// medium_scraper -j ./json --render --webdriver-url http://localhost:9515 jane
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Author handles to scrape, without the leading `@`
    #[arg(required = true)]
    pub authors: Vec<String>,

    /// Output directory for the per-author JSON files
    #[arg(short, long)]
    pub json_output_dir: String,

    /// Optional path to a config.yaml file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Maximum number of profiles fetched at once
    #[arg(long, default_value_t = 4)]
    pub concurrency: usize,

    /// Fetch pages through a WebDriver-controlled browser instead of plain HTTP
    #[cfg(feature = "render")]
    #[arg(long)]
    pub render: bool,

    /// WebDriver endpoint, overriding the config file
    #[cfg(feature = "render")]
    #[arg(long, env = "WEBDRIVER_URL")]
    pub webdriver_url: Option<String>,
}
