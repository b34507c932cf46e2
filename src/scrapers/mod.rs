//! Page sources and the profile scraping pipeline.
//!
//! A page source turns a URL into raw HTML; it knows nothing about cards or
//! fields. Two sources are available:
//!
//! | Source | Module | Method | Notes |
//! |--------|--------|--------|-------|
//! | HTTP | [`http`] | `reqwest` GET with browser-like headers | Default |
//! | Browser | `browser` | WebDriver (`fantoccini`) page source | Requires the `render` feature and a running driver |
//!
//! [`medium`] ties a source to the extraction core: fetch the profile page,
//! then hand whatever came back to [`crate::extract::organize_response`].

#[cfg(feature = "render")]
pub mod browser;
pub mod http;
pub mod medium;

use std::error::Error;

/// Anything that can produce the HTML of a page.
pub trait PageSource {
    /// Fetch `url`.
    ///
    /// `Ok(None)` means the source reached the page but has no usable
    /// document for it (for example a non-success status).
    async fn fetch(&self, url: &str) -> Result<Option<String>, Box<dyn Error>>;
}

/// The page source selected at startup.
#[derive(Debug)]
pub enum Source {
    Http(http::HttpSource),
    #[cfg(feature = "render")]
    Browser(browser::BrowserSource),
}

impl PageSource for Source {
    async fn fetch(&self, url: &str) -> Result<Option<String>, Box<dyn Error>> {
        match self {
            Source::Http(source) => source.fetch(url).await,
            #[cfg(feature = "render")]
            Source::Browser(source) => source.fetch(url).await,
        }
    }
}
