//! Article card extraction from a rendered profile page.
//!
//! This is the pure core of the scraper. It performs no I/O and keeps no state
//! between calls:
//!
//! 1. **Locate**: [`locate_cards`] finds the article card containers
//! 2. **Extract**: the [`fields`] extractors each produce one value per card
//! 3. **Assemble**: [`assemble`] zips the field lists into [`ArticleRecord`]s
//!
//! Markup that does not match the expected layout never produces an error.
//! A bad field becomes a placeholder, no cards becomes an empty list, and no
//! document becomes an empty result.

pub mod cards;
pub mod error;
pub mod fields;
pub mod node;

#[cfg(test)]
pub(crate) mod fixtures;

pub use cards::locate_cards;
pub use node::StructuredNode;

use crate::models::{ArticleRecord, ExtractionResult};
use fields::{
    extract_applauds, extract_hrefs, extract_images, extract_meta, extract_publications,
    extract_titles,
};
use itertools::izip;
use scraper::Html;
use tracing::{info, instrument, warn};

/// Build the result for `author_id` from already located `cards`.
///
/// Relative story links are resolved against `origin`. An empty author id
/// yields an empty result; an empty card list yields the author mapped to no
/// articles.
pub fn assemble<N: StructuredNode>(author_id: &str, cards: &[N], origin: &str) -> ExtractionResult {
    if author_id.is_empty() {
        warn!("No author id given; returning empty result");
        return ExtractionResult::default();
    }

    let titles = extract_titles(cards);
    let hrefs = extract_hrefs(cards, origin);
    let publications = extract_publications(cards);
    let metas = extract_meta(cards);
    let images = extract_images(cards);
    let applauds = extract_applauds(cards);

    let articles = izip!(titles, hrefs, publications, metas, images, applauds)
        .map(
            |(title, href, publication, meta, image_src, total_applauds)| ArticleRecord {
                title,
                href,
                publication,
                meta,
                image_src,
                total_applauds,
            },
        )
        .collect();

    ExtractionResult::new(author_id, articles)
}

/// Run the whole pipeline over a fetched profile page.
///
/// `html` is `None` when the fetch produced nothing. Both a missing author id
/// and a missing or blank document short-circuit to an empty result.
#[instrument(level = "info", skip(html, origin), fields(bytes = html.map_or(0, str::len)))]
pub fn organize_response(author_id: &str, html: Option<&str>, origin: &str) -> ExtractionResult {
    if author_id.is_empty() {
        warn!("No author id given; returning empty result");
        return ExtractionResult::default();
    }
    let Some(html) = html.filter(|h| !h.trim().is_empty()) else {
        warn!("No document to extract from; returning empty result");
        return ExtractionResult::default();
    };

    let document = Html::parse_document(html);
    let cards = locate_cards(document.root_element());
    let result = assemble(author_id, &cards, origin);

    info!(cards = cards.len(), "Extracted article cards");
    result
}
