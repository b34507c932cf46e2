//! Data models for extracted article cards and the per-author result.
//!
//! This module defines the structures that cross the JSON boundary:
//! - [`ArticleRecord`]: One article card pulled off a profile page
//! - [`MetaTimeData`]: The paired publish date and read time of a card
//! - [`ExtractionResult`]: All records for a single queried author
//!
//! Field names and nesting are the output contract consumed downstream, so
//! `meta` is serialized as `meta_time_data` and `None` values are written as
//! `null` rather than omitted.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Publication placeholder for stories the author published on their own
/// profile rather than in a publication.
pub const SELF_PUBLISHED: &str = "Self";

/// Publish date and read time shown together in a card's byline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct MetaTimeData {
    /// The date as displayed on the card, e.g. `"Jan 3"`.
    pub date_published: Option<String>,
    /// The read time as displayed on the card, e.g. `"5 min read"`.
    pub read_time: Option<String>,
}

/// A single article card extracted from an author's profile page.
///
/// Every field except `publication` degrades to `None` when the card's
/// markup does not have the expected shape. `publication` falls back to
/// [`SELF_PUBLISHED`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ArticleRecord {
    /// The headline text.
    pub title: Option<String>,
    /// Absolute link to the story with tracking parameters removed.
    pub href: Option<String>,
    /// Publication name, or `"Self"` when self-published.
    pub publication: String,
    /// Publish date and read time.
    #[serde(rename = "meta_time_data")]
    pub meta: MetaTimeData,
    /// Preview image source with resizing parameters removed.
    pub image_src: Option<String>,
    /// Applause ("claps") count when shown as a plain integer.
    pub total_applauds: Option<i64>,
}

/// The extracted cards for one author, keyed by their profile identifier.
///
/// Serializes as a bare JSON object: `{ "<author>": [ ... ] }`. An empty
/// result (`{}`) means there was no input to work with, while an author
/// mapped to an empty list means the page had no recognizable cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ExtractionResult(BTreeMap<String, Vec<ArticleRecord>>);

impl ExtractionResult {
    /// Build a result holding `articles` under `author`.
    pub fn new(author: &str, articles: Vec<ArticleRecord>) -> Self {
        let mut map = BTreeMap::new();
        map.insert(author.to_string(), articles);
        Self(map)
    }

    /// The records stored for `author`, if any.
    pub fn articles(&self, author: &str) -> Option<&[ArticleRecord]> {
        self.0.get(author).map(Vec::as_slice)
    }

    /// Total number of records across all authors.
    pub fn article_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
