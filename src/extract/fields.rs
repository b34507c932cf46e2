//! Per-field extractors.
//!
//! Every extractor walks the same observed card layout:
//!
//! ```text
//! card
//! ├── [0] byline column ── div ── div ── [0] avatar
//! │                                      └─ [1] byline ── [0] "Author in Publication"
//! │                                                       └─ [1] "Jan 3 · 5 min read"
//! ├── [1] body column ──── a[href] ── h1, img[src]
//! └── [2] metrics column ─ h4 (clap count)
//! ```
//!
//! Each extractor returns exactly one value per card. An extractor that fails on a
//! card is replaced by the field's placeholder through [`extract_with`], so a
//! broken card never shifts or aborts the other fields or cards.

use super::error::ExtractionError;
use super::node::{StructuredNode, attribute, child_at, descendant};
use crate::models::{MetaTimeData, SELF_PUBLISHED};
use crate::utils::strip_from;
use tracing::debug;

/// Separates author from publication in the byline, e.g. `"Jane in Towards Data Science"`.
pub const PUBLICATION_SEPARATOR: &str = " in ";

/// Byline separators between date and read time, tried in order. The first is
/// the middle dot as the platform's pages decode under Latin-1; the second is
/// the same dot decoded as UTF-8.
pub const META_SEPARATORS: [&str; 2] = [" Â· ", " · "];

/// Tracking suffix appended to story links.
const HREF_TRACKING_MARKER: &str = "?source";

/// Resizing/quality suffix appended to image sources.
const IMAGE_QUALITY_MARKER: &str = "?q";

/// Apply `extractor` to every card, substituting `placeholder()` wherever it fails.
///
/// The output always has the same length and order as `cards`.
pub fn extract_with<N, T>(
    cards: &[N],
    field: &'static str,
    placeholder: impl Fn() -> T,
    extractor: impl Fn(N) -> Result<T, ExtractionError>,
) -> Vec<T>
where
    N: StructuredNode,
{
    cards
        .iter()
        .enumerate()
        .map(|(index, &card)| {
            extractor(card).unwrap_or_else(|e| {
                debug!(field, index, error = %e, "Using placeholder");
                placeholder()
            })
        })
        .collect()
}

/// Headline text of each card, trimmed.
pub fn extract_titles<N: StructuredNode>(cards: &[N]) -> Vec<Option<String>> {
    extract_with(cards, "title", || None, |card| {
        let h1 = descendant(card, "h1")?;
        Ok(Some(h1.text_content().trim().to_string()))
    })
}

/// Absolute story link of each card, with the tracking query removed.
pub fn extract_hrefs<N: StructuredNode>(cards: &[N], origin: &str) -> Vec<Option<String>> {
    extract_with(cards, "href", || None, |card| {
        let anchor = descendant(child_at(card, 1)?, "a")?;
        let href = attribute(&anchor, "href")?;
        Ok(Some(absolutize(strip_from(&href, HREF_TRACKING_MARKER), origin)))
    })
}

/// Publication each story appeared in, or `"Self"`.
pub fn extract_publications<N: StructuredNode>(cards: &[N]) -> Vec<String> {
    extract_with(cards, "publication", || SELF_PUBLISHED.to_string(), |card| {
        let line = child_at(byline(card)?, 0)?.text_content();
        line.split(PUBLICATION_SEPARATOR)
            .nth(1)
            .map(str::to_string)
            .ok_or(ExtractionError::MissingSegment {
                separator: PUBLICATION_SEPARATOR,
            })
    })
}

/// Publish date and read time of each card.
pub fn extract_meta<N: StructuredNode>(cards: &[N]) -> Vec<MetaTimeData> {
    extract_with(cards, "meta", MetaTimeData::default, |card| {
        let line = child_at(byline(card)?, 1)?.text_content();
        let (date, read_time) = split_meta(&line)?;
        Ok(MetaTimeData {
            date_published: Some(date.trim().to_string()),
            read_time: Some(read_time.trim().to_string()),
        })
    })
}

/// Preview image source of each card, without the quality query.
pub fn extract_images<N: StructuredNode>(cards: &[N]) -> Vec<Option<String>> {
    extract_with(cards, "image_src", || None, |card| {
        let img = descendant(child_at(card, 1)?, "img")?;
        let src = attribute(&img, "src")?;
        Ok(Some(strip_from(&src, IMAGE_QUALITY_MARKER).to_string()))
    })
}

/// Clap count of each card. Abbreviated counts such as `"1.2K"` are not
/// base-10 integers and yield `None`.
pub fn extract_applauds<N: StructuredNode>(cards: &[N]) -> Vec<Option<i64>> {
    extract_with(cards, "total_applauds", || None, |card| {
        let h4 = descendant(child_at(card, 2)?, "h4")?;
        let text = h4.text_content().trim().to_string();
        match text.parse::<i64>() {
            Ok(count) => Ok(Some(count)),
            Err(source) => Err(ExtractionError::InvalidNumber { text, source }),
        }
    })
}

/// The `[avatar, byline]` container three `div`s below the card, then its
/// second child.
fn byline<N: StructuredNode>(card: N) -> Result<N, ExtractionError> {
    let nested = descendant(descendant(descendant(card, "div")?, "div")?, "div")?;
    child_at(nested, 1)
}

fn split_meta(line: &str) -> Result<(&str, &str), ExtractionError> {
    let separator = META_SEPARATORS
        .iter()
        .find(|sep| line.contains(**sep))
        .ok_or(ExtractionError::SegmentCount { found: 1 })?;

    let parts: Vec<&str> = line.split(*separator).collect();
    match parts.as_slice() {
        [date, read_time] => Ok((*date, *read_time)),
        _ => Err(ExtractionError::SegmentCount { found: parts.len() }),
    }
}

/// Prefix relative links with `origin`; absolute links are left alone.
fn absolutize(href: &str, origin: &str) -> String {
    if href.starts_with("https://") || href.starts_with("http://") {
        href.to_string()
    } else {
        format!("{}{}", origin.trim_end_matches('/'), href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::fixtures::{bare_card, card, profile_page, two_card_page};
    use crate::extract::locate_cards;
    use scraper::Html;

    const ORIGIN: &str = "https://medium.com";

    fn single_card_page(byline: &str, meta: &str, applauds: &str) -> String {
        profile_page(&[card(
            "Fearless Concurrency",
            "/@jane/fearless-concurrency-5e6f?source=user_profile",
            byline,
            meta,
            "https://miro.medium.com/max/800/1*xyz.jpeg?q=20",
            applauds,
        )])
    }

    #[test]
    fn test_extract_with_keeps_alignment() {
        let document = Html::parse_document(&two_card_page());
        let cards = locate_cards(document.root_element());

        let values = extract_with(&cards, "test", || -1, |card| {
            if card.first_descendant("h1").unwrap().text_content().starts_with("Own") {
                Ok(1)
            } else {
                Err(ExtractionError::MissingElement { tag: "h1" })
            }
        });
        assert_eq!(values, vec![1, -1]);
    }

    #[test]
    fn test_empty_cards_yield_empty_fields() {
        let cards: Vec<scraper::ElementRef<'_>> = Vec::new();
        assert!(extract_titles(&cards).is_empty());
        assert!(extract_hrefs(&cards, ORIGIN).is_empty());
        assert!(extract_publications(&cards).is_empty());
        assert!(extract_meta(&cards).is_empty());
        assert!(extract_images(&cards).is_empty());
        assert!(extract_applauds(&cards).is_empty());
    }

    #[test]
    fn test_well_formed_cards() {
        let document = Html::parse_document(&two_card_page());
        let cards = locate_cards(document.root_element());
        assert_eq!(cards.len(), 2);

        assert_eq!(
            extract_titles(&cards),
            vec![
                Some("Ownership in Practice".to_string()),
                Some("Lifetimes Without Tears".to_string())
            ]
        );
        assert_eq!(
            extract_hrefs(&cards, ORIGIN),
            vec![
                Some("https://medium.com/@jane/ownership-in-practice-1a2b".to_string()),
                Some("https://medium.com/@jane/lifetimes-without-tears-3c4d".to_string())
            ]
        );
        assert_eq!(
            extract_publications(&cards),
            vec!["Better Programming".to_string(), "Self".to_string()]
        );
        assert_eq!(
            extract_meta(&cards),
            vec![
                MetaTimeData {
                    date_published: Some("Jan 3".to_string()),
                    read_time: Some("5 min read".to_string()),
                },
                MetaTimeData {
                    date_published: Some("Dec 12, 2019".to_string()),
                    read_time: Some("8 min read".to_string()),
                },
            ]
        );
        assert_eq!(
            extract_images(&cards),
            vec![
                Some("https://miro.medium.com/max/1400/1*abc.jpeg".to_string()),
                Some("https://miro.medium.com/max/1200/1*def.png".to_string())
            ]
        );
        assert_eq!(extract_applauds(&cards), vec![Some(42), None]);
    }

    #[test]
    fn test_title_is_trimmed() {
        let document = Html::parse_document(&profile_page(&[bare_card(
            "\n   Spaced   Out \t ",
            "/@jane/spaced",
        )]));
        let cards = locate_cards(document.root_element());
        assert_eq!(extract_titles(&cards), vec![Some("Spaced   Out".to_string())]);
    }

    #[test]
    fn test_bare_card_falls_back_per_field() {
        let document = Html::parse_document(&profile_page(&[
            bare_card("Raw notes", "/@jane/raw-notes-99"),
            crate::extract::fixtures::ownership_card(),
        ]));
        let cards = locate_cards(document.root_element());
        assert_eq!(cards.len(), 2);

        assert_eq!(
            extract_titles(&cards),
            vec![
                Some("Raw notes".to_string()),
                Some("Ownership in Practice".to_string())
            ]
        );
        assert_eq!(extract_hrefs(&cards, ORIGIN)[0], None);
        assert!(extract_hrefs(&cards, ORIGIN)[1].is_some());
        assert_eq!(extract_publications(&cards)[0], "Self");
        assert_eq!(extract_meta(&cards)[0], MetaTimeData::default());
        assert_eq!(extract_images(&cards)[0], None);
        assert_eq!(extract_applauds(&cards), vec![None, Some(42)]);
    }

    #[test]
    fn test_publication_without_separator_is_self() {
        let html = single_card_page("Jane Doe", "Jan 3 Â· 5 min read", "7");
        let document = Html::parse_document(&html);
        let cards = locate_cards(document.root_element());
        assert_eq!(extract_publications(&cards), vec!["Self".to_string()]);
    }

    #[test]
    fn test_publication_takes_second_segment_only() {
        let html = single_card_page("Jane in Rust in Action in Depth", "Jan 3 Â· 5 min read", "7");
        let document = Html::parse_document(&html);
        let cards = locate_cards(document.root_element());
        assert_eq!(extract_publications(&cards), vec!["Rust".to_string()]);
    }

    #[test]
    fn test_meta_without_separator_is_null() {
        let html = single_card_page("Jane Doe", "Jan 3, 5 min read", "7");
        let document = Html::parse_document(&html);
        let cards = locate_cards(document.root_element());
        assert_eq!(extract_meta(&cards), vec![MetaTimeData::default()]);
    }

    #[test]
    fn test_meta_accepts_decoded_middle_dot() {
        let html = single_card_page("Jane Doe", "  Mar 9 · 12 min read ", "7");
        let document = Html::parse_document(&html);
        let cards = locate_cards(document.root_element());
        assert_eq!(
            extract_meta(&cards),
            vec![MetaTimeData {
                date_published: Some("Mar 9".to_string()),
                read_time: Some("12 min read".to_string()),
            }]
        );
    }

    #[test]
    fn test_meta_with_extra_segments_is_null() {
        let html = single_card_page("Jane Doe", "Jan 3 Â· 5 min read Â· Member-only", "7");
        let document = Html::parse_document(&html);
        let cards = locate_cards(document.root_element());
        assert_eq!(extract_meta(&cards), vec![MetaTimeData::default()]);
    }

    #[test]
    fn test_applauds_parse() {
        for (text, expected) in [("42", Some(42)), ("  1280 ", Some(1280)), ("1.2K", None), ("", None)] {
            let html = single_card_page("Jane Doe", "Jan 3 Â· 5 min read", text);
            let document = Html::parse_document(&html);
            let cards = locate_cards(document.root_element());
            assert_eq!(extract_applauds(&cards), vec![expected], "applauds text {text:?}");
        }
    }

    #[test]
    fn test_split_meta() {
        assert_eq!(split_meta("Jan 3 Â· 5 min read").unwrap(), ("Jan 3", "5 min read"));
        assert_eq!(
            split_meta("Jan 3").unwrap_err(),
            ExtractionError::SegmentCount { found: 1 }
        );
        assert_eq!(
            split_meta("a Â· b Â· c").unwrap_err(),
            ExtractionError::SegmentCount { found: 3 }
        );
    }

    #[test]
    fn test_absolutize() {
        assert_eq!(
            absolutize("/@user/article-slug", ORIGIN),
            "https://medium.com/@user/article-slug"
        );
        assert_eq!(
            absolutize("https://medium.com/@user/article-slug", ORIGIN),
            "https://medium.com/@user/article-slug"
        );
        assert_eq!(
            absolutize("https://blog.example.com/post", ORIGIN),
            "https://blog.example.com/post"
        );
        assert_eq!(absolutize("/@u/a", "https://medium.com/"), "https://medium.com/@u/a");
    }

    #[test]
    fn test_href_post_processing() {
        let html = profile_page(&[card(
            "Slugged",
            "/@user/article-slug?source=abc",
            "Jane Doe",
            "Jan 3 Â· 5 min read",
            "x.png",
            "1",
        )]);
        let document = Html::parse_document(&html);
        let cards = locate_cards(document.root_element());
        assert_eq!(
            extract_hrefs(&cards, ORIGIN),
            vec![Some("https://medium.com/@user/article-slug".to_string())]
        );
    }
}
