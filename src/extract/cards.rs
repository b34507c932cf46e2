//! Card discovery.
//!
//! Profile pages expose no stable class names or ids for article summaries.
//! What is stable is the shape: every story in the stream is a link wrapping
//! an `<h1>` headline, sitting two levels below the card container. A card is
//! therefore found by pairing anchors with headlines and climbing to the
//! anchor's grandparent.

use super::node::StructuredNode;
use tracing::debug;

/// Locate article cards under `root`, in document order.
///
/// Every `(anchor, headline)` pair for which the headline's text occurs in
/// the markup of the anchor's first `<h1>` emits the anchor's grandparent.
/// Pairs are visited anchor-major, so a card can appear more than once when
/// several headlines match the same anchor; duplicates are kept.
///
/// Anchors are `<a>` elements with a non-empty `href`. Anchors without an
/// `<h1>` or without a grandparent element never produce a card.
pub fn locate_cards<N: StructuredNode>(root: N) -> Vec<N> {
    let anchors: Vec<N> = root
        .descendants_named("a")
        .into_iter()
        .filter(|a| a.attribute("href").is_some_and(|href| !href.is_empty()))
        .collect();
    let headlines: Vec<String> = root
        .descendants_named("h1")
        .iter()
        .map(StructuredNode::text_content)
        .collect();

    let mut cards = Vec::new();
    for anchor in &anchors {
        let Some(wrapped) = anchor.first_descendant("h1").map(|h1| h1.markup()) else {
            continue;
        };
        let Some(card) = anchor.parent_element().and_then(|p| p.parent_element()) else {
            continue;
        };
        for headline in &headlines {
            if wrapped.contains(headline.as_str()) {
                cards.push(card);
            }
        }
    }

    debug!(
        anchors = anchors.len(),
        headlines = headlines.len(),
        cards = cards.len(),
        "Located article cards"
    );
    cards
}
