use std::num::ParseIntError;

/// Why a single field could not be read from a single card.
///
/// These never escape the extractors; each one is replaced by the field's
/// placeholder value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractionError {
    #[error("<{parent}> has no element child at index {index}")]
    MissingChild { parent: String, index: usize },
    #[error("no <{tag}> descendant")]
    MissingElement { tag: &'static str },
    #[error("missing attribute `{name}`")]
    MissingAttribute { name: &'static str },
    #[error("text has no segment after {separator:?}")]
    MissingSegment { separator: &'static str },
    #[error("expected 2 segments around the byline separator, found {found}")]
    SegmentCount { found: usize },
    #[error("not a base-10 integer: {text:?}")]
    InvalidNumber {
        text: String,
        #[source]
        source: ParseIntError,
    },
}
