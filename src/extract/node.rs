//! Positional tree navigation over parsed markup.
//!
//! The card locator and field extractors only ever need a handful of
//! capabilities from a document node: its tag, its element children in order,
//! its parent, a descendant search by tag, attribute lookup, text content, and
//! its serialized markup. [`StructuredNode`] captures exactly that, and
//! [`scraper::ElementRef`] is the implementation used in practice.
//!
//! The `child_at`, `descendant` and `attribute` helpers turn a missing step in
//! the navigation path into an [`ExtractionError`] so extractors can chain
//! them with `?`.

use super::error::ExtractionError;
use scraper::ElementRef;

/// Read-only capabilities the extraction pipeline needs from a markup node.
///
/// Element children are indexed positionally; text and comment nodes do not
/// take up an index.
pub trait StructuredNode: Copy {
    /// Lowercase tag name, e.g. `"div"`.
    fn tag_name(&self) -> &str;

    /// Direct element children in document order.
    fn element_children(&self) -> Vec<Self>;

    /// The parent element, if the parent is an element.
    fn parent_element(&self) -> Option<Self>;

    /// All descendant elements (excluding `self`) with the given tag, in
    /// document order.
    fn descendants_named(&self, tag: &str) -> Vec<Self>;

    fn attribute(&self, name: &str) -> Option<&str>;

    /// Concatenated text of all descendant text nodes, untrimmed.
    fn text_content(&self) -> String;

    /// Serialized outer markup of this element. Only `&`, `<` and `>` are
    /// escaped in text.
    fn markup(&self) -> String;

    /// First descendant with the given tag.
    fn first_descendant(&self, tag: &str) -> Option<Self> {
        self.descendants_named(tag).into_iter().next()
    }

    /// Element child at `index`.
    fn child(&self, index: usize) -> Option<Self> {
        self.element_children().into_iter().nth(index)
    }
}

impl<'a> StructuredNode for ElementRef<'a> {
    fn tag_name(&self) -> &str {
        self.value().name()
    }

    fn element_children(&self) -> Vec<Self> {
        self.children().filter_map(ElementRef::wrap).collect()
    }

    fn parent_element(&self) -> Option<Self> {
        self.parent().and_then(ElementRef::wrap)
    }

    fn descendants_named(&self, tag: &str) -> Vec<Self> {
        self.descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .filter(|el| el.value().name() == tag)
            .collect()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }

    fn text_content(&self) -> String {
        self.text().collect()
    }

    fn markup(&self) -> String {
        // html5ever writes U+00A0 as `&nbsp;`; keep it raw so it compares
        // equal to text content.
        self.html().replace("&nbsp;", "\u{a0}")
    }

    fn first_descendant(&self, tag: &str) -> Option<Self> {
        self.descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .find(|el| el.value().name() == tag)
    }

    fn child(&self, index: usize) -> Option<Self> {
        self.children().filter_map(ElementRef::wrap).nth(index)
    }
}

/// Element child at `index`, or [`ExtractionError::MissingChild`].
pub fn child_at<N: StructuredNode>(node: N, index: usize) -> Result<N, ExtractionError> {
    node.child(index).ok_or_else(|| ExtractionError::MissingChild {
        parent: node.tag_name().to_string(),
        index,
    })
}

/// First descendant tagged `tag`, or [`ExtractionError::MissingElement`].
pub fn descendant<N: StructuredNode>(node: N, tag: &'static str) -> Result<N, ExtractionError> {
    node.first_descendant(tag)
        .ok_or(ExtractionError::MissingElement { tag })
}

/// Value of attribute `name`, or [`ExtractionError::MissingAttribute`].
pub fn attribute<N: StructuredNode>(node: &N, name: &'static str) -> Result<String, ExtractionError> {
    node.attribute(name)
        .map(str::to_string)
        .ok_or(ExtractionError::MissingAttribute { name })
}
