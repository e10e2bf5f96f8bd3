//! Text block handlers for paragraphs and headings.
//!
//! Both keep the element's children as `innerHTML` (own tag stripped) and
//! repeat that markup in the `content` attribute.

use serde_json::Value;

use crate::html::{inner_html, Element};
use crate::registry::attributes::{preserve_attributes, PreservedAttributes};
use crate::registry::types::{BlockKind, ConvertContext};
use crate::registry::BlockHandler;
use crate::types::{Attrs, Block};

/// Handler for `<p>` elements.
pub struct ParagraphHandler;

impl BlockHandler for ParagraphHandler {
    fn kind(&self) -> BlockKind {
        BlockKind::Paragraph
    }

    fn build(&self, element: &Element, context: &mut ConvertContext) -> Block {
        let PreservedAttributes { mut attrs, .. } = preserve_attributes(element);
        let html = inner_html(element);

        attrs.insert("content".to_string(), Value::from(html.as_str()));

        context.block("paragraph", attrs, html)
    }
}

/// Handler for `<h1>` through `<h6>` elements.
///
/// The level comes from the digit after the `h`. An element whose tag has
/// no such digit gets a heading block without `level`.
pub struct HeadingHandler;

impl BlockHandler for HeadingHandler {
    fn kind(&self) -> BlockKind {
        BlockKind::Heading
    }

    fn build(&self, element: &Element, context: &mut ConvertContext) -> Block {
        let PreservedAttributes { attrs: preserved, .. } = preserve_attributes(element);
        let html = inner_html(element);

        let mut attrs = Attrs::new();
        match heading_level(&element.name) {
            Some(level) => {
                attrs.insert("level".to_string(), Value::from(level));
            }
            None => {
                tracing::debug!(tag = %element.name, "No heading level in tag name, omitting");
            }
        }
        attrs.extend(preserved);
        attrs.insert("content".to_string(), Value::from(html.as_str()));

        context.block("heading", attrs, html)
    }
}

/// Parse the heading level from a tag name (`h2` gives 2).
///
/// # Examples
/// ```
/// use html2blocks::registry::handlers::heading_level;
///
/// assert_eq!(heading_level("h3"), Some(3));
/// assert_eq!(heading_level("H1"), Some(1));
/// assert_eq!(heading_level("header"), None);
/// ```
#[must_use]
pub fn heading_level(tag_name: &str) -> Option<u8> {
    let digits = tag_name
        .strip_prefix('h')
        .or_else(|| tag_name.strip_prefix('H'))?;
    digits.parse().ok()
}
