//! Image block handler.

use serde_json::Value;

use crate::html::{outer_html, Element};
use crate::registry::attributes::{preserve_attributes, PreservedAttributes};
use crate::registry::types::{BlockKind, ConvertContext};
use crate::registry::BlockHandler;
use crate::types::{Attrs, Block};

/// Handler for `<img>` elements.
///
/// Unlike the text handlers, the stored markup includes the `<img>` tag
/// itself. `width` and `height` become numbers when they start with digits
/// and are left out otherwise.
pub struct ImageHandler;

impl BlockHandler for ImageHandler {
    fn kind(&self) -> BlockKind {
        BlockKind::Image
    }

    fn build(&self, element: &Element, context: &mut ConvertContext) -> Block {
        let PreservedAttributes { attrs: preserved, .. } = preserve_attributes(element);

        let mut attrs = Attrs::new();
        attrs.insert(
            "url".to_string(),
            Value::from(element.attribute("src").unwrap_or_default()),
        );
        attrs.insert(
            "alt".to_string(),
            Value::from(element.attribute("alt").unwrap_or_default()),
        );
        attrs.extend(preserved);

        for name in ["width", "height"] {
            let Some(raw) = element.attribute(name) else {
                continue;
            };
            match parse_dimension(raw) {
                Some(value) => {
                    attrs.insert(name.to_string(), Value::from(value));
                }
                None => {
                    tracing::debug!(
                        attribute = name,
                        value = raw,
                        "Non-numeric image dimension, omitting"
                    );
                    attrs.shift_remove(name);
                }
            }
        }

        context.block("image", attrs, outer_html(element))
    }
}

/// Parse a dimension attribute as a leading integer.
///
/// Surrounding whitespace and a sign are accepted, parsing stops at the
/// first non-digit (`"100px"` gives 100). Returns `None` when no digits lead.
///
/// # Examples
/// ```
/// use html2blocks::registry::handlers::parse_dimension;
///
/// assert_eq!(parse_dimension("100"), Some(100));
/// assert_eq!(parse_dimension(" 640px"), Some(640));
/// assert_eq!(parse_dimension("auto"), None);
/// ```
#[must_use]
pub fn parse_dimension(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let value: i64 = rest[..end].parse().ok()?;

    Some(if negative { -value } else { value })
}
