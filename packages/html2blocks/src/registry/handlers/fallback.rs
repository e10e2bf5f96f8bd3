//! Fallback handler for elements without a dedicated block type.

use serde_json::Value;

use crate::html::{outer_html, Element};
use crate::registry::types::{BlockKind, ConvertContext};
use crate::registry::BlockHandler;
use crate::types::{Attrs, Block};

/// Handler that keeps an element verbatim in an HTML block.
///
/// The full markup, own tag and attributes included, is stored both as
/// `innerHTML` and in the `content` attribute.
pub struct FallbackHandler;

impl BlockHandler for FallbackHandler {
    fn kind(&self) -> BlockKind {
        BlockKind::Fallback
    }

    fn build(&self, element: &Element, context: &mut ConvertContext) -> Block {
        let html = outer_html(element);

        let mut attrs = Attrs::new();
        attrs.insert("content".to_string(), Value::from(html.as_str()));

        context.block("html", attrs, html)
    }
}
