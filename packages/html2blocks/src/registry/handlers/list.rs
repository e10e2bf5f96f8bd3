//! List block handler.

use serde_json::Value;

use crate::html::{inner_html, Element};
use crate::registry::attributes::{preserve_attributes, PreservedAttributes};
use crate::registry::types::{BlockKind, ConvertContext};
use crate::registry::BlockHandler;
use crate::types::{Attrs, Block};

/// Handler for `<ul>` and `<ol>` elements.
///
/// `values` holds the inner markup of each direct `<li>` child. Nested
/// lists stay inside their parent item's markup and never become blocks
/// of their own.
pub struct ListHandler;

impl BlockHandler for ListHandler {
    fn kind(&self) -> BlockKind {
        BlockKind::List
    }

    fn build(&self, element: &Element, context: &mut ConvertContext) -> Block {
        let PreservedAttributes { attrs: preserved, .. } = preserve_attributes(element);
        let html = inner_html(element);

        let values: Vec<Value> = element
            .find_children("li")
            .map(|item| Value::from(inner_html(item)))
            .collect();

        let mut attrs = Attrs::new();
        attrs.insert("ordered".to_string(), Value::Bool(element.has_tag("ol")));
        attrs.insert("values".to_string(), Value::Array(values));
        attrs.extend(preserved);

        context.block("list", attrs, html)
    }
}
