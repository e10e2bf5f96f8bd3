//! Markup re-serialization of node subtrees.
//!
//! Output is rebuilt purely from the tree: tag names and attribute values
//! are emitted exactly as stored, text is passed through without escaping,
//! and every element gets a closing tag (there is no void-element case).

use super::node::{Element, Node};

/// Serialize a node and its descendants.
///
/// With `include_own_tag` false the node's own tag is omitted and only its
/// children are emitted. Text nodes always serialize to their payload.
///
/// # Examples
/// ```
/// use html2blocks::html::{serialize, Element, Node};
///
/// let node = Node::from(
///     Element::new("p")
///         .with_attr("class", "lead")
///         .with_child(Element::new("em").with_text("Hi")),
/// );
/// assert_eq!(serialize(&node, true), r#"<p class="lead"><em>Hi</em></p>"#);
/// assert_eq!(serialize(&node, false), "<em>Hi</em>");
/// ```
#[must_use]
pub fn serialize(node: &Node, include_own_tag: bool) -> String {
    let mut out = String::new();
    write_node(node, include_own_tag, &mut out);
    out
}

/// Serialize an element's children without its own tag.
#[must_use]
pub fn inner_html(element: &Element) -> String {
    let mut out = String::new();
    write_element(element, false, &mut out);
    out
}

/// Serialize an element including its own tag.
#[must_use]
pub fn outer_html(element: &Element) -> String {
    let mut out = String::new();
    write_element(element, true, &mut out);
    out
}

fn write_node(node: &Node, include_own_tag: bool, out: &mut String) {
    match node {
        Node::Text(data) => out.push_str(data),
        Node::Element(element) => write_element(element, include_own_tag, out),
    }
}

fn write_element(element: &Element, include_own_tag: bool, out: &mut String) {
    if include_own_tag {
        out.push('<');
        out.push_str(&element.name);
        for (key, value) in &element.attrs {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
        out.push('>');
    }

    for child in &element.children {
        write_node(child, true, out);
    }

    if include_own_tag {
        out.push_str("</");
        out.push_str(&element.name);
        out.push('>');
    }
}
