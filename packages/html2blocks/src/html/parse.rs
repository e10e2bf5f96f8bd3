//! HTML parsing via html5ever into the owned [`Node`] tree.
//!
//! html5ever always builds a full document (`html`, `head`, `body`). In
//! fragment mode the synthesized wrappers are unwrapped again so the caller
//! sees the top-level nodes of the input the way a non-wrapping parser would.

use html5ever::driver::ParseOpts;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::{parse_document, QualName};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use super::node::{Element, Node};
use crate::config::ParseMode;

/// Result of parsing an HTML string.
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    /// Top-level nodes in document order.
    pub nodes: Vec<Node>,
    /// Recoverable errors reported by the parser.
    pub errors: Vec<String>,
}

/// Parse HTML into a list of top-level nodes.
///
/// Comments, doctypes and processing instructions are dropped; only text
/// and element nodes survive. Parsing itself never fails, malformed markup
/// is repaired by html5ever and reported in [`ParseOutcome::errors`].
///
/// # Examples
/// ```
/// use html2blocks::config::ParseMode;
/// use html2blocks::html::parse_html;
///
/// let outcome = parse_html("<p>Hello</p>", ParseMode::Fragment);
/// assert_eq!(outcome.nodes.len(), 1);
/// assert_eq!(outcome.nodes[0].as_element().unwrap().name, "p");
/// ```
pub fn parse_html(input: &str, mode: ParseMode) -> ParseOutcome {
    let document_mode = match mode {
        ParseMode::Auto => looks_like_document(input),
        ParseMode::Document => true,
        ParseMode::Fragment => false,
    };

    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            // Fragments carry no doctype; don't report that as an error.
            iframe_srcdoc: !document_mode,
            ..Default::default()
        },
        ..Default::default()
    };
    let dom = parse_document(RcDom::default(), opts).one(input);

    let errors: Vec<String> = dom.errors.borrow().iter().map(|e| e.to_string()).collect();
    for error in &errors {
        tracing::debug!(error = %error, "HTML parser recovered from error");
    }

    let nodes = if document_mode {
        let mut nodes = convert_children(&dom.document);
        drop_implied_head(&mut nodes);
        nodes
    } else {
        unwrap_fragment(&dom.document)
    };

    ParseOutcome { nodes, errors }
}

/// Check whether input starts like a full HTML document.
fn looks_like_document(input: &str) -> bool {
    let start = input.trim_start_matches('\u{feff}').trim_start();
    let prefix: String = start.chars().take(9).collect::<String>().to_ascii_lowercase();
    prefix.starts_with("<!doctype") || prefix.starts_with("<html")
}

/// Remove the empty `head` html5ever inserts when the input has none.
///
/// A `head` with attributes or children came from the source and is kept.
fn drop_implied_head(nodes: &mut [Node]) {
    for node in nodes.iter_mut() {
        if let Node::Element(root) = node {
            if root.has_tag("html") {
                root.children.retain(|child| !child.as_element().is_some_and(is_implied_head));
            }
        }
    }
}

fn is_implied_head(element: &Element) -> bool {
    element.has_tag("head") && element.attrs.is_empty() && element.children.is_empty()
}

/// Collect the contents of the synthesized `head` and `body` elements.
fn unwrap_fragment(document: &Handle) -> Vec<Node> {
    let mut nodes = Vec::new();

    for child in document.children.borrow().iter() {
        if local_name(child) != Some("html") {
            continue;
        }
        for section in child.children.borrow().iter() {
            match local_name(section) {
                Some("head") | Some("body") => nodes.extend(convert_children(section)),
                _ => nodes.extend(convert_handle(section)),
            }
        }
    }

    nodes
}

fn local_name(handle: &Handle) -> Option<&str> {
    match &handle.data {
        NodeData::Element { name, .. } => Some(&*name.local),
        _ => None,
    }
}

fn convert_children(parent: &Handle) -> Vec<Node> {
    parent
        .children
        .borrow()
        .iter()
        .filter_map(convert_handle)
        .collect()
}

fn convert_handle(handle: &Handle) -> Option<Node> {
    match &handle.data {
        NodeData::Text { contents } => Some(Node::Text(contents.borrow().to_string())),
        NodeData::Element {
            name,
            attrs,
            template_contents,
            ..
        } => {
            let attrs = attrs
                .borrow()
                .iter()
                .map(|attr| (attribute_name(&attr.name), attr.value.to_string()))
                .collect();
            let children = match template_contents.borrow().as_ref() {
                Some(contents) => convert_children(contents),
                None => convert_children(handle),
            };
            Some(Node::Element(Element {
                name: name.local.to_string(),
                attrs,
                children,
            }))
        }
        NodeData::Document
        | NodeData::Doctype { .. }
        | NodeData::Comment { .. }
        | NodeData::ProcessingInstruction { .. } => None,
    }
}

/// Render an attribute name, keeping a namespace prefix like `xlink:href`.
fn attribute_name(name: &QualName) -> String {
    match &name.prefix {
        Some(prefix) => format!("{prefix}:{}", name.local),
        None => name.local.to_string(),
    }
}
