//! Core data types for converted blocks.

use serde::Serialize;
use serde_json::{Map, Value};

/// Attribute bag of a block. Keys keep insertion order.
pub type Attrs = Map<String, Value>;

/// A single block record in the block editor's serialized format.
///
/// `inner_content` always holds exactly one chunk equal to `inner_html`;
/// [`Block::new`] is the only place that sets both.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Block type name, optionally namespaced (`paragraph`, `core/paragraph`).
    pub block_name: String,
    /// Structured attributes of the block.
    pub attrs: Attrs,
    /// Markup reconstructed from the source subtree.
    #[serde(rename = "innerHTML")]
    pub inner_html: String,
    /// Content chunks, a single copy of `inner_html`.
    pub inner_content: Vec<String>,
    /// Unique identifier within one conversion run, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

impl Block {
    /// Create a block without a client identifier.
    #[must_use]
    pub fn new(block_name: impl Into<String>, attrs: Attrs, inner_html: impl Into<String>) -> Self {
        let inner_html = inner_html.into();
        Self {
            block_name: block_name.into(),
            attrs,
            inner_content: vec![inner_html.clone()],
            inner_html,
            client_id: None,
        }
    }

    /// Attach a client identifier.
    #[must_use]
    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Get an attribute value by key.
    #[must_use]
    pub fn attr(&self, key: &str) -> Option<&Value> {
        self.attrs.get(key)
    }
}
