//! Types for the block registry system.

use crate::config::{ConvertOptions, CLIENT_ID_PREFIX};
use crate::types::{Attrs, Block};

/// Classification of elements by the block they produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// `<p>` elements.
    Paragraph,
    /// `<h1>` through `<h6>`.
    Heading,
    /// `<ul>` and `<ol>`.
    List,
    /// `<img>`.
    Image,
    /// Containers with no block of their own; their children take their place.
    Suppressed,
    /// Anything else, kept as raw HTML.
    Fallback,
}

/// State owned by a single conversion run.
///
/// Holds the block naming settings and the counter that numbers every block
/// built during the run. Each run gets its own context, so independent
/// conversions never share identifiers.
#[derive(Debug, Clone, Default)]
pub struct ConvertContext {
    namespace: Option<String>,
    client_ids: bool,
    counter: usize,
}

impl ConvertContext {
    /// Create a context with bare block names and no client identifiers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context from conversion options.
    #[must_use]
    pub fn from_options(options: &ConvertOptions) -> Self {
        Self {
            namespace: options.namespace.clone(),
            client_ids: options.client_ids,
            counter: 0,
        }
    }

    /// Set the block namespace.
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Enable or disable client identifiers.
    #[must_use]
    pub fn with_client_ids(mut self, enabled: bool) -> Self {
        self.client_ids = enabled;
        self
    }

    /// Qualify a block name with the configured namespace.
    #[must_use]
    pub fn block_name(&self, name: &str) -> String {
        match &self.namespace {
            Some(namespace) => format!("{namespace}/{name}"),
            None => name.to_string(),
        }
    }

    /// Build a block and count it.
    pub fn block(&mut self, name: &str, attrs: Attrs, inner_html: String) -> Block {
        self.counter += 1;
        let block = Block::new(self.block_name(name), attrs, inner_html);
        tracing::debug!(block = %block.block_name, index = self.counter, "Built block");

        if self.client_ids {
            block.with_client_id(format!("{CLIENT_ID_PREFIX}-{}", self.counter))
        } else {
            block
        }
    }

    /// Number of blocks built so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.counter
    }
}
