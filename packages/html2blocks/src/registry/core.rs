//! Block registry for mapping tag names to handlers.

use std::collections::{HashMap, HashSet};

use super::handler::BlockHandler;
use super::handlers::FallbackHandler;
use super::types::BlockKind;

/// Registry mapping tag names to block handlers.
///
/// Tag names are matched case-insensitively. Suppressed tags produce no
/// block; every other tag without a registered handler goes to the
/// fallback handler, so classification is total.
pub struct BlockRegistry {
    handlers: HashMap<String, Box<dyn BlockHandler>>,
    suppressed: HashSet<String>,
    fallback: Box<dyn BlockHandler>,
}

impl BlockRegistry {
    /// Create an empty registry that sends every tag to [`FallbackHandler`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            suppressed: HashSet::new(),
            fallback: Box::new(FallbackHandler),
        }
    }

    /// Replace the fallback handler.
    #[must_use]
    pub fn with_fallback(mut self, handler: impl BlockHandler + 'static) -> Self {
        self.fallback = Box::new(handler);
        self
    }

    /// Register a handler for a specific tag name.
    pub fn register(&mut self, tag_name: &str, handler: impl BlockHandler + 'static) {
        self.handlers
            .insert(tag_name.to_ascii_lowercase(), Box::new(handler));
    }

    /// Mark tags as suppressed (no block, children processed in their place).
    pub fn suppress<'t>(&mut self, tag_names: impl IntoIterator<Item = &'t str>) {
        for tag in tag_names {
            self.suppressed.insert(tag.to_ascii_lowercase());
        }
    }

    /// Classify a tag name.
    ///
    /// # Examples
    /// ```
    /// use html2blocks::registry::{create_block_registry, BlockKind};
    ///
    /// let registry = create_block_registry();
    /// assert_eq!(registry.classify("H2"), BlockKind::Heading);
    /// assert_eq!(registry.classify("div"), BlockKind::Suppressed);
    /// assert_eq!(registry.classify("table"), BlockKind::Fallback);
    /// ```
    #[must_use]
    pub fn classify(&self, tag_name: &str) -> BlockKind {
        match self.handler_for(tag_name) {
            Some(handler) => handler.kind(),
            None => BlockKind::Suppressed,
        }
    }

    /// Get the handler for a tag.
    ///
    /// Returns `None` if the tag is suppressed.
    #[must_use]
    pub fn handler_for(&self, tag_name: &str) -> Option<&dyn BlockHandler> {
        if self.is_suppressed(tag_name) {
            return None;
        }

        Some(
            self.handlers
                .get(&tag_name.to_ascii_lowercase())
                .map_or(self.fallback.as_ref(), |h| h.as_ref()),
        )
    }

    /// Check if a tag is suppressed.
    #[must_use]
    pub fn is_suppressed(&self, tag_name: &str) -> bool {
        self.suppressed.contains(&tag_name.to_ascii_lowercase())
    }
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::new()
    }
}
