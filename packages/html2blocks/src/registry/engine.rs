//! Convert engine that walks the node tree using the registry.

use super::core::BlockRegistry;
use super::types::ConvertContext;
use crate::html::Node;
use crate::types::Block;

/// Engine that flattens a node tree into a block sequence.
///
/// Top-level text nodes are skipped. Each element either becomes exactly
/// one block through its handler, or, when suppressed, is replaced by the
/// blocks of its children. Document order is preserved.
pub struct ConvertEngine {
    registry: BlockRegistry,
}

impl ConvertEngine {
    /// Create a new engine with the given registry.
    #[must_use]
    pub fn new(registry: BlockRegistry) -> Self {
        Self { registry }
    }

    /// Flatten a list of nodes into blocks.
    ///
    /// # Arguments
    /// * `nodes` - Sibling nodes in document order
    /// * `context` - State of the current conversion run
    ///
    /// # Returns
    /// Blocks in document order, with suppressed containers spliced out
    pub fn flatten(&self, nodes: &[Node], context: &mut ConvertContext) -> Vec<Block> {
        let mut blocks = Vec::new();
        self.flatten_into(nodes, context, &mut blocks);
        blocks
    }

    fn flatten_into(
        &self,
        nodes: &[Node],
        context: &mut ConvertContext,
        blocks: &mut Vec<Block>,
    ) {
        for node in nodes {
            let Node::Element(element) = node else {
                continue;
            };

            match self.registry.handler_for(&element.name) {
                Some(handler) => blocks.push(handler.build(element, context)),
                None => {
                    tracing::trace!(tag = %element.name, "Flattening suppressed container");
                    self.flatten_into(&element.children, context, blocks);
                }
            }
        }
    }
}
