//! Block handler trait definition.

use super::types::{BlockKind, ConvertContext};
use crate::html::Element;
use crate::types::Block;

/// Trait for block handlers.
///
/// A handler turns one element into exactly one block. Handlers never
/// recurse into the walker: nested markup ends up in the block's
/// `innerHTML` instead of becoming separate blocks.
pub trait BlockHandler: Send + Sync {
    /// Return the kind of block this handler produces.
    fn kind(&self) -> BlockKind;

    /// Build the block for an element.
    ///
    /// # Arguments
    /// * `element` - The element to convert
    /// * `context` - State of the current conversion run
    fn build(&self, element: &Element, context: &mut ConvertContext) -> Block;
}
