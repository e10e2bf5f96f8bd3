//! Registry configuration for block editor conversion.

use super::core::BlockRegistry;
use super::handlers::{HeadingHandler, ImageHandler, ListHandler, ParagraphHandler};

/// Heading tags, `h1` through `h6`.
pub const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Container tags that produce no block of their own.
///
/// Their children are converted in their place:
///   - html/body: document wrappers
///   - div/article/section: generic layout containers
pub const SUPPRESSED_TAGS: [&str; 5] = ["body", "html", "div", "article", "section"];

/// Create a registry with the standard block mappings.
///
/// Tags not listed here become HTML blocks via the fallback handler.
#[must_use]
pub fn create_block_registry() -> BlockRegistry {
    let mut registry = BlockRegistry::new();

    registry.register("p", ParagraphHandler);
    for tag in HEADING_TAGS {
        registry.register(tag, HeadingHandler);
    }
    registry.register("ul", ListHandler);
    registry.register("ol", ListHandler);
    registry.register("img", ImageHandler);

    registry.suppress(SUPPRESSED_TAGS);

    registry
}
