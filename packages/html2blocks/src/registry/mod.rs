//! Block registry system for converting HTML elements to blocks.
//!
//! Block handlers are registered for specific tag names. Tags marked as
//! suppressed contribute only their children, and everything else falls
//! through to an HTML block, so every element in the input is accounted for.

mod attributes;
mod config;
mod core;
mod engine;
mod handler;
pub mod handlers;
mod types;

pub use attributes::{preserve_attributes, PreservedAttributes};
pub use config::{create_block_registry, HEADING_TAGS, SUPPRESSED_TAGS};
pub use self::core::BlockRegistry;
pub use engine::ConvertEngine;
pub use handler::BlockHandler;
pub use types::{BlockKind, ConvertContext};
