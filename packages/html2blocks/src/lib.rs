//! html2blocks - Convert HTML documents into block editor blocks.
//!
//! This crate turns an HTML document into a flat, ordered list of block
//! records (`blockName`, `attrs`, `innerHTML`, `innerContent`) in the format
//! used by Gutenberg-style block editors.
//!
//! # Example
//!
//! ```
//! use html2blocks::{convert_html, ConvertOptions};
//!
//! let blocks = convert_html(
//!     r#"<h3 class="x">Hi</h3><ul><li>A</li><li>B</li></ul>"#,
//!     &ConvertOptions::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(blocks[0].block_name, "heading");
//! assert_eq!(blocks[0].attrs["level"], 3);
//! assert_eq!(blocks[1].attrs["values"], serde_json::json!(["A", "B"]));
//! ```
//!
//! # Architecture
//!
//! The converter is organized into several modules:
//!
//! - [`config`]: Conversion options, parse modes and validation
//! - [`types`]: The `Block` output record
//! - [`error`]: Error types and Result alias
//! - [`html`]: Node tree, HTML parsing and markup re-serialization
//! - [`registry`]: Tag classification, block handlers and the tree walker
//! - [`converter`]: Main converter service
//! - [`output`]: JSON/YAML rendering and file writing
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod converter;
pub mod error;
pub mod html;
pub mod output;
pub mod registry;
pub mod types;

// Re-export main functions
pub use converter::{convert_html, Conversion, Converter};

// Re-export commonly used items
pub use config::{ConvertOptions, ParseMode};
pub use error::{ConvertError, Result};
pub use types::{Attrs, Block};
