//! HTML tree model, parsing and re-serialization.
//!
//! The conversion core never looks at raw markup. It walks an owned tree of
//! [`Node`] values produced by [`parse_html`] and rebuilds markup strings from
//! subtrees with [`serialize`].

mod node;
mod parse;
mod serialize;

pub use node::{Element, Node};
pub use parse::{parse_html, ParseOutcome};
pub use serialize::{inner_html, outer_html, serialize};
