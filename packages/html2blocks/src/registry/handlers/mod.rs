//! Block handlers, one per supported block type.

mod fallback;
mod list;
mod media;
mod text;

pub use fallback::*;
pub use list::*;
pub use media::*;
pub use text::*;
