//! Source font handling
//!
//! Everything that reads the StardewXNBHack side of the conversion:
//! comment stripping, the typed font model, compound rectangle decoding
//! and the parser that ties them together.

pub mod comments;
pub mod metrics;
pub mod parser;
pub mod rect;


// Explicit re-exports for public API
pub use metrics::{Glyph, SourceFont};
pub use parser::{parse_commented_json, parse_source_font, REQUIRED_FIELDS};
pub use rect::{decode as decode_rect, Rect, RectError};
