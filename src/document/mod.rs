//! The xnbcli side of the conversion
//!
//! Loading the header document, merging the transcoded font into it and
//! serialising the result.

pub mod assemble;
pub mod emit;
pub mod header;

pub use assemble::{assemble, Content, TargetDocument, Texture, TEXTURE_EXTENSION};
pub use emit::to_json;
pub use header::{parse_header, HeaderDocument, CONTENT_KEY};
