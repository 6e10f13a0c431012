//! xnbcli header documents
//!
//! xnbcli needs the `header` and `readers` sections of an unpacked game
//! SpriteFont before it will pack a font. Users supply them once, with the
//! `content` section removed, and every conversion reuses them untouched.

use serde_json::{Map, Value};

use crate::core::errors::{ConvertError, ConvertResult, DocumentKind};
use crate::font_source::parse_commented_json;

/// Sections the header document must provide
pub const REQUIRED_SECTIONS: [&str; 2] = ["header", "readers"];

/// Key under which the converted font is merged
pub const CONTENT_KEY: &str = "content";

/// Opaque header fields, in the order they were written
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderDocument {
    fields: Map<String, Value>,
}

impl HeaderDocument {
    pub fn from_value(value: Value) -> ConvertResult<Self> {
        let Value::Object(fields) = value else {
            return Err(schema("the document must be a JSON object"));
        };

        for section in REQUIRED_SECTIONS {
            if !fields.contains_key(section) {
                return Err(schema(format!("missing '{section}' section")));
            }
        }

        if fields.contains_key(CONTENT_KEY) {
            return Err(schema(
                "found a 'content' section; remove it so only 'header' and 'readers' remain",
            ));
        }

        Ok(Self { fields })
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }
}

/// Parse header document text, which may contain comments.
pub fn parse_header(text: &str) -> ConvertResult<HeaderDocument> {
    HeaderDocument::from_value(parse_commented_json(text, DocumentKind::Header)?)
}

fn schema(message: impl Into<String>) -> ConvertError {
    ConvertError::schema(DocumentKind::Header, message)
}
