//! Output document assembly
//!
//! Builds the xnbcli SpriteFont document from a header document and a
//! transcoded font. The header is consumed; the result is a new document.

use serde::Serialize;
use serde_json::{Map, Value};

use super::header::HeaderDocument;
use crate::font_source::Rect;
use crate::transcode::{Kerning, Transcoded};

/// Extension of the texture xnbcli expects next to the output document
pub const TEXTURE_EXTENSION: &str = "png";

/// The `texture` entry of `content`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Texture {
    /// Surface format code, passed through unchanged
    pub format: i32,
    /// File name of the sprite sheet, relative to the output document
    pub export: String,
}

impl Texture {
    /// Texture entry for an output document named `<output_stem>.json`
    pub fn for_output(format: i32, output_stem: &str) -> Self {
        Self {
            format,
            export: format!("{output_stem}.{TEXTURE_EXTENSION}"),
        }
    }
}

/// The `content` section xnbcli reads a SpriteFont from
///
/// Fields serialise in declaration order. xnbcli rejects the font unless
/// `texture` comes first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub texture: Texture,
    pub glyphs: Vec<Rect>,
    pub cropping: Vec<Rect>,
    pub character_map: Vec<char>,
    pub vertical_line_spacing: i32,
    pub horizontal_spacing: i32,
    pub kerning: Vec<Kerning>,
    pub default_character: Option<char>,
}

impl Content {
    pub fn new(texture: Texture, font: Transcoded) -> Self {
        Self {
            texture,
            glyphs: font.glyphs,
            cropping: font.cropping,
            character_map: font.character_map,
            vertical_line_spacing: font.vertical_line_spacing,
            horizontal_spacing: font.horizontal_spacing,
            kerning: font.kerning,
            default_character: font.default_character,
        }
    }
}

/// A complete xnbcli-packable document: header sections followed by `content`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetDocument {
    #[serde(flatten)]
    header: Map<String, Value>,
    content: Content,
}

impl TargetDocument {
    pub fn header_fields(&self) -> &Map<String, Value> {
        &self.header
    }

    pub fn content(&self) -> &Content {
        &self.content
    }
}

/// Merge a transcoded font into a header document.
pub fn assemble(header: HeaderDocument, font: Transcoded, texture: Texture) -> TargetDocument {
    TargetDocument {
        header: header.into_fields(),
        content: Content::new(texture, font),
    }
}
