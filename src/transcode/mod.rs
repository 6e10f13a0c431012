//! Field transcoding
//!
//! xnbcli's SpriteFont layout does not key glyphs by character. It wants
//! parallel arrays (`glyphs`, `cropping`, `kerning`) whose entry `i`
//! describes `characterMap[i]`. This module reduces the character-keyed
//! glyph dictionary of a [`SourceFont`] into that positional layout.

use serde::{Deserialize, Serialize};
use serde_json::Number;
use tracing::{debug, info, warn};

use crate::core::errors::{ConvertError, ConvertResult, DocumentKind};
use crate::font_source::rect::{self, Rect};
use crate::font_source::SourceFont;

/// How the emission order of characters is decided
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterOrder {
    /// Glyph keys sorted by code point
    #[default]
    Sorted,
    /// The font's own `Characters` list, verbatim (legacy exports)
    Listed,
}

/// What to do with a listed character that has no glyph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingGlyphs {
    /// Keep it in `characterMap`, emit no metrics for it
    #[default]
    Skip,
    /// Abort the conversion
    Error,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranscodeOptions {
    pub order: CharacterOrder,
    pub missing: MissingGlyphs,
}

/// Packed spacing for one glyph: left bearing, right bearing, advance width
///
/// Values keep the number exactly as the source wrote it, so `0.0` stays a
/// float and `3` stays an integer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kerning {
    pub x: Number,
    pub y: Number,
    pub z: Number,
}

/// The positional form of a font, ready to be merged into a header document
#[derive(Debug, Clone, PartialEq)]
pub struct Transcoded {
    pub glyphs: Vec<Rect>,
    pub cropping: Vec<Rect>,
    pub kerning: Vec<Kerning>,
    pub character_map: Vec<char>,
    pub vertical_line_spacing: i32,
    pub horizontal_spacing: i32,
    pub default_character: Option<char>,
    /// Listed characters that had no glyph, in emission order
    pub skipped: Vec<char>,
}

impl Transcoded {
    /// True when every metric array has one entry per `characterMap` entry
    pub fn is_aligned(&self) -> bool {
        let len = self.character_map.len();
        self.glyphs.len() == len && self.cropping.len() == len && self.kerning.len() == len
    }
}

/// Work out the order in which characters are emitted.
pub fn emission_order(font: &SourceFont, order: CharacterOrder) -> ConvertResult<Vec<char>> {
    match order {
        CharacterOrder::Sorted => {
            if font.characters.is_some() {
                warn!("Ignoring the font's Characters list; glyphs are emitted in code point order");
            }
            Ok(font.sorted_characters())
        }
        CharacterOrder::Listed => font.characters.clone().ok_or_else(|| {
            ConvertError::schema(
                DocumentKind::SourceFont,
                "listed character order was requested but the font has no 'Characters' list",
            )
        }),
    }
}

/// Convert a parsed font into xnbcli's positional arrays.
///
/// Any malformed rectangle aborts the whole conversion; nothing partial is
/// returned.
pub fn transcode(font: &SourceFont, options: &TranscodeOptions) -> ConvertResult<Transcoded> {
    let character_map = emission_order(font, options.order)?;

    let mut glyphs = Vec::with_capacity(character_map.len());
    let mut cropping = Vec::with_capacity(character_map.len());
    let mut kerning = Vec::with_capacity(character_map.len());
    let mut skipped = Vec::new();

    for &character in &character_map {
        let Some(glyph) = font.glyph(character) else {
            match options.missing {
                MissingGlyphs::Skip => {
                    skipped.push(character);
                    continue;
                }
                MissingGlyphs::Error => return Err(ConvertError::MissingGlyph { character }),
            }
        };

        glyphs.push(decode_field(character, "BoundsInTexture", &glyph.bounds_in_texture)?);
        cropping.push(decode_field(character, "Cropping", &glyph.cropping)?);
        kerning.push(Kerning {
            x: glyph.left_side_bearing.clone(),
            y: glyph.right_side_bearing.clone(),
            z: glyph.width.clone(),
        });
        debug!("Transcoded glyph {:?}", character);
    }

    // Mirrors what earlier exports produced, so it is reported, not fixed
    if !skipped.is_empty() {
        warn!(
            "{} listed character(s) have no glyph and were left out of the metric arrays: {:?}. \
             characterMap has {} entries but glyphs/cropping/kerning have {}",
            skipped.len(),
            skipped,
            character_map.len(),
            glyphs.len()
        );
    }

    info!(
        "Transcoded {} glyph(s) in {:?} order",
        glyphs.len(),
        options.order
    );

    Ok(Transcoded {
        glyphs,
        cropping,
        kerning,
        character_map,
        vertical_line_spacing: font.line_spacing,
        horizontal_spacing: font.spacing,
        default_character: font.default_character,
        skipped,
    })
}

fn decode_field(character: char, field: &'static str, raw: &str) -> ConvertResult<Rect> {
    rect::decode(raw).map_err(|source| ConvertError::Format {
        character,
        field,
        raw: raw.to_string(),
        source,
    })
}
