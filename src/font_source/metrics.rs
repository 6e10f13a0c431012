//! Source font metrics
//!
//! Typed model of a StardewXNBHack (MonoGame layout) sprite font
//! definition: a handful of scalar metrics plus one glyph per character.

use serde_json::Number;
use std::collections::BTreeMap;

/// One character's metrics as exported by StardewXNBHack
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    /// Compound rectangle string locating the glyph in the texture
    pub bounds_in_texture: String,
    /// Compound rectangle string for the glyph's cropping box
    pub cropping: String,
    pub left_side_bearing: Number,
    pub width: Number,
    pub right_side_bearing: Number,
}

/// A parsed sprite font definition
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFont {
    pub line_spacing: i32,
    pub spacing: i32,
    /// `None` when the font declares no default character
    pub default_character: Option<char>,
    /// Explicit emission order, present only in the legacy layout
    pub characters: Option<Vec<char>>,
    /// Glyphs keyed by character; iteration is in code point order
    pub glyphs: BTreeMap<char, Glyph>,
}

impl SourceFont {
    /// Characters in code point order
    pub fn sorted_characters(&self) -> Vec<char> {
        self.glyphs.keys().copied().collect()
    }

    pub fn glyph(&self, character: char) -> Option<&Glyph> {
        self.glyphs.get(&character)
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }
}
