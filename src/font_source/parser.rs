//! Source font parsing
//!
//! Turns the text of a StardewXNBHack font definition into a [`SourceFont`].
//! Character ordering is not decided here; see [`crate::transcode`].

use serde::Deserialize;
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;
use tracing::debug;

use super::comments::strip_comments;
use super::metrics::{Glyph, SourceFont};
use crate::core::errors::{ConvertError, ConvertResult, DocumentKind};

/// Top-level fields every source font must define
pub const REQUIRED_FIELDS: [&str; 4] = ["LineSpacing", "Spacing", "DefaultCharacter", "Glyphs"];

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawMetrics {
    line_spacing: i32,
    spacing: i32,
    default_character: Option<String>,
    #[serde(default)]
    characters: Option<Vec<String>>,
}

// `Character` and `WidthIncludingBearings` are exported too but carry
// nothing xnbcli needs, so they are left to serde's unknown-field skipping.
#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawGlyph {
    bounds_in_texture: String,
    cropping: String,
    left_side_bearing: Number,
    width: Number,
    right_side_bearing: Number,
}

/// Parse JSON text that may contain `//`, `#` and `/* */` comments.
pub fn parse_commented_json(text: &str, document: DocumentKind) -> ConvertResult<Value> {
    let stripped = strip_comments(text).map_err(|err| ConvertError::Parse {
        document,
        message: err.to_string(),
        source: None,
    })?;

    serde_json::from_str(&stripped).map_err(|err| ConvertError::Parse {
        document,
        message: err.to_string(),
        source: Some(err),
    })
}

/// Parse a source font definition.
pub fn parse_source_font(text: &str) -> ConvertResult<SourceFont> {
    let value = parse_commented_json(text, DocumentKind::SourceFont)?;
    source_font_from_value(value)
}

/// Build a [`SourceFont`] from an already parsed JSON document.
pub fn source_font_from_value(value: Value) -> ConvertResult<SourceFont> {
    let Value::Object(mut root) = value else {
        return Err(schema("the document must be a JSON object"));
    };

    let missing: Vec<&str> = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|field| !root.contains_key(*field))
        .collect();
    if !missing.is_empty() {
        return Err(schema(format!(
            "missing required field(s): {}",
            missing.join(", ")
        )));
    }

    let glyphs_value = root.remove("Glyphs").unwrap_or(Value::Null);
    let Value::Object(glyph_entries) = glyphs_value else {
        return Err(schema("'Glyphs' must be an object keyed by character"));
    };

    let metrics: RawMetrics = serde_json::from_value(Value::Object(root))
        .map_err(|err| schema(err.to_string()))?;

    let default_character = metrics
        .default_character
        .as_deref()
        .map(|raw| single_char(raw, "DefaultCharacter"))
        .transpose()?;

    let characters = metrics
        .characters
        .map(|list| {
            list.iter()
                .map(|raw| single_char(raw, "an entry of Characters"))
                .collect::<ConvertResult<Vec<char>>>()
        })
        .transpose()?;

    let glyphs = parse_glyphs(glyph_entries)?;
    debug!(
        "Parsed source font: {} glyphs, line spacing {}, spacing {}",
        glyphs.len(),
        metrics.line_spacing,
        metrics.spacing
    );

    Ok(SourceFont {
        line_spacing: metrics.line_spacing,
        spacing: metrics.spacing,
        default_character,
        characters,
        glyphs,
    })
}

fn parse_glyphs(entries: Map<String, Value>) -> ConvertResult<BTreeMap<char, Glyph>> {
    let mut glyphs = BTreeMap::new();

    for (key, entry) in entries {
        let character = single_char(&key, "a Glyphs key")?;
        let raw: RawGlyph = serde_json::from_value(entry)
            .map_err(|err| schema(format!("glyph '{character}': {err}")))?;

        glyphs.insert(
            character,
            Glyph {
                bounds_in_texture: raw.bounds_in_texture,
                cropping: raw.cropping,
                left_side_bearing: raw.left_side_bearing,
                width: raw.width,
                right_side_bearing: raw.right_side_bearing,
            },
        );
    }

    Ok(glyphs)
}

fn single_char(raw: &str, what: &str) -> ConvertResult<char> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(schema(format!(
            "{what} must be exactly one character, found \"{raw}\""
        ))),
    }
}

fn schema(message: impl Into<String>) -> ConvertError {
    ConvertError::schema(DocumentKind::SourceFont, message)
}
