//! Compound rectangle decoding
//!
//! MonoGame serialises a `Rectangle` as a single string such as
//! `{X:24 Y:0 Width:12 Height:20}`. xnbcli wants discrete integer fields,
//! so every such string goes through [`decode`] before it is emitted.

use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

/// Keys a compound rectangle must carry, in serialised order
pub const RECT_KEYS: [&str; 4] = ["X", "Y", "Width", "Height"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RectError {
    #[error("expected the value to be wrapped in '{{' and '}}'")]
    MissingBraces,

    #[error("expected 4 space-separated Key:Value tokens, found {0}")]
    TokenCount(usize),

    #[error("token \"{0}\" must contain exactly one ':'")]
    BadToken(String),

    #[error("value of {key} is not an integer: \"{value}\"")]
    NotAnInteger { key: String, value: String },

    #[error("unknown key \"{0}\" (expected X, Y, Width or Height)")]
    UnknownKey(String),

    #[error("key {0} appears more than once")]
    DuplicateKey(String),
}

/// A decoded rectangle, serialised in xnbcli's lower-case layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Split a compound rectangle into its raw key/value pairs.
///
/// Only the shape is checked here: braces, token count, one `:` per token
/// and integer values. Key names are checked by [`decode`].
pub fn decode_pairs(raw: &str) -> Result<HashMap<String, i32>, RectError> {
    let inner = raw
        .trim()
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .ok_or(RectError::MissingBraces)?;

    let tokens: Vec<&str> = inner.split_whitespace().collect();
    if tokens.len() != RECT_KEYS.len() {
        return Err(RectError::TokenCount(tokens.len()));
    }

    let mut pairs = HashMap::with_capacity(tokens.len());
    for token in tokens {
        let (key, value) = match token.split_once(':') {
            Some((key, value)) if !key.is_empty() && !value.contains(':') => (key, value),
            _ => return Err(RectError::BadToken(token.to_string())),
        };

        // Decimal fractions are valid elsewhere in the document but not here
        let parsed = value
            .parse::<i32>()
            .map_err(|_| RectError::NotAnInteger {
                key: key.to_string(),
                value: value.to_string(),
            })?;

        if pairs.insert(key.to_string(), parsed).is_some() {
            return Err(RectError::DuplicateKey(key.to_string()));
        }
    }

    Ok(pairs)
}

/// Decode a compound rectangle string into a [`Rect`].
pub fn decode(raw: &str) -> Result<Rect, RectError> {
    let pairs = decode_pairs(raw)?;

    if let Some(unknown) = pairs.keys().find(|key| !RECT_KEYS.contains(&key.as_str())) {
        return Err(RectError::UnknownKey(unknown.clone()));
    }

    // Four distinct known keys out of four tokens means every key is present
    let field = |key: &str| pairs.get(key).copied().unwrap_or_default();
    Ok(Rect {
        x: field("X"),
        y: field("Y"),
        width: field("Width"),
        height: field("Height"),
    })
}
