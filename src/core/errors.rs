//! Error types for the conversion pipeline
//!
//! Every failure that aborts a run is a [`ConvertError`]. The non-fatal
//! consistency condition (characters listed without glyphs) is reported
//! through [`crate::transcode::Transcoded::skipped`] instead.

use std::path::PathBuf;
use thiserror::Error;

use crate::font_source::rect::RectError;

/// Which input document an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Header,
    SourceFont,
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentKind::Header => write!(f, "header document"),
            DocumentKind::SourceFont => write!(f, "source font"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input text is not well-formed (commented) JSON
    #[error("{document} is not valid JSON: {message}")]
    Parse {
        document: DocumentKind,
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// A required field is missing or has the wrong shape
    #[error("{document} does not match the expected layout: {message}")]
    Schema {
        document: DocumentKind,
        message: String,
    },

    /// A compound rectangle string could not be decoded
    #[error("glyph '{character}' has a malformed {field} value \"{raw}\": {source}")]
    Format {
        character: char,
        field: &'static str,
        raw: String,
        #[source]
        source: RectError,
    },

    /// A listed character has no glyph and strict mode is on
    #[error("character '{character}' is listed in Characters but has no entry in Glyphs")]
    MissingGlyph { character: char },

    #[error("failed to serialize the output document: {0}")]
    Emit(#[source] serde_json::Error),

    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The external packer could not be run or reported failure
    #[error("packing failed: {0}")]
    Pack(String),
}

impl ConvertError {
    pub(crate) fn schema(document: DocumentKind, message: impl Into<String>) -> Self {
        ConvertError::Schema {
            document,
            message: message.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConvertError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;
