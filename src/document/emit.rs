//! Output serialisation

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;

use super::assemble::TargetDocument;
use crate::core::errors::{ConvertError, ConvertResult};

/// Indentation of emitted documents
pub const INDENT: &[u8] = b"    ";

/// Serialise a document as indented JSON with a trailing newline.
///
/// Output is deterministic: the same document always yields the same bytes.
pub fn to_json(document: &TargetDocument) -> ConvertResult<String> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    document.serialize(&mut serializer).map_err(ConvertError::Emit)?;
    buffer.push(b'\n');

    // serde_json only ever writes UTF-8
    String::from_utf8(buffer).map_err(|err| {
        ConvertError::Emit(serde::ser::Error::custom(err.to_string()))
    })
}
