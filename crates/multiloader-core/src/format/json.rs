//! Manifest (JSON) serializer

use super::document::StructuredDocument;
use crate::error::FormatError;

/// Pretty-print with 2-space indentation, keys in insertion order
pub fn to_json(doc: &StructuredDocument) -> Result<String, FormatError> {
    let mut out = serde_json::to_string_pretty(doc)?;
    out.push('\n');
    Ok(out)
}
