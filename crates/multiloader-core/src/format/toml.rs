//! Config-language (TOML-like) serializer
//!
//! Keys are written verbatim: a key such as `dependencies."${project_id}"`
//! is emitted exactly as given, without quoting or escaping. Generators rely on
//! this to write dotted/quoted table names.

use super::document::{Scalar, StructuredDocument, Value};

/// Serialize a document in insertion order
pub fn to_toml(doc: &StructuredDocument) -> String {
    let mut out = String::new();
    write_document(&mut out, doc, &[]);
    let mut out = out.trim_end().to_string();
    out.push('\n');
    out
}

fn write_document(out: &mut String, doc: &StructuredDocument, path: &[&str]) {
    for (key, value) in doc.iter() {
        match value {
            Value::Scalar(scalar) => {
                out.push_str(&format!("{} = {}\n", key, scalar));
            }
            Value::ScalarSequence(items) => {
                out.push_str(&format!("{} = [{}]\n", key, join_scalars(items)));
            }
            Value::DocumentSequence(tables) => {
                let header = qualified(path, key);
                for table in tables {
                    start_header(out);
                    out.push_str(&format!("[[{}]]\n", header));
                    // Elements are written at top level, not under the header prefix
                    write_document(out, table, &[]);
                }
            }
            Value::Document(nested) => {
                if nested.is_empty() {
                    continue;
                }
                start_header(out);
                out.push_str(&format!("[{}]\n", qualified(path, key)));
                let nested_path: Vec<&str> =
                    path.iter().copied().chain(std::iter::once(key)).collect();
                write_document(out, nested, &nested_path);
            }
        }
    }
}

fn join_scalars(items: &[Scalar]) -> String {
    items
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn qualified(path: &[&str], key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path.join("."), key)
    }
}

/// Separate a header from preceding content with one blank line
fn start_header(out: &mut String) {
    if !out.is_empty() && !out.ends_with("\n\n") {
        out.push('\n');
    }
}
