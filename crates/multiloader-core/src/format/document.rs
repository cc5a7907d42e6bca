//! Structured documents: the ordered key/value form generators hand to formatters
//!
//! Sequences are tagged as either scalar sequences or document sequences, so a
//! formatter never has to guess whether `[...]` is an array of values or an
//! array of tables. Homogeneity is checked when a sequence is built.

use crate::error::FormatError;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// A leaf value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    String(String),
    Boolean(bool),
    Integer(i64),
    Float(f64),
}

impl fmt::Display for Scalar {
    /// Config-language rendering: strings quoted verbatim, everything else bare
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::String(s) => write!(f, "\"{}\"", s),
            Scalar::Boolean(b) => write!(f, "{}", b),
            Scalar::Integer(i) => write!(f, "{}", i),
            Scalar::Float(x) if x.is_nan() => f.write_str("nan"),
            Scalar::Float(x) if x.is_infinite() => {
                f.write_str(if x.is_sign_negative() { "-inf" } else { "inf" })
            }
            Scalar::Float(x) if x.fract() == 0.0 => write!(f, "{:.1}", x),
            Scalar::Float(x) => write!(f, "{}", x),
        }
    }
}

/// A value stored under a document key
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Scalar(Scalar),
    ScalarSequence(Vec<Scalar>),
    DocumentSequence(Vec<StructuredDocument>),
    Document(StructuredDocument),
}

impl Value {
    /// Build a sequence from loose values, rejecting mixed or nested sequences
    ///
    /// An empty input becomes an empty scalar sequence.
    pub fn sequence(key: &str, items: Vec<Value>) -> Result<Value, FormatError> {
        let all_scalars = items.iter().all(|v| matches!(v, Value::Scalar(_)));
        let all_documents = items.iter().all(|v| matches!(v, Value::Document(_)));

        if all_scalars {
            Ok(Value::ScalarSequence(
                items
                    .into_iter()
                    .filter_map(|v| match v {
                        Value::Scalar(s) => Some(s),
                        _ => None,
                    })
                    .collect(),
            ))
        } else if all_documents {
            Ok(Value::DocumentSequence(
                items
                    .into_iter()
                    .filter_map(|v| match v {
                        Value::Document(d) => Some(d),
                        _ => None,
                    })
                    .collect(),
            ))
        } else if items
            .iter()
            .any(|v| matches!(v, Value::ScalarSequence(_) | Value::DocumentSequence(_)))
        {
            Err(FormatError::Unsupported {
                key: key.to_string(),
                reason: "nested sequences",
            })
        } else {
            Err(FormatError::MixedSequence {
                key: key.to_string(),
            })
        }
    }

    /// Sequence of string scalars
    pub fn strings<I, S>(items: I) -> Value
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Value::ScalarSequence(
            items
                .into_iter()
                .map(|s| Scalar::String(s.into()))
                .collect(),
        )
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Scalar(Scalar::String(value.to_string()))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Scalar(Scalar::String(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Scalar(Scalar::Boolean(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Scalar(Scalar::Integer(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Scalar(Scalar::Float(value))
    }
}

impl From<StructuredDocument> for Value {
    fn from(value: StructuredDocument) -> Self {
        Value::Document(value)
    }
}

impl From<Vec<StructuredDocument>> for Value {
    fn from(value: Vec<StructuredDocument>) -> Self {
        Value::DocumentSequence(value)
    }
}

/// An ordered mapping from keys to values
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StructuredDocument {
    entries: IndexMap<String, Value>,
}

impl StructuredDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, keeping insertion order
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a value; an existing key keeps its position and takes the new value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl TryFrom<serde_json::Value> for StructuredDocument {
    type Error = FormatError;

    /// Convert an arbitrary JSON object, classifying every array
    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::Object(map) => {
                let mut doc = StructuredDocument::new();
                for (key, value) in map {
                    let converted = convert_json(&key, value)?;
                    doc.insert(key, converted);
                }
                Ok(doc)
            }
            _ => Err(FormatError::Unsupported {
                key: String::new(),
                reason: "top level must be an object",
            }),
        }
    }
}

fn convert_json(key: &str, value: serde_json::Value) -> Result<Value, FormatError> {
    match value {
        serde_json::Value::Null => Err(FormatError::Unsupported {
            key: key.to_string(),
            reason: "null values",
        }),
        serde_json::Value::Bool(b) => Ok(b.into()),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Ok(i.into()),
            None => n.as_f64().map(Value::from).ok_or(FormatError::Unsupported {
                key: key.to_string(),
                reason: "numbers outside the i64/f64 range",
            }),
        },
        serde_json::Value::String(s) => Ok(s.into()),
        serde_json::Value::Array(items) => {
            let items = items
                .into_iter()
                .map(|item| convert_json(key, item))
                .collect::<Result<Vec<_>, _>>()?;
            Value::sequence(key, items)
        }
        object @ serde_json::Value::Object(_) => {
            StructuredDocument::try_from(object).map(Value::Document)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sequence_of_scalars() {
        let seq = Value::sequence("b", vec![1i64.into(), 2i64.into()]).unwrap();
        assert_eq!(
            seq,
            Value::ScalarSequence(vec![Scalar::Integer(1), Scalar::Integer(2)])
        );
    }

    #[test]
    fn test_sequence_of_documents() {
        let doc = StructuredDocument::new().with("k", "v");
        let seq = Value::sequence("t", vec![doc.clone().into(), doc.into()]).unwrap();
        assert!(matches!(seq, Value::DocumentSequence(ref d) if d.len() == 2));
    }

    #[test]
    fn test_mixed_sequence_rejected() {
        let doc = StructuredDocument::new().with("k", "v");
        let err = Value::sequence("mixed", vec!["a".into(), doc.into()]).unwrap_err();
        assert!(matches!(err, FormatError::MixedSequence { key } if key == "mixed"));
    }

    #[test]
    fn test_json_conversion_keeps_order() {
        let doc = StructuredDocument::try_from(json!({
            "z": 1,
            "a": "x",
            "m": {"inner": true}
        }))
        .unwrap();
        let keys: Vec<&str> = doc.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_json_conversion_rejects_mixed_array() {
        let err = StructuredDocument::try_from(json!({"k": ["a", {"b": 1}]})).unwrap_err();
        assert!(matches!(err, FormatError::MixedSequence { .. }));
    }

    #[test]
    fn test_json_conversion_rejects_null_and_nested_arrays() {
        assert!(matches!(
            StructuredDocument::try_from(json!({"k": null})),
            Err(FormatError::Unsupported { .. })
        ));
        assert!(matches!(
            StructuredDocument::try_from(json!({"k": [[1], [2]]})),
            Err(FormatError::Unsupported { .. })
        ));
    }

    #[test]
    fn test_floats_keep_their_kind() {
        assert_eq!(Scalar::Float(1.0).to_string(), "1.0");
        assert_eq!(Scalar::Float(-3.0).to_string(), "-3.0");
        assert_eq!(Scalar::Float(0.25).to_string(), "0.25");
        assert_eq!(Scalar::Float(f64::NAN).to_string(), "nan");
        assert_eq!(Scalar::Float(f64::INFINITY).to_string(), "inf");
        assert_eq!(Scalar::Float(f64::NEG_INFINITY).to_string(), "-inf");
    }

    #[test]
    fn test_insert_existing_key_keeps_position() {
        let mut doc = StructuredDocument::new().with("a", 1i64).with("b", 2i64);
        doc.insert("a", 3i64);
        let keys: Vec<&str> = doc.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(doc.get("a"), Some(&Value::from(3i64)));
    }
}
