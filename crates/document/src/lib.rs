//! Generic structured-document model for the `json-coding` combinator core.
//!
//! A [`Document`] is a tree of null / bool / number / string / array / object
//! nodes. Object entries are an ordered list of `(key, value)` pairs, so
//! insertion order survives a round trip through the serializer — downstream
//! formatting depends on that.
//!
//! The combinator core never touches serialized bytes. This crate owns the
//! boundary instead: `From` conversions to and from [`serde_json::Value`]
//! (built with `preserve_order`) and the string-level helpers
//! [`from_json_str`] / [`to_json_string`] / [`to_json_string_pretty`].
//!
//! # Example
//!
//! ```
//! use json_coding_document::{from_json_str, Document, Kind};
//!
//! let doc = from_json_str(r#"{"name": "Oliver", "age": 3}"#).unwrap();
//! assert_eq!(doc.kind(), Kind::Object);
//! assert_eq!(doc.get("name"), Some(&Document::Str("Oliver".to_owned())));
//! assert_eq!(doc.get("age"), Some(&Document::Integer(3)));
//! ```

use std::fmt;

/// A generic structured-document node.
///
/// Objects are ordered `(key, value)` pair lists with unique keys; both entry
/// order and array element order are preserved through construction and the
/// serde_json boundary. Values are immutable once constructed — there is no
/// mutation API.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    /// JSON null
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer number (fits in i64)
    Integer(i64),
    /// Floating-point number
    Float(f64),
    /// String
    Str(String),
    /// Ordered sequence of documents
    Array(Vec<Document>),
    /// Ordered key-value pairs (keys unique, insertion order preserved)
    Object(Vec<(String, Document)>),
}

/// The shape of a [`Document`] node, for error reporting.
///
/// `Integer` and `Float` nodes both report [`Kind::Number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Null,
    Bool,
    Number,
    Str,
    Array,
    Object,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Null => "null",
            Kind::Bool => "boolean",
            Kind::Number => "number",
            Kind::Str => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        };
        f.write_str(name)
    }
}

impl Document {
    /// The [`Kind`] of this node.
    pub fn kind(&self) -> Kind {
        match self {
            Document::Null => Kind::Null,
            Document::Bool(_) => Kind::Bool,
            Document::Integer(_) | Document::Float(_) => Kind::Number,
            Document::Str(_) => Kind::Str,
            Document::Array(_) => Kind::Array,
            Document::Object(_) => Kind::Object,
        }
    }

    /// Looks up `key` in an object node. Returns `None` for non-object nodes
    /// and for absent keys.
    ///
    /// # Example
    ///
    /// ```
    /// use json_coding_document::Document;
    ///
    /// let doc = Document::Object(vec![("a".to_owned(), Document::Bool(true))]);
    /// assert_eq!(doc.get("a"), Some(&Document::Bool(true)));
    /// assert_eq!(doc.get("b"), None);
    /// assert_eq!(Document::Null.get("a"), None);
    /// ```
    pub fn get(&self, key: &str) -> Option<&Document> {
        match self {
            Document::Object(entries) => {
                entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
            }
            _ => None,
        }
    }
}

impl From<serde_json::Value> for Document {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Document::Null,
            serde_json::Value::Bool(b) => Document::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Document::Integer(i)
                } else {
                    // u64 above i64::MAX and non-integral numbers both land
                    // here; the u64 case is lossy past 2^53.
                    Document::Float(n.as_f64().unwrap_or(0.0))
                }
            }
            serde_json::Value::String(s) => Document::Str(s),
            serde_json::Value::Array(arr) => {
                Document::Array(arr.into_iter().map(Document::from).collect())
            }
            serde_json::Value::Object(obj) => Document::Object(
                obj.into_iter()
                    .map(|(k, v)| (k, Document::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Document> for serde_json::Value {
    fn from(doc: Document) -> Self {
        match doc {
            Document::Null => serde_json::Value::Null,
            Document::Bool(b) => serde_json::Value::Bool(b),
            Document::Integer(i) => serde_json::json!(i),
            // Non-finite floats have no JSON representation; Value::from
            // maps them to null.
            Document::Float(f) => serde_json::Value::from(f),
            Document::Str(s) => serde_json::Value::String(s),
            Document::Array(items) => serde_json::Value::Array(
                items.into_iter().map(serde_json::Value::from).collect(),
            ),
            Document::Object(entries) => serde_json::Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Parses a JSON string into a [`Document`] via serde_json.
pub fn from_json_str(s: &str) -> Result<Document, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(s)?;
    Ok(Document::from(value))
}

/// Renders a [`Document`] as compact JSON.
pub fn to_json_string(doc: &Document) -> Result<String, serde_json::Error> {
    serde_json::to_string(&serde_json::Value::from(doc.clone()))
}

/// Renders a [`Document`] as pretty-printed JSON.
pub fn to_json_string_pretty(doc: &Document) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&serde_json::Value::from(doc.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obj(fields: &[(&str, Document)]) -> Document {
        Document::Object(
            fields
                .iter()
                .map(|(k, v)| ((*k).to_owned(), v.clone()))
                .collect(),
        )
    }

    #[test]
    fn kind_reporting() {
        assert_eq!(Document::Null.kind(), Kind::Null);
        assert_eq!(Document::Bool(true).kind(), Kind::Bool);
        assert_eq!(Document::Integer(7).kind(), Kind::Number);
        assert_eq!(Document::Float(0.5).kind(), Kind::Number);
        assert_eq!(Document::Str("x".into()).kind(), Kind::Str);
        assert_eq!(Document::Array(vec![]).kind(), Kind::Array);
        assert_eq!(Document::Object(vec![]).kind(), Kind::Object);
    }

    #[test]
    fn kind_display_names() {
        assert_eq!(Kind::Number.to_string(), "number");
        assert_eq!(Kind::Str.to_string(), "string");
        assert_eq!(Kind::Object.to_string(), "object");
    }

    #[test]
    fn object_lookup() {
        let doc = obj(&[
            ("a", Document::Integer(1)),
            ("b", Document::Str("two".into())),
        ]);
        assert_eq!(doc.get("a"), Some(&Document::Integer(1)));
        assert_eq!(doc.get("b"), Some(&Document::Str("two".into())));
        assert_eq!(doc.get("c"), None);
        assert_eq!(Document::Array(vec![]).get("a"), None);
    }

    #[test]
    fn object_order_survives_json_round_trip() {
        let json = r#"{"z": 1, "a": 2, "m": 3}"#;
        let doc = from_json_str(json).expect("parse");
        let keys: Vec<&str> = match &doc {
            Document::Object(entries) => entries.iter().map(|(k, _)| k.as_str()).collect(),
            other => panic!("expected object, got {other:?}"),
        };
        assert_eq!(keys, vec!["z", "a", "m"]);
        assert_eq!(to_json_string(&doc).expect("render"), r#"{"z":1,"a":2,"m":3}"#);
    }

    #[test]
    fn array_order_preserved() {
        let doc = from_json_str("[3, 1, 2]").expect("parse");
        assert_eq!(
            doc,
            Document::Array(vec![
                Document::Integer(3),
                Document::Integer(1),
                Document::Integer(2),
            ])
        );
    }

    #[test]
    fn number_split_integer_vs_float() {
        assert_eq!(from_json_str("42").expect("parse"), Document::Integer(42));
        assert_eq!(from_json_str("-9").expect("parse"), Document::Integer(-9));
        assert_eq!(from_json_str("1.5").expect("parse"), Document::Float(1.5));
        // u64 above i64::MAX falls back to float
        let doc = from_json_str("18446744073709551615").expect("parse");
        assert_eq!(doc.kind(), Kind::Number);
        assert!(matches!(doc, Document::Float(_)));
    }

    #[test]
    fn value_round_trip_preserves_structure() {
        let value = serde_json::json!({
            "id": "80699353-5c77-4607-ba73-78544e267656",
            "tags": ["a", "b"],
            "nested": {"ok": true, "n": null}
        });
        let doc = Document::from(value.clone());
        let back = serde_json::Value::from(doc);
        assert_eq!(back, value);
    }
}
