//! Encoding combinator algebra.
//!
//! An [`Encoding<T>`] wraps a pure function from a `&T` to a [`Document`]
//! node. Leaf constructors write primitive nodes; `with_key` places a leaf
//! under a field key, `pullback` projects a whole-object encoder out of a
//! field encoder, and `combine` merges keyed encoders into one object.
//! Encoding is total apart from the `combine` modeling-bug cases
//! ([`EncodeError::KeyCollision`] and [`EncodeError::Unkeyed`]); no
//! value-dependent failure exists.

use std::sync::Arc;

use json_coding_document::Document;
use uuid::Uuid;

use crate::error::EncodeError;
use crate::key::CodingKey;

/// A reusable encoder producing a [`Document`] node from a `&T`.
pub struct Encoding<T: 'static> {
    run: Arc<dyn Fn(&T) -> Result<Document, EncodeError> + Send + Sync>,
}

impl<T: 'static> Clone for Encoding<T> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}

impl<T: 'static> Encoding<T> {
    /// Wraps a raw encode function. Prefer the leaf constructors and
    /// combinators; this is the escape hatch for custom leaves.
    pub fn new(f: impl Fn(&T) -> Result<Document, EncodeError> + Send + Sync + 'static) -> Self {
        Self { run: Arc::new(f) }
    }

    /// Runs this encoding against a value.
    pub fn encode(&self, value: &T) -> Result<Document, EncodeError> {
        (self.run)(value)
    }

    /// Places this encoding's output under `key` in a fresh single-entry
    /// object node.
    pub fn with_key(self, key: impl CodingKey) -> Self {
        let key = key.as_str();
        Self::new(move |value| {
            let node = self.encode(value)?;
            Ok(Document::Object(vec![(key.to_owned(), node)]))
        })
    }

    /// Derives an `Encoding<W>` from this field encoding plus a total
    /// accessor that produces the field value out of the whole.
    ///
    /// The accessor typically clones the field
    /// (`|user: &User| user.name.clone()`).
    pub fn pullback<W: 'static>(
        self,
        accessor: impl Fn(&W) -> T + Send + Sync + 'static,
    ) -> Encoding<W> {
        Encoding::new(move |whole| self.encode(&accessor(whole)))
    }

    /// Lifts an element encoding over `Vec<T>`, producing an array node in
    /// element order. An empty input yields an empty array node, not null.
    pub fn array_of(element: Encoding<T>) -> Encoding<Vec<T>> {
        Encoding::new(move |items: &Vec<T>| {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(element.encode(item)?);
            }
            Ok(Document::Array(out))
        })
    }

    /// Merges several keyed encodings of the same value into one object
    /// node. Entries land in argument order.
    ///
    /// Every member must emit an object node ([`EncodeError::Unkeyed`]
    /// otherwise), and a duplicate key is [`EncodeError::KeyCollision`] —
    /// never a silent overwrite, since it indicates a modeling bug.
    pub fn combine(encodings: impl IntoIterator<Item = Encoding<T>>) -> Encoding<T> {
        let encodings: Vec<Encoding<T>> = encodings.into_iter().collect();
        Encoding::new(move |value| {
            let mut entries: Vec<(String, Document)> = Vec::new();
            for encoding in &encodings {
                match encoding.encode(value)? {
                    Document::Object(fields) => {
                        for (key, node) in fields {
                            if entries.iter().any(|(k, _)| *k == key) {
                                return Err(EncodeError::KeyCollision(key));
                            }
                            entries.push((key, node));
                        }
                    }
                    other => return Err(EncodeError::Unkeyed(other.kind())),
                }
            }
            Ok(Document::Object(entries))
        })
    }
}

impl Encoding<bool> {
    /// Writes a boolean node.
    pub fn bool() -> Self {
        Self::new(|v| Ok(Document::Bool(*v)))
    }
}

impl Encoding<i64> {
    /// Writes an integer node.
    pub fn integer() -> Self {
        Self::new(|v| Ok(Document::Integer(*v)))
    }
}

impl Encoding<f64> {
    /// Writes a float node.
    pub fn float() -> Self {
        Self::new(|v| Ok(Document::Float(*v)))
    }
}

impl Encoding<String> {
    /// Writes a string node.
    pub fn string() -> Self {
        Self::new(|v: &String| Ok(Document::Str(v.clone())))
    }
}

impl Encoding<Uuid> {
    /// Writes a UUID as a hyphenated string node.
    pub fn uuid() -> Self {
        Self::new(|v: &Uuid| Ok(Document::Str(v.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EncodeError;
    use json_coding_document::Kind;

    crate::coding_keys! {
        enum Keys {
            Id => "id",
            Name => "name",
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Tag {
        name: String,
    }

    fn tag_encoding() -> Encoding<Tag> {
        Encoding::string()
            .with_key(Keys::Name)
            .pullback(|t: &Tag| t.name.clone())
    }

    #[test]
    fn leaf_encoders_write_expected_nodes() {
        assert_eq!(Encoding::bool().encode(&true), Ok(Document::Bool(true)));
        assert_eq!(
            Encoding::integer().encode(&-7),
            Ok(Document::Integer(-7))
        );
        assert_eq!(Encoding::float().encode(&0.5), Ok(Document::Float(0.5)));
        assert_eq!(
            Encoding::string().encode(&"hi".to_owned()),
            Ok(Document::Str("hi".to_owned()))
        );
    }

    #[test]
    fn with_key_wraps_in_single_entry_object() {
        let keyed = Encoding::string().with_key(Keys::Name);
        assert_eq!(
            keyed.encode(&"Ben".to_owned()),
            Ok(Document::Object(vec![(
                "name".to_owned(),
                Document::Str("Ben".to_owned())
            )]))
        );
    }

    #[test]
    fn pullback_projects_the_field() {
        let tag = Tag {
            name: "Oliver".to_owned(),
        };
        assert_eq!(
            tag_encoding().encode(&tag),
            Ok(Document::Object(vec![(
                "name".to_owned(),
                Document::Str("Oliver".to_owned())
            )]))
        );
    }

    #[test]
    fn array_of_preserves_order_and_handles_empty() {
        let ints = Encoding::array_of(Encoding::integer());
        assert_eq!(
            ints.encode(&vec![3, 1, 2]),
            Ok(Document::Array(vec![
                Document::Integer(3),
                Document::Integer(1),
                Document::Integer(2),
            ]))
        );
        assert_eq!(ints.encode(&vec![]), Ok(Document::Array(vec![])));
    }

    #[test]
    fn combine_merges_in_argument_order() {
        let id = Encoding::integer()
            .with_key(Keys::Id)
            .pullback(|&(id, _): &(i64, String)| id);
        let name = Encoding::string()
            .with_key(Keys::Name)
            .pullback(|(_, name): &(i64, String)| name.clone());
        let pair = Encoding::combine([id, name]);
        assert_eq!(
            pair.encode(&(7, "Ben".to_owned())),
            Ok(Document::Object(vec![
                ("id".to_owned(), Document::Integer(7)),
                ("name".to_owned(), Document::Str("Ben".to_owned())),
            ]))
        );
    }

    #[test]
    fn combine_rejects_duplicate_keys() {
        let first = Encoding::string()
            .with_key(Keys::Name)
            .pullback(|t: &Tag| t.name.clone());
        let second = Encoding::string()
            .with_key(Keys::Name)
            .pullback(|t: &Tag| t.name.to_uppercase());
        let collision = Encoding::combine([first, second]);
        assert_eq!(
            collision.encode(&Tag {
                name: "Oliver".to_owned()
            }),
            Err(EncodeError::KeyCollision("name".to_owned()))
        );
    }

    #[test]
    fn combine_rejects_unkeyed_members() {
        let bare = Encoding::string().pullback(|t: &Tag| t.name.clone());
        let combined = Encoding::combine([bare]);
        assert_eq!(
            combined.encode(&Tag {
                name: "Oliver".to_owned()
            }),
            Err(EncodeError::Unkeyed(Kind::Str))
        );
    }
}
