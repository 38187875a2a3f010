//! `json-coding` — composable, type-safe encode/decode combinators.
//!
//! # Overview
//!
//! User code declares per-field leaf combinators keyed by a field name,
//! combines them into whole-object combinators, and hands the result to the
//! top-level [`encode`] / [`decode`] entry points. Both algebras operate on
//! the generic [`Document`] tree from `json-coding-document`; parsing and
//! rendering bytes is that crate's boundary, never this one's.
//!
//! A `Decoding<T>` and an `Encoding<T>` for the same `T` are declared
//! independently — round-trip correctness is a property to test, not a
//! structural guarantee.
//!
//! All combinators are pure, stateless, `Send + Sync`, and cheaply
//! cloneable; any number of encode/decode calls may run concurrently over
//! shared combinator values.
//!
//! # Example
//!
//! ```
//! use json_coding::{decode, encode, Decoding, Document, Encoding};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Pet {
//!     name: String,
//! }
//!
//! json_coding::coding_keys! {
//!     enum PetKeys {
//!         Name => "name",
//!     }
//! }
//!
//! let decoding = Decoding::string()
//!     .with_key(PetKeys::Name)
//!     .map(|name| Pet { name });
//! let encoding = Encoding::combine([Encoding::string()
//!     .with_key(PetKeys::Name)
//!     .pullback(|pet: &Pet| pet.name.clone())]);
//!
//! let pet = Pet { name: "Oliver".to_owned() };
//! let doc = encode(&pet, &encoding).unwrap();
//! assert_eq!(doc.get("name"), Some(&Document::Str("Oliver".to_owned())));
//! assert_eq!(decode(&doc, &decoding).unwrap(), pet);
//! ```

pub mod decoding;
pub mod encoding;
pub mod error;
pub mod key;

// Re-export the core public API
pub use decoding::{zip2, zip3, zip4, zip5, zip6, zip7, zip8, Decoding};
pub use encoding::Encoding;
pub use error::{DecodeError, EncodeError};
pub use key::CodingKey;

// The document model this crate's combinators run over.
pub use json_coding_document::{Document, Kind};

/// Encodes `value` into a [`Document`] using the given encoding.
///
/// Fails only on the `combine` modeling-bug cases
/// ([`EncodeError::KeyCollision`] / [`EncodeError::Unkeyed`]); failures are
/// never dependent on the document data.
pub fn encode<T: 'static>(value: &T, encoding: &Encoding<T>) -> Result<Document, EncodeError> {
    encoding.encode(value)
}

/// Decodes a [`Document`] into a `T` using the given decoding.
///
/// This is the single point where decode failure is observed; combinator
/// failures propagate here as typed [`DecodeError`] values.
pub fn decode<T: 'static>(document: &Document, decoding: &Decoding<T>) -> Result<T, DecodeError> {
    decoding.decode(document)
}
