//! Typed error model for the combinator algebras.

use json_coding_document::Kind;
use thiserror::Error;

/// A decode-side failure.
///
/// Decode failures propagate outward as values; the top-level
/// [`decode`](crate::decode) call is the single point where a caller
/// observes success or failure. Nothing is retried internally.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DecodeError {
    /// A required key was absent from an object node.
    #[error("missing key \"{0}\"")]
    MissingKey(String),
    /// A node was present but had the wrong shape.
    ///
    /// Leaf decoders produce this with `key: None`; `with_key` and
    /// `optional_with_key` stamp the field key on the way out.
    #[error("type mismatch: expected {expected}, found {actual}")]
    TypeMismatch {
        key: Option<String>,
        expected: &'static str,
        actual: Kind,
    },
    /// A sequence element failed to decode, at the given position.
    #[error("element {index}: {cause}")]
    Element { index: usize, cause: Box<DecodeError> },
    /// A component of a `zip` join failed. Reports the first positional
    /// failure.
    #[error("component {component} of {arity}: {cause}")]
    Composite {
        arity: usize,
        component: usize,
        cause: Box<DecodeError>,
    },
}

impl DecodeError {
    /// A [`DecodeError::TypeMismatch`] with no key attached yet.
    pub fn mismatch(expected: &'static str, actual: Kind) -> Self {
        DecodeError::TypeMismatch {
            key: None,
            expected,
            actual,
        }
    }

    /// Stamps `key` onto a keyless `TypeMismatch`; other errors (already
    /// keyed, or positional) pass through unchanged.
    pub(crate) fn at_key(self, key: &str) -> Self {
        match self {
            DecodeError::TypeMismatch {
                key: None,
                expected,
                actual,
            } => DecodeError::TypeMismatch {
                key: Some(key.to_owned()),
                expected,
                actual,
            },
            other => other,
        }
    }
}

/// An encode-side failure.
///
/// Encoding is total apart from the `combine` modeling-bug cases below;
/// no document-dependent failure exists on this side.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Two combined encodings emitted the same key.
    #[error("key collision \"{0}\" while combining encodings")]
    KeyCollision(String),
    /// An encoding passed to `combine` emitted a non-object node.
    #[error("combine expects keyed object output, found {0}")]
    Unkeyed(Kind),
}
