//! Decoding combinator algebra.
//!
//! A [`Decoding<T>`] wraps a pure function from a [`Document`] node to
//! `Result<T, DecodeError>`. Leaf constructors read primitive nodes;
//! combinators build object decoders out of them. Every decoding is
//! stateless, `Send + Sync`, and cheaply cloneable, so one value can serve
//! any number of concurrent decode calls.

use std::sync::Arc;

use json_coding_document::Document;
use uuid::Uuid;

use crate::error::DecodeError;
use crate::key::CodingKey;

/// A reusable decoder producing a `T` from a [`Document`] node.
pub struct Decoding<T: 'static> {
    run: Arc<dyn Fn(&Document) -> Result<T, DecodeError> + Send + Sync>,
}

impl<T: 'static> Clone for Decoding<T> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}

impl<T: 'static> Decoding<T> {
    /// Wraps a raw decode function. Prefer the leaf constructors and
    /// combinators; this is the escape hatch for custom leaves.
    pub fn new(f: impl Fn(&Document) -> Result<T, DecodeError> + Send + Sync + 'static) -> Self {
        Self { run: Arc::new(f) }
    }

    /// Runs this decoding against a node.
    pub fn decode(&self, node: &Document) -> Result<T, DecodeError> {
        (self.run)(node)
    }

    /// Reads this decoding's value from `key` of an object node.
    ///
    /// Fails with [`DecodeError::MissingKey`] when the key is absent and
    /// with [`DecodeError::TypeMismatch`] when the node is not an object or
    /// the sub-node has the wrong shape.
    pub fn with_key(self, key: impl CodingKey) -> Self {
        let key = key.as_str();
        Self::new(move |node| match node {
            Document::Object(_) => match node.get(key) {
                Some(sub) => self.decode(sub).map_err(|e| e.at_key(key)),
                None => Err(DecodeError::MissingKey(key.to_owned())),
            },
            other => Err(DecodeError::mismatch("object", other.kind())),
        })
    }

    /// Like [`with_key`](Self::with_key), but an absent key (or an explicit
    /// null node) yields `None` instead of failing. A present key with the
    /// wrong shape still fails.
    pub fn optional_with_key(self, key: impl CodingKey) -> Decoding<Option<T>> {
        let key = key.as_str();
        Decoding::new(move |node| match node {
            Document::Object(_) => match node.get(key) {
                None | Some(Document::Null) => Ok(None),
                Some(sub) => self.decode(sub).map(Some).map_err(|e| e.at_key(key)),
            },
            other => Err(DecodeError::mismatch("object", other.kind())),
        })
    }

    /// Applies a total function to the decoded value. Failures propagate
    /// unchanged. Use a separate validation step, not `map`, for fallible
    /// transforms.
    pub fn map<U: 'static>(self, f: impl Fn(T) -> U + Send + Sync + 'static) -> Decoding<U> {
        Decoding::new(move |node| self.decode(node).map(&f))
    }

    /// Lifts an element decoding over an array node.
    ///
    /// Elements decode positionally and fail fast: the first failing element
    /// aborts the whole decode with [`DecodeError::Element`], no partial
    /// results. Order and length are preserved.
    pub fn array_of(element: Decoding<T>) -> Decoding<Vec<T>> {
        Decoding::new(move |node| match node {
            Document::Array(items) => {
                let mut out = Vec::with_capacity(items.len());
                for (index, item) in items.iter().enumerate() {
                    match element.decode(item) {
                        Ok(v) => out.push(v),
                        Err(cause) => {
                            return Err(DecodeError::Element {
                                index,
                                cause: Box::new(cause),
                            })
                        }
                    }
                }
                Ok(out)
            }
            other => Err(DecodeError::mismatch("array", other.kind())),
        })
    }
}

impl<T: Clone + Send + Sync + 'static> Decoding<Option<T>> {
    /// Replaces a decoded `None` with `default`. `Some(v)` passes through
    /// untouched; the replacement itself never fails.
    pub fn replace_nil(self, default: T) -> Decoding<T> {
        Decoding::new(move |node| {
            self.decode(node)
                .map(|opt| opt.unwrap_or_else(|| default.clone()))
        })
    }
}

impl Decoding<bool> {
    /// Reads a boolean node.
    pub fn bool() -> Self {
        Self::new(|node| match node {
            Document::Bool(b) => Ok(*b),
            other => Err(DecodeError::mismatch("boolean", other.kind())),
        })
    }
}

impl Decoding<i64> {
    /// Reads an integer node.
    pub fn integer() -> Self {
        Self::new(|node| match node {
            Document::Integer(i) => Ok(*i),
            other => Err(DecodeError::mismatch("integer", other.kind())),
        })
    }
}

impl Decoding<f64> {
    /// Reads a number node, widening integers to `f64`.
    pub fn float() -> Self {
        Self::new(|node| match node {
            Document::Float(f) => Ok(*f),
            Document::Integer(i) => Ok(*i as f64),
            other => Err(DecodeError::mismatch("number", other.kind())),
        })
    }
}

impl Decoding<String> {
    /// Reads a string node.
    pub fn string() -> Self {
        Self::new(|node| match node {
            Document::Str(s) => Ok(s.clone()),
            other => Err(DecodeError::mismatch("string", other.kind())),
        })
    }
}

impl Decoding<Uuid> {
    /// Reads a string node holding a hyphenated UUID.
    pub fn uuid() -> Self {
        Self::new(|node| match node {
            Document::Str(s) => {
                Uuid::parse_str(s).map_err(|_| DecodeError::mismatch("uuid", node.kind()))
            }
            other => Err(DecodeError::mismatch("uuid", other.kind())),
        })
    }
}

// zip2..zip8: join n decoders against the same node into one decoder that
// feeds an n-ary constructor. On failure, the first failing component (in
// positional order) is reported; later components are not run.
macro_rules! zip_decodings {
    ($(#[$doc:meta])* $name:ident, $arity:expr, $(($ty:ident, $d:ident, $idx:expr)),+) => {
        $(#[$doc])*
        pub fn $name<$($ty,)+ Out>(
            with: impl Fn($($ty),+) -> Out + Send + Sync + 'static,
            $($d: Decoding<$ty>,)+
        ) -> Decoding<Out>
        where
            $($ty: 'static,)+
            Out: 'static,
        {
            Decoding::new(move |node| {
                $(
                    let $d = $d.decode(node).map_err(|cause| DecodeError::Composite {
                        arity: $arity,
                        component: $idx,
                        cause: Box::new(cause),
                    })?;
                )+
                Ok(with($($d),+))
            })
        }
    };
}

zip_decodings!(
    /// Joins two decoders against the same node via a binary constructor.
    ///
    /// All components read the *same* node — each one addresses its own
    /// sub-node through its own `with_key`. If any component fails the whole
    /// join fails with [`DecodeError::Composite`] naming the first failing
    /// position.
    zip2, 2, (A, d1, 0), (B, d2, 1)
);
zip_decodings!(
    /// Three-way [`zip2`] analogue.
    zip3, 3, (A, d1, 0), (B, d2, 1), (C, d3, 2)
);
zip_decodings!(
    /// Four-way [`zip2`] analogue.
    zip4, 4, (A, d1, 0), (B, d2, 1), (C, d3, 2), (D, d4, 3)
);
zip_decodings!(
    /// Five-way [`zip2`] analogue.
    zip5, 5, (A, d1, 0), (B, d2, 1), (C, d3, 2), (D, d4, 3), (E, d5, 4)
);
zip_decodings!(
    /// Six-way [`zip2`] analogue.
    zip6, 6, (A, d1, 0), (B, d2, 1), (C, d3, 2), (D, d4, 3), (E, d5, 4), (F, d6, 5)
);
zip_decodings!(
    /// Seven-way [`zip2`] analogue.
    zip7, 7, (A, d1, 0), (B, d2, 1), (C, d3, 2), (D, d4, 3), (E, d5, 4), (F, d6, 5), (G, d7, 6)
);
zip_decodings!(
    /// Eight-way [`zip2`] analogue. For wider joins, nest a zip inside `map`.
    zip8, 8, (A, d1, 0), (B, d2, 1), (C, d3, 2), (D, d4, 3), (E, d5, 4), (F, d6, 5), (G, d7, 6),
    (H, d8, 7)
);
