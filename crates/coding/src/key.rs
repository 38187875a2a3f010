//! Coding keys — closed per-type field-key sets.
//!
//! Each model type declares its own key enum, so combinators only accept
//! keys from that type's enumeration; arbitrary strings never reach
//! `with_key` and keys for one type cannot silently stand in for another's.

/// A field key drawn from a model type's closed key set.
///
/// Implement this on a small `Copy` enum per model type, or declare one with
/// [`coding_keys!`](crate::coding_keys).
pub trait CodingKey: Copy {
    /// The stable string form of this key, as it appears in documents.
    fn as_str(&self) -> &'static str;
}

/// Declares a field-key enum implementing [`CodingKey`].
///
/// # Example
///
/// ```
/// use json_coding::CodingKey;
///
/// json_coding::coding_keys! {
///     enum PetKeys {
///         Name => "name",
///     }
/// }
///
/// assert_eq!(PetKeys::Name.as_str(), "name");
/// ```
#[macro_export]
macro_rules! coding_keys {
    ($vis:vis enum $name:ident { $($variant:ident => $key:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis enum $name {
            $($variant,)+
        }

        impl $crate::CodingKey for $name {
            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $key,)+
                }
            }
        }
    };
}
