//! # sparsekey
//!
//! A lossless, bidirectional codec between deeply-nested maps and flat maps
//! keyed by delimited paths.
//!
//! ## What is the sparse form?
//!
//! The *nested form* is an ordinary tree of maps, arrays, and scalars. The
//! *sparse form* is a single flat map with one entry per leaf, keyed by the
//! leaf's address joined with a separator:
//!
//! ```text
//! {"foo": {"bar": "bingo"}}   <->   {"foo.bar": "bingo"}
//! ```
//!
//! Sparse keys are handy wherever nested structure has to pass through a
//! flat namespace: environment variables, query strings, configuration
//! overrides, column names, key-value stores.
//!
//! ## Key Features
//!
//! - **Lossless**: separator characters inside real keys are
//!   backslash-escaped, so flattening and re-nesting are exact inverses
//! - **Configurable**: any single-character separator (default `'.'`),
//!   optional path prefix, optional array traversal with plain or
//!   zero-padded indices
//! - **Sparse-key access**: fetch or get a value out of an already-nested
//!   map by path, without flattening it first
//! - **Partial expand**: collapse just one branch of a flat map back into a
//!   nested value, in place or by copy
//! - **Serde Compatible**: convert any `T: Serialize` into a flattenable
//!   value with [`to_value`]
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use sparsekey::{nested, sparse, unsparse, SparseOptions};
//!
//! let tree = nested!({
//!     "foo": { "bar": { "baz": "bingo", "whee": {} } },
//!     "asdf": "qwer"
//! });
//! let options = SparseOptions::default();
//!
//! let flat = sparse(tree.as_object().unwrap(), &options);
//! assert_eq!(flat.get("foo.bar.baz").and_then(|v| v.as_str()), Some("bingo"));
//! assert_eq!(flat.get("asdf").and_then(|v| v.as_str()), Some("qwer"));
//!
//! let back = unsparse(&flat, &options).unwrap();
//! assert_eq!(back, tree.into_object().unwrap());
//! ```
//!
//! ### Escaping
//!
//! Keys containing the separator survive the round-trip because the path
//! grammar escapes them:
//!
//! ```rust
//! use sparsekey::{nested, sparse, SparseOptions};
//!
//! let tree = nested!({ "foo.foo": "foo", "foo": { "bar.bar": "bar" } });
//! let flat = sparse(tree.as_object().unwrap(), &SparseOptions::default());
//!
//! assert!(flat.contains_key("foo\\.foo"));
//! assert!(flat.contains_key("foo.bar\\.bar"));
//! ```
//!
//! ### Sparse arrays
//!
//! Arrays are opaque leaves by default. With [`ArrayMode::Indexed`] they are
//! descended into like maps keyed by index; [`ArrayMode::ZeroPadded`] pads
//! the indices so flat keys sort lexically:
//!
//! ```rust
//! use sparsekey::{nested, sparse, ArrayMode, SparseOptions};
//!
//! let tree = nested!({ "foo": ["bar", "baz", { "bingo": "baby" }] });
//! let options = SparseOptions::new().with_sparse_array(ArrayMode::Indexed);
//! let flat = sparse(tree.as_object().unwrap(), &options);
//!
//! assert_eq!(flat.get("foo.0").and_then(|v| v.as_str()), Some("bar"));
//! assert_eq!(flat.get("foo.2.bingo").and_then(|v| v.as_str()), Some("baby"));
//! ```
//!
//! ### Partial expand
//!
//! [`expand()`] re-nests only the entries below one path, leaving the rest of
//! the flat map alone. Prefix matching is ASCII-case-insensitive; this
//! mirrors the behavior of the tools this codec interoperates with and is
//! kept deliberately.
//!
//! ## Demos
//!
//! See the `demos/` directory for focused, runnable programs:
//!
//! - **`basics.rs`** - Flattening, re-nesting, and fetching
//! - **`sparse_arrays.rs`** - Array traversal and zero-padded indices
//! - **`expanding.rs`** - Partial re-nesting of a flat map
//!
//! Run any demo with: `cargo run --example <name>`

pub mod error;
pub mod expand;
pub mod fetch;
pub mod flatten;
pub mod macros;
pub mod map;
pub mod options;
pub mod path;
pub mod ser;
pub mod unflatten;
pub mod value;

pub use error::{Error, Result};
pub use expand::{expand, expand_in_place};
pub use fetch::{sparse_fetch, sparse_fetch_or, sparse_get};
pub use flatten::{sparse, sparse_each, SparseEntries};
pub use map::SparseMap;
pub use options::{ArrayMode, Separator, SparseOptions};
pub use ser::ValueSerializer;
pub use unflatten::unsparse;
pub use value::{Number, SparseValue, StructureKind};

use serde::Serialize;

/// Convert any `T: Serialize` to a [`SparseValue`].
///
/// Useful for feeding `#[derive(Serialize)]` types or `serde_json` values to
/// the codec when the structure isn't known at compile time.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use sparsekey::{sparse, to_value, SparseOptions};
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// let flat = sparse(value.as_object().unwrap(), &SparseOptions::default());
/// assert_eq!(flat.get("x").and_then(|v| v.as_i64()), Some(1));
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented (maps with
/// non-string keys, enum variants with payloads).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<SparseValue>
where
    T: ?Sized + Serialize,
{
    value.serialize(ser::ValueSerializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nested;

    #[test]
    fn test_sparse_unsparse_round_trip() {
        let tree = nested!({
            "foo": { "bar": { "baz": "bingo", "whee": {} } },
            "asdf": "qwer"
        });
        let options = SparseOptions::default();
        let flat = sparse(tree.as_object().unwrap(), &options);
        let back = unsparse(&flat, &options).unwrap();
        assert_eq!(SparseValue::Object(back), tree);
    }

    #[test]
    fn test_custom_separator_round_trip() {
        let tree = nested!({ "foo": { "bar": "bingo" } });
        let options = SparseOptions::new().with_separator('|');
        let flat = sparse(tree.as_object().unwrap(), &options);
        assert!(flat.contains_key("foo|bar"));
        let back = unsparse(&flat, &options).unwrap();
        assert_eq!(SparseValue::Object(back), tree);
    }

    #[test]
    fn test_to_value_nested_struct() {
        #[derive(serde::Serialize)]
        struct Inner {
            b: bool,
        }

        #[derive(serde::Serialize)]
        struct Outer {
            a: i32,
            inner: Inner,
        }

        let value = to_value(&Outer {
            a: 7,
            inner: Inner { b: true },
        })
        .unwrap();
        let flat = sparse(value.as_object().unwrap(), &SparseOptions::default());
        assert_eq!(flat.get("a").and_then(|v| v.as_i64()), Some(7));
        assert_eq!(flat.get("inner.b").and_then(|v| v.as_bool()), Some(true));
    }

    #[test]
    fn test_fetch_and_get() {
        let tree = nested!({ "foo": { "bar": "bingo" } });
        let map = tree.as_object().unwrap();
        let options = SparseOptions::default();

        assert_eq!(
            sparse_fetch(map, "foo.bar", &options).unwrap().as_str(),
            Some("bingo")
        );
        assert!(sparse_get(map, "nope", &options).is_none());
    }
}
