//! Error types for the sparse-key codec.
//!
//! All failures surface synchronously to the immediate caller; nothing is
//! retried or swallowed internally. [`crate::sparse_get`] is the only place a
//! failure is converted into a successful return value (`None`).
//!
//! ## Error Categories
//!
//! - **Lookup failures**: [`Error::NotFound`], raised by fetch when a path
//!   segment is absent and no default was supplied
//! - **Reconstruction failures**: [`Error::StructureConflict`] and
//!   [`Error::IndexOverflow`], raised while re-nesting a flat map
//! - **Conversion failures**: [`Error::KeyNotString`] and
//!   [`Error::Unsupported`], raised at the [`crate::to_value`] boundary
//!
//! ## Examples
//!
//! ```rust
//! use sparsekey::{nested, sparse_fetch, Error, SparseOptions};
//!
//! let tree = nested!({ "foo": { "bar": "bingo" } });
//! let map = tree.as_object().unwrap();
//!
//! let err = sparse_fetch(map, "fiddle.foodle", &SparseOptions::default()).unwrap_err();
//! assert!(matches!(err, Error::NotFound { .. }));
//! ```

use crate::value::StructureKind;
use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced by the codec.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A fetched path had a segment with no entry, and neither a default nor
    /// a fallback was supplied.
    #[error("sparse key not found: {path:?}")]
    NotFound { path: String },

    /// Re-nesting required a container at an address already occupied by an
    /// incompatible value.
    #[error("structure conflict at {path:?}: expected {expected}, found {found}")]
    StructureConflict {
        path: String,
        expected: StructureKind,
        found: StructureKind,
    },

    /// An all-digit segment was too large to be a sequence index.
    #[error("sequence index out of range at {path:?}: {segment:?}")]
    IndexOverflow { path: String, segment: String },

    /// A map with non-string keys was handed to [`crate::to_value`].
    #[error("map keys must be strings, found: {0}")]
    KeyNotString(String),

    /// A Rust type with no sparse-value representation was handed to
    /// [`crate::to_value`].
    #[error("unsupported type: {0}")]
    Unsupported(String),

    /// Generic message, used by the `serde` integration.
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates a [`Error::NotFound`] carrying the full requested path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sparsekey::Error;
    ///
    /// let err = Error::not_found("foo.bar");
    /// assert!(err.to_string().contains("foo.bar"));
    /// ```
    pub fn not_found(path: impl Into<String>) -> Self {
        Error::NotFound { path: path.into() }
    }

    /// Creates a [`Error::StructureConflict`] carrying the offending path and
    /// the two competing kinds.
    pub fn structure_conflict(
        path: impl Into<String>,
        expected: StructureKind,
        found: StructureKind,
    ) -> Self {
        Error::StructureConflict {
            path: path.into(),
            expected,
            found,
        }
    }

    /// Creates an [`Error::IndexOverflow`] for a digit segment that does not
    /// fit in `usize`.
    pub fn index_overflow(path: impl Into<String>, segment: impl Into<String>) -> Self {
        Error::IndexOverflow {
            path: path.into(),
            segment: segment.into(),
        }
    }

    /// Creates an [`Error::Unsupported`] for types [`crate::to_value`] cannot
    /// represent.
    pub fn unsupported(what: &str) -> Self {
        Error::Unsupported(what.to_string())
    }

    /// Creates a generic error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
