//! Configuration options for the sparse-key codec.
//!
//! This module provides the types that control how paths are built and how
//! containers are traversed:
//!
//! - [`SparseOptions`]: Main configuration struct
//! - [`Separator`]: The path delimiter (default `'.'`)
//! - [`ArrayMode`]: How sequences are treated during flattening
//!
//! ## Examples
//!
//! ```rust
//! use sparsekey::{ArrayMode, SparseOptions};
//!
//! // Flatten with a pipe separator and indexed arrays
//! let options = SparseOptions::new()
//!     .with_separator('|')
//!     .with_sparse_array(ArrayMode::Indexed);
//! ```

use std::fmt;

/// The path delimiter used between segments.
///
/// A separator is normally a single character (default `'.'`). The backslash
/// cannot be used, since it is the escape character of the path grammar.
///
/// Multi-character separators are a deprecated legacy mode: paths are split
/// and joined on the full string, but only the *first* character is escaped
/// inside segments. Constructing one logs a deprecation warning through
/// [`tracing`].
///
/// # Examples
///
/// ```rust
/// use sparsekey::Separator;
///
/// assert_eq!(Separator::default().as_str(), ".");
/// assert_eq!(Separator::new('|').as_str(), "|");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Separator {
    text: String,
    escape: char,
}

impl Separator {
    /// Creates a single-character separator.
    ///
    /// # Panics
    ///
    /// Panics if `separator` is a backslash, which is reserved as the escape
    /// character.
    #[must_use]
    pub fn new(separator: char) -> Self {
        assert!(
            separator != '\\',
            "the backslash is the escape character and cannot be a separator"
        );
        Separator {
            text: separator.to_string(),
            escape: separator,
        }
    }

    /// Creates a separator from an arbitrary string.
    ///
    /// Single-character strings behave exactly like [`Separator::new`].
    /// Longer strings enable the deprecated legacy mode: splitting and
    /// joining use the full string, while escaping covers only the first
    /// character. A `tracing` warning is emitted when a multi-character
    /// separator is constructed.
    ///
    /// # Panics
    ///
    /// Panics if `separator` is empty or starts with a backslash.
    #[must_use]
    pub fn legacy(separator: impl Into<String>) -> Self {
        let text = separator.into();
        let mut chars = text.chars();
        let escape = chars.next().expect("separator must not be empty");
        assert!(
            escape != '\\',
            "the backslash is the escape character and cannot start a separator"
        );
        if chars.next().is_some() {
            tracing::warn!(
                separator = %text,
                "multi-character separators are deprecated; only the first character is escaped"
            );
        }
        Separator { text, escape }
    }

    /// Returns the full separator string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the character that gets backslash-escaped inside segments.
    ///
    /// For single-character separators this is the separator itself; for
    /// legacy multi-character separators it is the first character only.
    #[must_use]
    pub const fn escape_char(&self) -> char {
        self.escape
    }
}

impl Default for Separator {
    fn default() -> Self {
        Separator::new('.')
    }
}

impl From<char> for Separator {
    fn from(separator: char) -> Self {
        Separator::new(separator)
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// How sequences are treated during flattening.
///
/// # Examples
///
/// ```rust
/// use sparsekey::ArrayMode;
///
/// assert_eq!(ArrayMode::default(), ArrayMode::Opaque);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ArrayMode {
    /// Sequences are opaque leaf values and are never descended into.
    #[default]
    Opaque,
    /// Sequences are descended into, with unpadded decimal indices as
    /// segments (`foo.0`, `foo.1`, ...).
    Indexed,
    /// Like [`ArrayMode::Indexed`], but indices are zero-padded to the
    /// decimal width of the last index, so flat keys sort lexically
    /// (`foo.00` ... `foo.10`).
    ZeroPadded,
}

/// Configuration for all codec operations.
///
/// All fields are optional with defaults: `'.'` separator, no prefix,
/// opaque arrays.
///
/// # Examples
///
/// ```rust
/// use sparsekey::{ArrayMode, SparseOptions};
///
/// // Default configuration
/// let options = SparseOptions::new();
/// assert_eq!(options.separator.as_str(), ".");
///
/// // Custom configuration
/// let options = SparseOptions::new()
///     .with_separator('/')
///     .with_sparse_array(ArrayMode::ZeroPadded);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SparseOptions {
    pub separator: Separator,
    /// An already-escaped ancestor path prepended to every produced path.
    /// Used internally when recursing; rarely supplied by callers.
    pub prefix: Option<String>,
    pub sparse_array: ArrayMode,
}

impl SparseOptions {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the separator character.
    ///
    /// For the deprecated multi-character legacy mode, assign a
    /// [`Separator::legacy`] value to the `separator` field directly.
    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = Separator::new(separator);
        self
    }

    /// Sets an already-escaped path prefix prepended to every produced path.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Sets how sequences are treated during flattening.
    #[must_use]
    pub fn with_sparse_array(mut self, mode: ArrayMode) -> Self {
        self.sparse_array = mode;
        self
    }
}
