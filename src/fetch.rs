//! Sparse-key lookup into the nested form.
//!
//! These accessors operate on an *already nested* map: the path is split
//! into segments once, and each segment must then be present verbatim as a
//! mapping key. There is no partial or prefix matching, and sequences are
//! outside the fetch grammar — a numeric segment does not index into an
//! array, it only matches an object key that happens to be numeric.
//!
//! A partial-depth match returns the sub-container sitting at that address,
//! not a leaf.

use crate::{path, Error, Result, SparseMap, SparseOptions, SparseValue};

/// Looks up a sparse key in a nested map.
///
/// # Errors
///
/// Fails with [`Error::NotFound`] carrying the full requested path when any
/// segment is absent. For a non-failing variant use [`sparse_get`]; for an
/// explicit default use [`sparse_fetch_or`]; for a lazily-computed fallback,
/// chain [`Result::unwrap_or_else`].
///
/// # Examples
///
/// ```rust
/// use sparsekey::{nested, sparse_fetch, SparseOptions};
///
/// let tree = nested!({ "foo": { "bar": { "baz": "bingo" } } });
/// let map = tree.as_object().unwrap();
/// let options = SparseOptions::default();
///
/// let value = sparse_fetch(map, "foo.bar.baz", &options).unwrap();
/// assert_eq!(value.as_str(), Some("bingo"));
///
/// // A partial-depth match returns the sub-container.
/// let subtree = sparse_fetch(map, "foo.bar", &options).unwrap();
/// assert!(subtree.is_object());
///
/// assert!(sparse_fetch(map, "fiddle.foodle", &options).is_err());
/// ```
pub fn sparse_fetch<'a>(
    map: &'a SparseMap,
    sparse_key: &str,
    options: &SparseOptions,
) -> Result<&'a SparseValue> {
    let segments = path::split(sparse_key, &options.separator);
    let Some((first, rest)) = segments.split_first() else {
        return Err(Error::not_found(sparse_key));
    };
    let mut current = map
        .get(first)
        .ok_or_else(|| Error::not_found(sparse_key))?;
    for segment in rest {
        current = current
            .as_object()
            .and_then(|m| m.get(segment))
            .ok_or_else(|| Error::not_found(sparse_key))?;
    }
    Ok(current)
}

/// Looks up a sparse key, returning `default` when it is absent.
///
/// # Examples
///
/// ```rust
/// use sparsekey::{nested, sparse_fetch_or, SparseOptions};
///
/// let tree = nested!({ "foo": { "bar": "bingo" } });
/// let map = tree.as_object().unwrap();
/// let fallback = nested!("nope");
///
/// let value = sparse_fetch_or(map, "fiddle.foodle", &fallback, &SparseOptions::default());
/// assert_eq!(value.as_str(), Some("nope"));
/// ```
#[must_use]
pub fn sparse_fetch_or<'a>(
    map: &'a SparseMap,
    sparse_key: &str,
    default: &'a SparseValue,
    options: &SparseOptions,
) -> &'a SparseValue {
    sparse_fetch(map, sparse_key, options).unwrap_or(default)
}

/// Looks up a sparse key, returning `None` when it is absent. Never fails.
///
/// # Examples
///
/// ```rust
/// use sparsekey::{nested, sparse_get, SparseOptions};
///
/// let tree = nested!({ "foo": { "bar": "bingo" } });
/// let map = tree.as_object().unwrap();
/// let options = SparseOptions::default();
///
/// assert!(sparse_get(map, "foo.bar", &options).is_some());
/// assert!(sparse_get(map, "foo.nope", &options).is_none());
/// ```
#[must_use]
pub fn sparse_get<'a>(
    map: &'a SparseMap,
    sparse_key: &str,
    options: &SparseOptions,
) -> Option<&'a SparseValue> {
    sparse_fetch(map, sparse_key, options).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nested;

    #[test]
    fn test_escaped_keys_are_matched_verbatim() {
        let tree = nested!({ "foo.foo": "x", "foo": { "bar": "y" } });
        let map = tree.as_object().unwrap();
        let options = SparseOptions::default();
        assert_eq!(
            sparse_fetch(map, "foo\\.foo", &options).unwrap().as_str(),
            Some("x")
        );
        assert_eq!(
            sparse_fetch(map, "foo.bar", &options).unwrap().as_str(),
            Some("y")
        );
    }

    #[test]
    fn test_sequences_are_outside_the_fetch_grammar() {
        let tree = nested!({ "foo": ["a", "b"] });
        let map = tree.as_object().unwrap();
        let options = SparseOptions::default();
        assert!(sparse_fetch(map, "foo.0", &options).is_err());
        assert!(sparse_fetch(map, "foo", &options).unwrap().is_array());
    }

    #[test]
    fn test_numeric_object_keys_are_ordinary_keys() {
        let tree = nested!({ "foo": { "0": "zero" } });
        let map = tree.as_object().unwrap();
        let options = SparseOptions::default();
        assert_eq!(
            sparse_fetch(map, "foo.0", &options).unwrap().as_str(),
            Some("zero")
        );
    }
}
