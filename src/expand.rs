//! Partial re-nesting of a flat map under one path prefix.
//!
//! [`expand()`] collapses every flat entry below a target path into a single
//! nested value, leaving unrelated entries untouched. This re-nests one
//! branch without a full round-trip through [`crate::unsparse`].
//!
//! Prefix matching is ASCII-case-insensitive. That matches the behavior this
//! codec is modeled on and is kept deliberately; see the crate documentation.

use crate::{unsparse, Result, SparseMap, SparseOptions, SparseValue};

/// Returns a copy of `flat` with every entry under `sparse_key` collapsed
/// into one nested entry at `sparse_key`.
///
/// Two cases are no-ops and return an unchanged copy: `flat` already
/// contains `sparse_key` as an exact key (there is nothing nested below it
/// in the flat view), or no key starts with `sparse_key` plus the separator.
///
/// The collapsed entry takes the position of the first matched key;
/// unmatched entries keep their order.
///
/// # Errors
///
/// Fails like [`crate::unsparse`] when the matched entries cannot be
/// re-nested consistently.
///
/// # Examples
///
/// ```rust
/// use sparsekey::{expand, nested, SparseOptions};
///
/// let flat = nested!({
///     "foo.bar.baz": "bingo",
///     "foo.bar.whee": {},
///     "asdf": "qwer"
/// });
/// let result = expand(flat.as_object().unwrap(), "foo.bar", &SparseOptions::default()).unwrap();
/// assert_eq!(
///     result.get("foo.bar"),
///     Some(&nested!({ "baz": "bingo", "whee": {} })),
/// );
/// assert_eq!(result.get("asdf"), Some(&nested!("qwer")));
/// ```
pub fn expand(flat: &SparseMap, sparse_key: &str, options: &SparseOptions) -> Result<SparseMap> {
    if flat.contains_key(sparse_key) {
        return Ok(flat.clone());
    }
    let prefix = format!("{}{}", sparse_key, options.separator.as_str());

    let mut matched = SparseMap::new();
    for (key, value) in flat.iter() {
        if has_prefix(key, &prefix) {
            matched.insert(key[prefix.len()..].to_string(), value.clone());
        }
    }
    if matched.is_empty() {
        return Ok(flat.clone());
    }

    let mut nested = Some(SparseValue::Object(unsparse(&matched, options)?));
    let mut result = SparseMap::with_capacity(flat.len() - matched.len() + 1);
    for (key, value) in flat.iter() {
        if has_prefix(key, &prefix) {
            if let Some(nested) = nested.take() {
                result.insert(sparse_key.to_string(), nested);
            }
        } else {
            result.insert(key.clone(), value.clone());
        }
    }
    Ok(result)
}

/// In-place variant of [`expand()`]: replaces the contents of `flat` with the
/// expanded result, through the caller's own reference.
///
/// # Errors
///
/// Fails like [`expand()`]; on error `flat` is left unchanged.
pub fn expand_in_place(
    flat: &mut SparseMap,
    sparse_key: &str,
    options: &SparseOptions,
) -> Result<()> {
    if flat.contains_key(sparse_key) {
        return Ok(());
    }
    let expanded = expand(flat, sparse_key, options)?;
    *flat = expanded;
    Ok(())
}

fn has_prefix(key: &str, prefix: &str) -> bool {
    key.get(..prefix.len())
        .map_or(false, |head| head.eq_ignore_ascii_case(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nested;

    fn source() -> SparseMap {
        nested!({
            "foo.bar.baz": "bingo",
            "foo.bar.whee": {},
            "asdf": "qwer"
        })
        .into_object()
        .unwrap()
    }

    #[test]
    fn test_expand_keeps_first_matched_position() {
        let flat = nested!({
            "asdf": "qwer",
            "foo.bar.baz": "bingo",
            "zxcv": "uiop"
        })
        .into_object()
        .unwrap();
        let result = expand(&flat, "foo.bar", &SparseOptions::default()).unwrap();
        let keys: Vec<_> = result.keys().cloned().collect();
        assert_eq!(keys, vec!["asdf", "foo.bar", "zxcv"]);
    }

    #[test]
    fn test_exact_key_is_a_noop() {
        let flat = source();
        let result = expand(&flat, "foo.bar.baz", &SparseOptions::default()).unwrap();
        assert_eq!(result, flat);
    }

    #[test]
    fn test_no_match_is_a_noop() {
        let flat = source();
        let result = expand(&flat, "qwer", &SparseOptions::default()).unwrap();
        assert_eq!(result, flat);
    }

    #[test]
    fn test_prefix_matching_is_ascii_case_insensitive() {
        let flat = nested!({ "FOO.bar": 1, "asdf": 2 }).into_object().unwrap();
        let result = expand(&flat, "foo", &SparseOptions::default()).unwrap();
        assert_eq!(result.get("foo"), Some(&nested!({ "bar": 1 })));
        assert_eq!(result.get("asdf"), Some(&nested!(2)));
    }

    #[test]
    fn test_escaped_separator_does_not_match_prefix() {
        let flat = nested!({ "foo\\.bar": 1, "foo.baz": 2 }).into_object().unwrap();
        let result = expand(&flat, "foo", &SparseOptions::default()).unwrap();
        // "foo\.bar" is a single escaped key, not a child of "foo".
        assert_eq!(result.get("foo\\.bar"), Some(&nested!(1)));
        assert_eq!(result.get("foo"), Some(&nested!({ "baz": 2 })));
    }

    #[test]
    fn test_expand_in_place_replaces_contents() {
        let mut flat = source();
        expand_in_place(&mut flat, "foo.bar", &SparseOptions::default()).unwrap();
        assert_eq!(
            flat.get("foo.bar"),
            Some(&nested!({ "baz": "bingo", "whee": {} })),
        );
        assert!(!flat.contains_key("foo.bar.baz"));
    }
}
