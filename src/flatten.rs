//! Flattening: nested form to sparse form.
//!
//! [`sparse_each`] walks a nested map depth-first and yields one
//! `(path, leaf)` pair per leaf, in the containers' natural iteration order.
//! [`sparse`] materializes that sequence into a flat [`SparseMap`].
//!
//! The traversal carries an explicit stack instead of recursing, so tree
//! depth is bounded by the heap, not the call stack. Each stack frame holds
//! the already-escaped path of its container, which keeps path building
//! linear in depth.

use std::borrow::Cow;

use crate::options::ArrayMode;
use crate::{path, SparseMap, SparseOptions, SparseValue};

/// Returns a flat map with one entry per leaf of `map`, keyed by delimited
/// path.
///
/// Pathological inputs can produce two identical paths (for example a key
/// that escapes to the same string as a deeper chain); the later entry then
/// overwrites the earlier one.
#[must_use]
pub fn sparse(map: &SparseMap, options: &SparseOptions) -> SparseMap {
    sparse_each(map, options)
        .map(|(path, value)| (path, value.clone()))
        .collect()
}

/// Returns an iterator over `(path, leaf)` pairs of `map`.
///
/// The iterator borrows the tree and yields leaves without cloning. Calling
/// it again on the same tree yields the same sequence.
#[must_use]
pub fn sparse_each<'a>(map: &'a SparseMap, options: &'a SparseOptions) -> SparseEntries<'a> {
    SparseEntries::new(map, options)
}

/// Depth-first iterator over the `(path, leaf)` pairs of a nested map.
///
/// Created by [`sparse_each`].
///
/// # Examples
///
/// ```rust
/// use sparsekey::{nested, sparse_each, SparseOptions};
///
/// let tree = nested!({ "foo": { "bar": "bingo" }, "asdf": "qwer" });
/// let options = SparseOptions::default();
/// let paths: Vec<String> = sparse_each(tree.as_object().unwrap(), &options)
///     .map(|(path, _)| path)
///     .collect();
/// assert_eq!(paths, vec!["foo.bar", "asdf"]);
/// ```
pub struct SparseEntries<'a> {
    options: &'a SparseOptions,
    stack: Vec<Frame<'a>>,
}

struct Frame<'a> {
    prefix: Option<String>,
    children: Children<'a>,
}

enum Children<'a> {
    Map(indexmap::map::Iter<'a, String, SparseValue>),
    Seq {
        items: std::iter::Enumerate<std::slice::Iter<'a, SparseValue>>,
        width: usize,
    },
}

impl<'a> Children<'a> {
    fn next(&mut self) -> Option<(Cow<'a, str>, &'a SparseValue)> {
        match self {
            Children::Map(iter) => iter.next().map(|(k, v)| (Cow::Borrowed(k.as_str()), v)),
            Children::Seq { items, width } => items
                .next()
                .map(|(i, v)| (Cow::Owned(format!("{:0width$}", i, width = *width)), v)),
        }
    }
}

impl<'a> SparseEntries<'a> {
    fn new(map: &'a SparseMap, options: &'a SparseOptions) -> Self {
        SparseEntries {
            options,
            stack: vec![Frame {
                prefix: options.prefix.clone(),
                children: Children::Map(map.iter()),
            }],
        }
    }

    fn index_width(&self, len: usize) -> usize {
        match self.options.sparse_array {
            // Zero-pad to the width of the last index so keys sort lexically.
            ArrayMode::ZeroPadded => decimal_width(len.saturating_sub(1)),
            _ => 0,
        }
    }
}

fn decimal_width(mut n: usize) -> usize {
    let mut width = 1;
    while n >= 10 {
        n /= 10;
        width += 1;
    }
    width
}

impl<'a> Iterator for SparseEntries<'a> {
    type Item = (String, &'a SparseValue);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.stack.last_mut()?;
            let Some((key, value)) = frame.children.next() else {
                self.stack.pop();
                continue;
            };
            let child_path = path::join(frame.prefix.as_deref(), &key, &self.options.separator);
            match value {
                SparseValue::Object(map) if !map.is_empty() => {
                    self.stack.push(Frame {
                        prefix: Some(child_path),
                        children: Children::Map(map.iter()),
                    });
                }
                SparseValue::Array(items)
                    if self.options.sparse_array != ArrayMode::Opaque && !items.is_empty() =>
                {
                    let width = self.index_width(items.len());
                    self.stack.push(Frame {
                        prefix: Some(child_path),
                        children: Children::Seq {
                            items: items.iter().enumerate(),
                            width,
                        },
                    });
                }
                _ => return Some((child_path, value)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nested;

    #[test]
    fn test_empty_containers_are_leaves() {
        let tree = nested!({ "a": {}, "b": [] });
        let options = SparseOptions::new().with_sparse_array(ArrayMode::Indexed);
        let flat = sparse(tree.as_object().unwrap(), &options);
        assert_eq!(flat.get("a"), Some(&nested!({})));
        assert_eq!(flat.get("b"), Some(&nested!([])));
    }

    #[test]
    fn test_opaque_arrays_are_leaves() {
        let tree = nested!({ "foo": ["bar", "baz"] });
        let flat = sparse(tree.as_object().unwrap(), &SparseOptions::default());
        assert_eq!(flat.len(), 1);
        assert_eq!(flat.get("foo"), Some(&nested!(["bar", "baz"])));
    }

    #[test]
    fn test_prefix_option() {
        let tree = nested!({ "bar": "baz" });
        let options = SparseOptions::new().with_prefix("foo");
        let flat = sparse(tree.as_object().unwrap(), &options);
        assert_eq!(flat.get("foo.bar").and_then(|v| v.as_str()), Some("baz"));
    }

    #[test]
    fn test_decimal_width() {
        assert_eq!(decimal_width(0), 1);
        assert_eq!(decimal_width(9), 1);
        assert_eq!(decimal_width(10), 2);
        assert_eq!(decimal_width(99), 2);
        assert_eq!(decimal_width(100), 3);
    }

    #[test]
    fn test_traversal_order_is_insertion_order() {
        let tree = nested!({
            "b": { "z": 1, "a": 2 },
            "a": 3
        });
        let options = SparseOptions::default();
        let paths: Vec<String> = sparse_each(tree.as_object().unwrap(), &options)
            .map(|(path, _)| path)
            .collect();
        assert_eq!(paths, vec!["b.z", "b.a", "a"]);
    }
}
