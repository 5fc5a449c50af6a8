//! Re-nesting: sparse form back to nested form.
//!
//! [`unsparse`] replays a flat map's entries in iteration order, splitting
//! each path and growing containers lazily. The container kind required at a
//! segment is decided by the *following* segment: an all-digit segment
//! addresses a sequence slot, anything else a mapping key (see
//! [`path::is_index`]).
//!
//! The root of the result is always a mapping. Integer-like top-level
//! segments become string keys of the root rather than upgrading it to a
//! sequence.

use crate::value::StructureKind;
use crate::{path, Error, Result, SparseMap, SparseOptions, SparseValue};

/// Rebuilds the nested form from a flat map.
///
/// # Errors
///
/// Fails with [`Error::StructureConflict`] when two paths disagree about the
/// container kind at a shared address, or when a path descends through an
/// address already holding a leaf. Fails with [`Error::IndexOverflow`] when
/// a digit segment does not fit in `usize`.
pub fn unsparse(flat: &SparseMap, options: &SparseOptions) -> Result<SparseMap> {
    let mut root = SparseMap::new();
    for (raw_path, leaf) in flat.iter() {
        insert_at(&mut root, raw_path, leaf.clone(), options)?;
    }
    Ok(root)
}

fn insert_at(
    root: &mut SparseMap,
    raw_path: &str,
    leaf: SparseValue,
    options: &SparseOptions,
) -> Result<()> {
    let segments = path::split(raw_path, &options.separator);
    let Some((first, rest)) = segments.split_first() else {
        return Ok(());
    };
    let Some((last, middle)) = rest.split_last() else {
        root.insert(first.clone(), leaf);
        return Ok(());
    };

    // The root is always a mapping; `first` keys into it as a string even
    // when integer-like.
    let next = middle.first().unwrap_or(last);
    let slot = root.entry(first.clone()).or_insert(SparseValue::Null);
    let mut current = claim(slot, required_kind(next), raw_path)?;

    for pair in rest.windows(2) {
        current = descend(current, &pair[0], required_kind(&pair[1]), raw_path)?;
    }
    assign(current, last, leaf, raw_path)
}

fn required_kind(next_segment: &str) -> StructureKind {
    if path::is_index(next_segment) {
        StructureKind::Sequence
    } else {
        StructureKind::Mapping
    }
}

/// Turns a slot into a container of the required kind, treating `Null` as
/// vacant, or reports the conflict.
fn claim<'a>(
    slot: &'a mut SparseValue,
    kind: StructureKind,
    raw_path: &str,
) -> Result<&'a mut SparseValue> {
    if slot.is_null() {
        *slot = match kind {
            StructureKind::Sequence => SparseValue::Array(Vec::new()),
            _ => SparseValue::Object(SparseMap::new()),
        };
    }
    if slot.structure_kind() == kind {
        Ok(slot)
    } else {
        Err(Error::structure_conflict(
            raw_path,
            kind,
            slot.structure_kind(),
        ))
    }
}

fn descend<'a>(
    current: &'a mut SparseValue,
    segment: &str,
    kind: StructureKind,
    raw_path: &str,
) -> Result<&'a mut SparseValue> {
    match current {
        SparseValue::Object(map) => {
            let slot = map.entry(segment.to_string()).or_insert(SparseValue::Null);
            claim(slot, kind, raw_path)
        }
        SparseValue::Array(items) => {
            let index = parse_index(segment, raw_path)?;
            if index >= items.len() {
                items.resize(index + 1, SparseValue::Null);
            }
            claim(&mut items[index], kind, raw_path)
        }
        other => Err(Error::structure_conflict(
            raw_path,
            kind,
            other.structure_kind(),
        )),
    }
}

/// Assigns the leaf at the final segment, overwriting any prior value.
fn assign(
    current: &mut SparseValue,
    segment: &str,
    leaf: SparseValue,
    raw_path: &str,
) -> Result<()> {
    match current {
        SparseValue::Object(map) => {
            map.insert(segment.to_string(), leaf);
            Ok(())
        }
        SparseValue::Array(items) => {
            let index = parse_index(segment, raw_path)?;
            if index >= items.len() {
                items.resize(index + 1, SparseValue::Null);
            }
            items[index] = leaf;
            Ok(())
        }
        other => Err(Error::structure_conflict(
            raw_path,
            StructureKind::Leaf,
            other.structure_kind(),
        )),
    }
}

fn parse_index(segment: &str, raw_path: &str) -> Result<usize> {
    segment
        .parse::<usize>()
        .map_err(|_| Error::index_overflow(raw_path, segment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{nested, sparse};

    fn flat(entries: &[(&str, SparseValue)]) -> SparseMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_single_segment_paths() {
        let input = flat(&[("foo", nested!(1)), ("", nested!(2))]);
        let result = unsparse(&input, &SparseOptions::default()).unwrap();
        assert_eq!(result.get("foo"), Some(&nested!(1)));
        // An empty root key is legal.
        assert_eq!(result.get(""), Some(&nested!(2)));
    }

    #[test]
    fn test_numeric_root_keys_stay_strings() {
        let input = flat(&[("0", nested!("a")), ("1.x", nested!("b"))]);
        let result = unsparse(&input, &SparseOptions::default()).unwrap();
        assert_eq!(result.get("0"), Some(&nested!("a")));
        assert_eq!(result.get("1"), Some(&nested!({ "x": "b" })));
    }

    #[test]
    fn test_sequence_grows_with_null_padding() {
        let input = flat(&[("foo.2", nested!("c"))]);
        let result = unsparse(&input, &SparseOptions::default()).unwrap();
        assert_eq!(result.get("foo"), Some(&nested!([null, null, "c"])));
    }

    #[test]
    fn test_null_slot_counts_as_vacant() {
        let input = flat(&[("foo", SparseValue::Null), ("foo.bar", nested!(1))]);
        let result = unsparse(&input, &SparseOptions::default()).unwrap();
        assert_eq!(result.get("foo"), Some(&nested!({ "bar": 1 })));
    }

    #[test]
    fn test_final_segment_overwrites() {
        let input = flat(&[("foo.bar", nested!(1)), ("foo", nested!(2))]);
        let result = unsparse(&input, &SparseOptions::default()).unwrap();
        assert_eq!(result.get("foo"), Some(&nested!(2)));
    }

    #[test]
    fn test_kind_conflict_between_paths() {
        let input = flat(&[("foo.0", nested!(1)), ("foo.bar", nested!(2))]);
        let err = unsparse(&input, &SparseOptions::default()).unwrap_err();
        assert_eq!(
            err,
            Error::structure_conflict("foo.bar", StructureKind::Mapping, StructureKind::Sequence)
        );
    }

    #[test]
    fn test_leaf_conflict_on_descent() {
        let input = flat(&[("foo.bar", nested!(1)), ("foo.bar.baz", nested!(2))]);
        let err = unsparse(&input, &SparseOptions::default()).unwrap_err();
        assert_eq!(
            err,
            Error::structure_conflict("foo.bar.baz", StructureKind::Mapping, StructureKind::Leaf)
        );
    }

    #[test]
    fn test_index_overflow() {
        let input = flat(&[("foo.99999999999999999999999999", nested!(1))]);
        let err = unsparse(&input, &SparseOptions::default()).unwrap_err();
        assert!(matches!(err, Error::IndexOverflow { .. }));
    }

    #[test]
    fn test_zero_padded_indices_parse_back() {
        let tree = nested!({
            "foo": ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k"]
        });
        let options = SparseOptions::new().with_sparse_array(crate::ArrayMode::ZeroPadded);
        let flat = sparse(tree.as_object().unwrap(), &options);
        assert!(flat.contains_key("foo.00"));
        assert!(flat.contains_key("foo.10"));
        let back = unsparse(&flat, &options).unwrap();
        assert_eq!(SparseValue::Object(back), tree);
    }
}
