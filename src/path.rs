//! The path grammar: escaping, splitting, and joining of segments.
//!
//! A path is one or more segments joined by the separator. Segments are held
//! unescaped in memory; in a path string, every separator character and every
//! literal backslash inside a segment is backslash-escaped. [`escape`] and
//! [`unescape`] are exact inverses for any segment, and [`split`] undoes any
//! sequence of [`join`]s.
//!
//! For legacy multi-character separators (see [`Separator::legacy`]), only
//! the separator's first character is escaped and checked for escaping, while
//! splitting and joining use the full string. That asymmetry is kept as-is.
//!
//! ## Examples
//!
//! ```rust
//! use sparsekey::{path, Separator};
//!
//! let sep = Separator::default();
//! assert_eq!(path::escape("a.b", &sep), "a\\.b");
//! assert_eq!(path::split("foo.a\\.b", &sep), vec!["foo", "a.b"]);
//! assert_eq!(path::join(Some("foo"), "a.b", &sep), "foo.a\\.b");
//! ```

use crate::Separator;

/// Escapes one segment for inclusion in a path string.
///
/// Every occurrence of the separator's escape character and every literal
/// backslash is prefixed with a backslash. Apply this to exactly one segment
/// at a time, never to an already-joined path.
#[must_use]
pub fn escape(segment: &str, separator: &Separator) -> String {
    let special = separator.escape_char();
    let mut out = String::with_capacity(segment.len());
    for ch in segment.chars() {
        if ch == special || ch == '\\' {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Unescapes one piece of a split path string.
///
/// Removes one backslash before any backslash or separator character; the
/// exact inverse of [`escape`].
#[must_use]
pub fn unescape(piece: &str, separator: &Separator) -> String {
    let special = separator.escape_char();
    let mut out = String::with_capacity(piece.len());
    let mut chars = piece.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.next() {
                Some(next) if next == special || next == '\\' => out.push(next),
                Some(next) => {
                    out.push(ch);
                    out.push(next);
                }
                None => out.push(ch),
            }
        } else {
            out.push(ch);
        }
    }
    out
}

/// Splits a path string into unescaped segments.
///
/// The path is broken on occurrences of the separator that are not preceded
/// by an odd run of backslashes, and each resulting piece is unescaped.
/// Leading, trailing, or doubled separators produce empty segments, which
/// are preserved so that splitting stays the exact inverse of joining.
///
/// An empty path yields one empty segment: an empty root key is legal.
///
/// # Examples
///
/// ```rust
/// use sparsekey::{path, Separator};
///
/// let sep = Separator::default();
/// assert_eq!(path::split("foo.bar.baz", &sep), vec!["foo", "bar", "baz"]);
/// assert_eq!(path::split("foo\\.bar", &sep), vec!["foo.bar"]);
/// assert_eq!(path::split(".foo.", &sep), vec!["", "foo", ""]);
/// ```
#[must_use]
pub fn split(path: &str, separator: &Separator) -> Vec<String> {
    let sep = separator.as_str();
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut backslashes = 0usize;
    let mut i = 0;
    while i < path.len() {
        let rest = &path[i..];
        if backslashes % 2 == 0 && rest.starts_with(sep) {
            pieces.push(unescape(&path[start..i], separator));
            i += sep.len();
            start = i;
            backslashes = 0;
            continue;
        }
        let Some(ch) = rest.chars().next() else { break };
        if ch == '\\' {
            backslashes += 1;
        } else {
            backslashes = 0;
        }
        i += ch.len_utf8();
    }
    pieces.push(unescape(&path[start..], separator));
    pieces
}

/// Joins one more segment onto an already-escaped path prefix.
///
/// The new segment is escaped; the prefix is assumed to be the output of a
/// prior `join` and is used verbatim. With no prefix, the result is just the
/// escaped segment.
#[must_use]
pub fn join(prefix: Option<&str>, segment: &str, separator: &Separator) -> String {
    let escaped = escape(segment, separator);
    match prefix {
        Some(prefix) => {
            let sep = separator.as_str();
            let mut out = String::with_capacity(prefix.len() + sep.len() + escaped.len());
            out.push_str(prefix);
            out.push_str(sep);
            out.push_str(&escaped);
            out
        }
        None => escaped,
    }
}

/// Returns `true` if a segment addresses a sequence slot.
///
/// A segment is integer-like if and only if it consists of one or more ASCII
/// digits. There is no sign and no leading-zero exception: `"007"` is
/// integer-like. This classification drives container-kind inference during
/// re-nesting.
///
/// # Examples
///
/// ```rust
/// use sparsekey::path;
///
/// assert!(path::is_index("0"));
/// assert!(path::is_index("007"));
/// assert!(!path::is_index("-1"));
/// assert!(!path::is_index("1a"));
/// assert!(!path::is_index(""));
/// ```
#[must_use]
pub fn is_index(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dot() -> Separator {
        Separator::default()
    }

    #[test]
    fn test_escape_separator_and_backslash() {
        assert_eq!(escape("foo", &dot()), "foo");
        assert_eq!(escape("foo.bar", &dot()), "foo\\.bar");
        assert_eq!(escape("foo\\bar", &dot()), "foo\\\\bar");
        assert_eq!(escape("..", &dot()), "\\.\\.");
        assert_eq!(escape("", &dot()), "");
    }

    #[test]
    fn test_unescape_is_inverse() {
        for segment in ["foo", "foo.bar", "a\\b", ".", "\\", "a.b\\c.d", ""] {
            assert_eq!(unescape(&escape(segment, &dot()), &dot()), segment);
        }
    }

    #[test]
    fn test_split_plain() {
        assert_eq!(split("foo.bar.baz", &dot()), vec!["foo", "bar", "baz"]);
        assert_eq!(split("foo", &dot()), vec!["foo"]);
    }

    #[test]
    fn test_split_preserves_empty_segments() {
        assert_eq!(split("", &dot()), vec![""]);
        assert_eq!(split(".", &dot()), vec!["", ""]);
        assert_eq!(split("foo..bar", &dot()), vec!["foo", "", "bar"]);
        assert_eq!(split(".foo.", &dot()), vec!["", "foo", ""]);
    }

    #[test]
    fn test_split_respects_escapes() {
        assert_eq!(split("foo\\.bar", &dot()), vec!["foo.bar"]);
        assert_eq!(split("foo\\\\.bar", &dot()), vec!["foo\\", "bar"]);
        assert_eq!(split("foo\\\\\\.bar", &dot()), vec!["foo\\.bar"]);
        assert_eq!(split("a\\.b.c\\.d", &dot()), vec!["a.b", "c.d"]);
    }

    #[test]
    fn test_join_escapes_only_the_new_segment() {
        let sep = dot();
        let p = join(None, "foo.foo", &sep);
        assert_eq!(p, "foo\\.foo");
        let p = join(Some("foo"), "bar.bar", &sep);
        assert_eq!(p, "foo.bar\\.bar");
        assert_eq!(split(&p, &sep), vec!["foo", "bar.bar"]);
    }

    #[test]
    fn test_join_split_inverse_for_segment_chains() {
        let sep = dot();
        let segments = ["plain", "with.sep", "with\\slash", "", "007"];
        let mut joined: Option<String> = None;
        for segment in segments {
            joined = Some(join(joined.as_deref(), segment, &sep));
        }
        let joined = joined.unwrap();
        assert_eq!(split(&joined, &sep), segments);
    }

    #[test]
    fn test_unicode_separator() {
        let sep = Separator::new('→');
        let p = join(Some(&join(None, "a→b", &sep)), "c", &sep);
        assert_eq!(split(&p, &sep), vec!["a→b", "c"]);
    }

    #[test]
    fn test_legacy_multichar_separator() {
        let sep = Separator::legacy("::");
        // Only the first character is escaped...
        assert_eq!(escape("a:b", &sep), "a\\:b");
        assert_eq!(escape("a::b", &sep), "a\\:\\:b");
        // ...but the split happens on the full string.
        assert_eq!(split("foo::bar", &sep), vec!["foo", "bar"]);
        assert_eq!(split("foo:bar", &sep), vec!["foo:bar"]);
        let p = join(Some(&join(None, "a::b", &sep)), "c", &sep);
        assert_eq!(split(&p, &sep), vec!["a::b", "c"]);
    }

    #[test]
    fn test_is_index() {
        assert!(is_index("0"));
        assert!(is_index("12"));
        assert!(is_index("007"));
        assert!(!is_index(""));
        assert!(!is_index("-1"));
        assert!(!is_index("+1"));
        assert!(!is_index("1.5"));
        assert!(!is_index("one"));
        assert!(!is_index("١٢٣"));
    }
}
