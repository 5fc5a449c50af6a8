//! Dynamic value representation for nested trees.
//!
//! This module provides the [`SparseValue`] enum which represents any value
//! the codec can flatten or reconstruct: scalars, sequences, and
//! insertion-ordered mappings.
//!
//! ## Core Types
//!
//! - [`SparseValue`]: Any value (null, bool, number, string, array, object)
//! - [`Number`]: An integer or floating-point numeric value
//! - [`StructureKind`]: The structural role a value plays during
//!   reconstruction (mapping, sequence, or leaf)
//!
//! ## Leaves
//!
//! The codec never introspects scalar values; it only distinguishes values
//! that can be descended into (non-empty objects, and non-empty arrays when
//! sparse-array mode is on) from everything else. Empty objects and empty
//! arrays count as leaves, since there is nothing to descend into.
//!
//! ## Usage Patterns
//!
//! ```rust
//! use sparsekey::{nested, Number, SparseValue};
//!
//! // From primitives
//! let null = SparseValue::Null;
//! let number = SparseValue::from(42);
//! let text = SparseValue::from("hello");
//!
//! // Using the nested! macro
//! let obj = nested!({
//!     "name": "Alice",
//!     "age": 30
//! });
//! assert!(obj.is_object());
//! ```

use crate::SparseMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed value in the nested form.
///
/// # Examples
///
/// ```rust
/// use sparsekey::{Number, SparseValue};
///
/// let num = SparseValue::Number(Number::Integer(42));
/// let text = SparseValue::String("hello".to_string());
///
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum SparseValue {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<SparseValue>),
    Object(SparseMap),
}

/// A numeric value, either integer or floating-point.
///
/// # Examples
///
/// ```rust
/// use sparsekey::Number;
///
/// let integer = Number::Integer(42);
/// let float = Number::Float(3.5);
///
/// assert!(integer.is_integer());
/// assert_eq!(integer.as_i64(), Some(42));
/// assert_eq!(float.as_f64(), 3.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

/// The structural role a value plays during reconstruction.
///
/// Carried by [`crate::Error::StructureConflict`] to name the two competing
/// kinds at a conflicting address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StructureKind {
    Mapping,
    Sequence,
    Leaf,
}

impl fmt::Display for StructureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureKind::Mapping => f.write_str("a mapping"),
            StructureKind::Sequence => f.write_str("a sequence"),
            StructureKind::Leaf => f.write_str("a leaf value"),
        }
    }
}

impl Number {
    /// Returns `true` if this is an integer value.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Returns `true` if this is a floating-point value.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Converts this number to an `i64` if possible.
    ///
    /// Returns `Some` for integers and for floats with no fractional part
    /// that fit in the `i64` range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sparsekey::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.0).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.5).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
        }
    }

    /// Converts this number to an `f64`. Always succeeds.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl From<i8> for Number {
    fn from(value: i8) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i16> for Number {
    fn from(value: i16) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<u8> for Number {
    fn from(value: u8) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<u16> for Number {
    fn from(value: u16) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(value as f64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl SparseValue {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, SparseValue::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, SparseValue::Bool(_))
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, SparseValue::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, SparseValue::String(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, SparseValue::Array(_))
    }

    /// Returns `true` if the value is an object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, SparseValue::Object(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SparseValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise
    /// returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sparsekey::SparseValue;
    ///
    /// assert_eq!(SparseValue::from("hello").as_str(), Some("hello"));
    /// assert_eq!(SparseValue::from(42).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SparseValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an integer or a whole-number float, returns it.
    /// Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            SparseValue::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// If the value is an array, returns a reference to it. Otherwise
    /// returns `None`.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<SparseValue>> {
        match self {
            SparseValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// If the value is an object, returns a reference to it. Otherwise
    /// returns `None`.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&SparseMap> {
        match self {
            SparseValue::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// If the value is an object, consumes it and returns the inner map.
    #[inline]
    #[must_use]
    pub fn into_object(self) -> Option<SparseMap> {
        match self {
            SparseValue::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Returns the structural role this value plays during reconstruction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sparsekey::{SparseMap, SparseValue, StructureKind};
    ///
    /// assert_eq!(SparseValue::from(42).structure_kind(), StructureKind::Leaf);
    /// assert_eq!(SparseValue::Array(vec![]).structure_kind(), StructureKind::Sequence);
    /// assert_eq!(
    ///     SparseValue::Object(SparseMap::new()).structure_kind(),
    ///     StructureKind::Mapping,
    /// );
    /// ```
    #[inline]
    #[must_use]
    pub const fn structure_kind(&self) -> StructureKind {
        match self {
            SparseValue::Object(_) => StructureKind::Mapping,
            SparseValue::Array(_) => StructureKind::Sequence,
            _ => StructureKind::Leaf,
        }
    }
}

impl fmt::Display for SparseValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SparseValue::Null => f.write_str("null"),
            SparseValue::Bool(b) => write!(f, "{}", b),
            SparseValue::Number(n) => write!(f, "{}", n),
            SparseValue::String(s) => write!(f, "{:?}", s),
            SparseValue::Array(arr) => {
                f.write_str("[")?;
                for (i, value) in arr.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                f.write_str("]")
            }
            SparseValue::Object(obj) => {
                f.write_str("{")?;
                for (i, (key, value)) in obj.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{:?}: {}", key, value)?;
                }
                f.write_str("}")
            }
        }
    }
}

impl Serialize for SparseValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            SparseValue::Null => serializer.serialize_unit(),
            SparseValue::Bool(b) => serializer.serialize_bool(*b),
            SparseValue::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            SparseValue::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            SparseValue::String(s) => serializer.serialize_str(s),
            SparseValue::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            SparseValue::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for SparseValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct SparseValueVisitor;

        impl<'de> Visitor<'de> for SparseValueVisitor {
            type Value = SparseValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid sparse value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(SparseValue::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(SparseValue::Number(Number::Integer(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                if value <= i64::MAX as u64 {
                    Ok(SparseValue::Number(Number::Integer(value as i64)))
                } else {
                    Ok(SparseValue::Number(Number::Float(value as f64)))
                }
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(SparseValue::Number(Number::Float(value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(SparseValue::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(SparseValue::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(SparseValue::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(SparseValue::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(SparseValue::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = SparseMap::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(SparseValue::Object(values))
            }
        }

        deserializer.deserialize_any(SparseValueVisitor)
    }
}

impl TryFrom<SparseValue> for i64 {
    type Error = crate::Error;

    fn try_from(value: SparseValue) -> crate::Result<Self> {
        match value {
            SparseValue::Number(Number::Integer(i)) => Ok(i),
            SparseValue::Number(Number::Float(f)) => {
                if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
                    Ok(f as i64)
                } else {
                    Err(crate::Error::custom(format!(
                        "cannot convert float {} to i64",
                        f
                    )))
                }
            }
            _ => Err(crate::Error::custom(format!(
                "expected integer, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<SparseValue> for f64 {
    type Error = crate::Error;

    fn try_from(value: SparseValue) -> crate::Result<Self> {
        match value {
            SparseValue::Number(n) => Ok(n.as_f64()),
            _ => Err(crate::Error::custom(format!(
                "expected number, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<SparseValue> for bool {
    type Error = crate::Error;

    fn try_from(value: SparseValue) -> crate::Result<Self> {
        match value {
            SparseValue::Bool(b) => Ok(b),
            _ => Err(crate::Error::custom(format!(
                "expected bool, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<SparseValue> for String {
    type Error = crate::Error;

    fn try_from(value: SparseValue) -> crate::Result<Self> {
        match value {
            SparseValue::String(s) => Ok(s),
            _ => Err(crate::Error::custom(format!(
                "expected string, found {:?}",
                value
            ))),
        }
    }
}

impl From<bool> for SparseValue {
    fn from(value: bool) -> Self {
        SparseValue::Bool(value)
    }
}

impl From<i8> for SparseValue {
    fn from(value: i8) -> Self {
        SparseValue::Number(Number::from(value))
    }
}

impl From<i16> for SparseValue {
    fn from(value: i16) -> Self {
        SparseValue::Number(Number::from(value))
    }
}

impl From<i32> for SparseValue {
    fn from(value: i32) -> Self {
        SparseValue::Number(Number::from(value))
    }
}

impl From<i64> for SparseValue {
    fn from(value: i64) -> Self {
        SparseValue::Number(Number::Integer(value))
    }
}

impl From<u8> for SparseValue {
    fn from(value: u8) -> Self {
        SparseValue::Number(Number::from(value))
    }
}

impl From<u16> for SparseValue {
    fn from(value: u16) -> Self {
        SparseValue::Number(Number::from(value))
    }
}

impl From<u32> for SparseValue {
    fn from(value: u32) -> Self {
        SparseValue::Number(Number::from(value))
    }
}

impl From<f32> for SparseValue {
    fn from(value: f32) -> Self {
        SparseValue::Number(Number::Float(value as f64))
    }
}

impl From<f64> for SparseValue {
    fn from(value: f64) -> Self {
        SparseValue::Number(Number::Float(value))
    }
}

impl From<String> for SparseValue {
    fn from(value: String) -> Self {
        SparseValue::String(value)
    }
}

impl From<&str> for SparseValue {
    fn from(value: &str) -> Self {
        SparseValue::String(value.to_string())
    }
}

impl From<Vec<SparseValue>> for SparseValue {
    fn from(value: Vec<SparseValue>) -> Self {
        SparseValue::Array(value)
    }
}

impl From<SparseMap> for SparseValue {
    fn from(value: SparseMap) -> Self {
        SparseValue::Object(value)
    }
}
