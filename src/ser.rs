//! Conversion of arbitrary `Serialize` types into [`SparseValue`].
//!
//! [`ValueSerializer`] is a [`serde::Serializer`] whose output is a
//! [`SparseValue`] tree rather than text. It backs [`crate::to_value`],
//! which is how `#[derive(Serialize)]` data enters the codec.
//!
//! Maps must have string keys; enum variants with payloads have no sparse
//! representation and are rejected.

use serde::{ser, Serialize};

use crate::{Error, Number, Result, SparseMap, SparseValue};

/// A serializer producing [`SparseValue`] trees.
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<SparseValue>,
}

pub struct SerializeMap {
    map: SparseMap,
    current_key: Option<String>,
}

impl ser::Serializer for ValueSerializer {
    type Ok = SparseValue;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeVec;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeMap;

    fn serialize_bool(self, v: bool) -> Result<SparseValue> {
        Ok(SparseValue::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<SparseValue> {
        Ok(SparseValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_i16(self, v: i16) -> Result<SparseValue> {
        Ok(SparseValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_i32(self, v: i32) -> Result<SparseValue> {
        Ok(SparseValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_i64(self, v: i64) -> Result<SparseValue> {
        Ok(SparseValue::Number(Number::Integer(v)))
    }

    fn serialize_u8(self, v: u8) -> Result<SparseValue> {
        Ok(SparseValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_u16(self, v: u16) -> Result<SparseValue> {
        Ok(SparseValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_u32(self, v: u32) -> Result<SparseValue> {
        Ok(SparseValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_u64(self, v: u64) -> Result<SparseValue> {
        if v <= i64::MAX as u64 {
            Ok(SparseValue::Number(Number::Integer(v as i64)))
        } else {
            Ok(SparseValue::Number(Number::Float(v as f64)))
        }
    }

    fn serialize_f32(self, v: f32) -> Result<SparseValue> {
        Ok(SparseValue::Number(Number::Float(v as f64)))
    }

    fn serialize_f64(self, v: f64) -> Result<SparseValue> {
        Ok(SparseValue::Number(Number::Float(v)))
    }

    fn serialize_char(self, v: char) -> Result<SparseValue> {
        Ok(SparseValue::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<SparseValue> {
        Ok(SparseValue::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<SparseValue> {
        let vec = v
            .iter()
            .map(|&b| SparseValue::Number(Number::Integer(b as i64)))
            .collect();
        Ok(SparseValue::Array(vec))
    }

    fn serialize_none(self) -> Result<SparseValue> {
        Ok(SparseValue::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<SparseValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<SparseValue> {
        Ok(SparseValue::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<SparseValue> {
        Ok(SparseValue::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<SparseValue> {
        Ok(SparseValue::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<SparseValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<SparseValue>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::unsupported("newtype variants"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple(self, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple_struct(self, _name: &'static str, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<SerializeVec> {
        Err(Error::unsupported("tuple variants"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<SerializeMap> {
        Err(Error::unsupported("struct variants"))
    }
}

impl SerializeVec {
    fn new() -> Self {
        SerializeVec { vec: Vec::new() }
    }
}

impl SerializeMap {
    fn new() -> Self {
        SerializeMap {
            map: SparseMap::new(),
            current_key: None,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = SparseValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<SparseValue> {
        Ok(SparseValue::Array(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = SparseValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<SparseValue> {
        Ok(SparseValue::Array(self.vec))
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = SparseValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<SparseValue> {
        Ok(SparseValue::Array(self.vec))
    }
}

impl ser::SerializeTupleVariant for SerializeVec {
    type Ok = SparseValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<SparseValue> {
        Ok(SparseValue::Array(self.vec))
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = SparseValue;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match key.serialize(ValueSerializer)? {
            SparseValue::String(s) => {
                self.current_key = Some(s);
                Ok(())
            }
            other => Err(Error::KeyNotString(other.to_string())),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<SparseValue> {
        Ok(SparseValue::Object(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = SparseValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map
            .insert(key.to_string(), value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<SparseValue> {
        Ok(SparseValue::Object(self.map))
    }
}

impl ser::SerializeStructVariant for SerializeMap {
    type Ok = SparseValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map
            .insert(key.to_string(), value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<SparseValue> {
        Ok(SparseValue::Object(self.map))
    }
}
