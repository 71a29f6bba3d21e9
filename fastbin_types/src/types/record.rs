use crate::serde::{CodecError, TType};
use crate::types::{Binary, Double, Requiredness, StructDesc, StructValue, Value};
use std::collections::{BTreeMap, BTreeSet};

/// A typed record, as a schema compiler would emit it.
pub trait Record: Sized {
    fn desc() -> &'static StructDesc;

    /// Present fields only, in the order they should be written.
    fn to_struct_value(&self) -> StructValue;

    fn from_struct_value(sv: StructValue) -> Result<Self, CodecError>;
}

/// One row of a record's accessor table.
///
/// Table-driven records list one accessor per field, in declared order,
/// and let [`collect_fields`] and [`populate_fields`] do the rest.
pub struct Accessor<R> {
    pub id: i16,
    pub get: fn(&R) -> Option<Value>,
    pub set: fn(&mut R, Value) -> Result<(), CodecError>,
}

pub fn collect_fields<R>(rec: &R, accessors: &[Accessor<R>]) -> StructValue {
    let mut sv = StructValue::with_capacity(accessors.len());
    for acc in accessors {
        if let Some(val) = (acc.get)(rec) {
            sv.push(acc.id, val);
        }
    }
    sv
}

/// Fills `blank` with whichever fields `sv` carries.
/// `blank` must have every field unset, so that a field absent from the wire stays absent.
/// Ids that have no accessor are ignored.
pub fn populate_fields<R>(
    desc: &StructDesc,
    accessors: &[Accessor<R>],
    blank: R,
    sv: StructValue,
) -> Result<R, CodecError> {
    for fd in desc.fields {
        if fd.req == Requiredness::Required && sv.get(fd.id).is_none() {
            return Err(CodecError::MissingRequiredField {
                record: desc.name,
                field: fd.name,
            });
        }
    }

    let mut rec = blank;
    for (id, val) in sv.into_fields() {
        if let Some(acc) = accessors.iter().find(|acc| acc.id == id) {
            (acc.set)(&mut rec, val).map_err(|e| e.in_field(desc.name, id))?;
        }
    }
    Ok(rec)
}

pub fn record_from_value<R: Record>(val: Value) -> Result<R, CodecError> {
    match val {
        Value::Struct(sv) => R::from_struct_value(sv),
        val => Err(CodecError::mismatch(TType::Struct, val.ttype())),
    }
}

/// Conversion of a typed field into a [`Value`].
pub trait IntoValue {
    fn to_value(&self) -> Value;
}

/// Conversion of a decoded [`Value`] into a typed field.
pub trait FromValue: Sized {
    fn from_value(val: Value) -> Result<Self, CodecError>;
}

macro_rules! scalar_value {
    ($typ:ty, $variant:ident) => {
        impl IntoValue for $typ {
            fn to_value(&self) -> Value {
                Value::$variant(*self)
            }
        }
        impl FromValue for $typ {
            fn from_value(val: Value) -> Result<Self, CodecError> {
                match val {
                    Value::$variant(x) => Ok(x),
                    val => Err(CodecError::mismatch(TType::$variant, val.ttype())),
                }
            }
        }
    };
}
scalar_value!(bool, Bool);
scalar_value!(i8, Byte);
scalar_value!(i16, I16);
scalar_value!(i32, I32);
scalar_value!(i64, I64);
scalar_value!(Double, Double);

impl IntoValue for String {
    fn to_value(&self) -> Value {
        Value::Binary(self.as_bytes().to_vec())
    }
}
impl FromValue for String {
    fn from_value(val: Value) -> Result<Self, CodecError> {
        let bytes = Binary::from_value(val)?;
        Ok(String::from_utf8(bytes.0)?)
    }
}

impl IntoValue for Binary {
    fn to_value(&self) -> Value {
        Value::Binary(self.0.clone())
    }
}
impl FromValue for Binary {
    fn from_value(val: Value) -> Result<Self, CodecError> {
        match val {
            Value::Binary(bytes) => Ok(Binary(bytes)),
            val => Err(CodecError::mismatch(TType::String, val.ttype())),
        }
    }
}

impl<T: IntoValue> IntoValue for Box<T> {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}
impl<T: FromValue> FromValue for Box<T> {
    fn from_value(val: Value) -> Result<Self, CodecError> {
        T::from_value(val).map(Box::new)
    }
}

impl<T: IntoValue> IntoValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(IntoValue::to_value).collect())
    }
}
impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(val: Value) -> Result<Self, CodecError> {
        match val {
            Value::List(items) => items.into_iter().map(T::from_value).collect(),
            val => Err(CodecError::mismatch(TType::List, val.ttype())),
        }
    }
}

impl<T: IntoValue> IntoValue for BTreeSet<T> {
    fn to_value(&self) -> Value {
        Value::Set(self.iter().map(IntoValue::to_value).collect())
    }
}
impl<T: FromValue + Ord> FromValue for BTreeSet<T> {
    fn from_value(val: Value) -> Result<Self, CodecError> {
        match val {
            Value::Set(items) => items.into_iter().map(T::from_value).collect(),
            val => Err(CodecError::mismatch(TType::Set, val.ttype())),
        }
    }
}

impl<K: IntoValue, V: IntoValue> IntoValue for BTreeMap<K, V> {
    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(k, v)| (k.to_value(), v.to_value()))
                .collect(),
        )
    }
}
impl<K: FromValue + Ord, V: FromValue> FromValue for BTreeMap<K, V> {
    fn from_value(val: Value) -> Result<Self, CodecError> {
        match val {
            Value::Map(entries) => entries
                .into_iter()
                .map(|(k, v)| Ok((K::from_value(k)?, V::from_value(v)?)))
                .collect(),
            val => Err(CodecError::mismatch(TType::Map, val.ttype())),
        }
    }
}
