use crate::serde::TType;
use crate::types::Double;
use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd};

/// Any value the wire can carry, without reference to a schema.
///
/// Equality follows the record-equality rules:
/// lists compare in order, sets and maps compare regardless of order,
/// struct fields compare regardless of write order, and doubles compare bit for bit.
#[derive(Clone, Debug)]
pub enum Value {
    Bool(bool),
    Byte(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Double(Double),
    Binary(Vec<u8>),
    Struct(StructValue),
    List(Vec<Value>),
    Set(Vec<Value>),
    Map(Vec<(Value, Value)>),
}

impl Value {
    pub fn ttype(&self) -> TType {
        match self {
            Value::Bool(_) => TType::Bool,
            Value::Byte(_) => TType::Byte,
            Value::I16(_) => TType::I16,
            Value::I32(_) => TType::I32,
            Value::I64(_) => TType::I64,
            Value::Double(_) => TType::Double,
            Value::Binary(_) => TType::String,
            Value::Struct(_) => TType::Struct,
            Value::List(_) => TType::List,
            Value::Set(_) => TType::Set,
            Value::Map(_) => TType::Map,
        }
    }
}

fn sorted<T: Ord>(items: &[T]) -> Vec<&T> {
    let mut items = items.iter().collect::<Vec<_>>();
    items.sort();
    items
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Value) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Value {
    fn cmp(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Self::Bool(slf), Self::Bool(oth)) => slf.cmp(oth),
            (Self::Byte(slf), Self::Byte(oth)) => slf.cmp(oth),
            (Self::I16(slf), Self::I16(oth)) => slf.cmp(oth),
            (Self::I32(slf), Self::I32(oth)) => slf.cmp(oth),
            (Self::I64(slf), Self::I64(oth)) => slf.cmp(oth),
            (Self::Double(slf), Self::Double(oth)) => slf.cmp(oth),
            (Self::Binary(slf), Self::Binary(oth)) => slf.cmp(oth),
            (Self::Struct(slf), Self::Struct(oth)) => slf.cmp(oth),
            (Self::List(slf), Self::List(oth)) => slf.cmp(oth),
            (Self::Set(slf), Self::Set(oth)) => sorted(slf).cmp(&sorted(oth)),
            (Self::Map(slf), Self::Map(oth)) => sorted(slf).cmp(&sorted(oth)),
            _ => self.ttype().cmp(&other.ttype()),
        }
    }
}
impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        self.cmp(other).is_eq()
    }
}
impl Eq for Value {}

/// The fields of one struct, in write order.
#[derive(Clone, Default, Debug)]
pub struct StructValue {
    fields: Vec<(i16, Value)>,
}

impl StructValue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            fields: Vec::with_capacity(cap),
        }
    }

    pub fn push(&mut self, id: i16, val: Value) {
        self.fields.push((id, val));
    }

    pub fn get(&self, id: i16) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field_id, _)| *field_id == id)
            .map(|(_, val)| val)
    }

    pub fn fields(&self) -> &[(i16, Value)] {
        &self.fields
    }

    pub fn into_fields(self) -> Vec<(i16, Value)> {
        self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Vec<(i16, Value)>> for StructValue {
    fn from(fields: Vec<(i16, Value)>) -> Self {
        Self { fields }
    }
}

impl PartialOrd for StructValue {
    fn partial_cmp(&self, other: &StructValue) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for StructValue {
    fn cmp(&self, other: &StructValue) -> Ordering {
        sorted(&self.fields).cmp(&sorted(&other.fields))
    }
}
impl PartialEq for StructValue {
    fn eq(&self, other: &StructValue) -> bool {
        self.cmp(other).is_eq()
    }
}
impl Eq for StructValue {}
