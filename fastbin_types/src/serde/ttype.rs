use crate::serde::CodecError;
use derive_more::{Deref, From};
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

#[derive(From, Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct TTypeInt(u8);
impl From<TType> for TTypeInt {
    fn from(ttype: TType) -> Self {
        Self(ttype as u8)
    }
}

/// We keep the classic binary-protocol numbering, so that bytes remain
/// interchangeable with other implementations of the same format.
/// The gaps (1, 5, 7, 9) are tags that were retired or never used on this wire.
#[repr(u8)]
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, FromPrimitive, Debug)]
pub enum TType {
    Stop = 0,
    Bool = 2,
    Byte = 3,
    Double = 4,
    I16 = 6,
    I32 = 8,
    I64 = 10,
    String = 11,
    Struct = 12,
    Map = 13,
    Set = 14,
    List = 15,
}
impl TryFrom<TTypeInt> for TType {
    type Error = CodecError;
    fn try_from(int: TTypeInt) -> Result<Self, CodecError> {
        TType::from_u8(int.0).ok_or(CodecError::UnknownType(int.0))
    }
}

impl TType {
    /// Parses a tag in a position where a value must follow, i.e. anywhere but a field header.
    pub fn from_value_tag(tag: u8) -> Result<Self, CodecError> {
        match TType::try_from(TTypeInt(tag))? {
            TType::Stop => Err(CodecError::UnknownType(tag)),
            ttype => Ok(ttype),
        }
    }

    /// Body width of the fixed-width types. `None` for length-prefixed and nested types.
    pub fn fixed_width(self) -> Option<usize> {
        match self {
            TType::Bool | TType::Byte => Some(1),
            TType::I16 => Some(2),
            TType::I32 => Some(4),
            TType::I64 | TType::Double => Some(8),
            TType::Stop | TType::String | TType::Struct | TType::Map | TType::Set | TType::List => {
                None
            }
        }
    }
}
