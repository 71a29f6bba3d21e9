use crate::serde::CodecError;
use derive_more::Deref;

/// Never pre-allocate more elements than this off a declared count.
/// Containers larger than this grow as their elements actually arrive.
pub const PREALLOC_CAP: usize = 1024;

#[derive(Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct WriteLen(usize);
impl WriteLen {
    pub fn new_manual(len: usize) -> Self {
        Self(len)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LengthKind {
    String,
    Container,
}

/// A non-negative `i32` length or count, as carried on the wire.
#[derive(Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct WireLen(usize);
impl WireLen {
    pub fn from_len(len: usize, kind: LengthKind) -> Result<Self, CodecError> {
        match i32::try_from(len) {
            Ok(_) => Ok(Self(len)),
            Err(_) => Err(CodecError::InvalidLength {
                kind,
                len: len as i64,
            }),
        }
    }

    pub fn from_wire(raw: i32, kind: LengthKind, limit: Option<usize>) -> Result<Self, CodecError> {
        usize::try_from(raw)
            .ok()
            .filter(|len| limit.map_or(true, |limit| *len <= limit))
            .map(Self)
            .ok_or(CodecError::InvalidLength {
                kind,
                len: raw as i64,
            })
    }

    pub fn to_be_bytes(self) -> [u8; 4] {
        (self.0 as i32).to_be_bytes()
    }

    pub fn prealloc(self) -> usize {
        self.0.min(PREALLOC_CAP)
    }
}
