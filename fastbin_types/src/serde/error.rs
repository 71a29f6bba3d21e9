use crate::serde::{LengthKind, TType};
use std::io;
use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Unexpected end of input.")]
    UnexpectedEof,

    #[error("Invalid {kind:?} length {len}.")]
    InvalidLength { kind: LengthKind, len: i64 },

    #[error("Unknown type tag {0}.")]
    UnknownType(u8),

    #[error("Type mismatch at {context}: expected {expected:?}, found {actual:?}.")]
    TypeMismatch {
        context: String,
        expected: TType,
        actual: TType,
    },

    #[error("Union {union} has {count} fields set; exactly one is required.")]
    UnionArityViolation { union: &'static str, count: usize },

    #[error("Required field {record}.{field} is missing.")]
    MissingRequiredField {
        record: &'static str,
        field: &'static str,
    },

    #[error("{record} has no field with id {id}.")]
    UnknownField { record: &'static str, id: i16 },

    #[error("Invalid UTF-8 in a string field.")]
    InvalidUtf8(#[from] FromUtf8Error),

    #[error(transparent)]
    Io(io::Error),
}

/// A short read is reported as [`CodecError::UnexpectedEof`] no matter which transport it came from.
impl From<io::Error> for CodecError {
    fn from(e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::UnexpectedEof => Self::UnexpectedEof,
            _ => Self::Io(e),
        }
    }
}

const MISMATCH_CONTEXT: &str = "value";

impl CodecError {
    pub fn mismatch(expected: TType, actual: TType) -> Self {
        Self::TypeMismatch {
            context: String::from(MISMATCH_CONTEXT),
            expected,
            actual,
        }
    }

    /// Pins a [`CodecError::TypeMismatch`] to the struct field where it happened.
    /// A mismatch already pinned to a more deeply nested field keeps that field.
    pub fn in_field(self, record: &str, field_id: i16) -> Self {
        match self {
            Self::TypeMismatch {
                context,
                expected,
                actual,
            } if context == MISMATCH_CONTEXT => Self::TypeMismatch {
                context: format!("{record}.{field_id}"),
                expected,
                actual,
            },
            e => e,
        }
    }
}
