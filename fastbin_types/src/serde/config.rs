use crate::serde::CodecError;
use crate::types::{StructDesc, StructKind, StructValue, Value};
use itertools::Either;

/// What to do with a union that has zero or several fields set.
/// Zero fields is rejected under every policy.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub enum UnionArity {
    #[default]
    Strict,
    /// Keep the first field in write order. Later ones are not written, and are skipped on read.
    FirstSetWins,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub enum FieldOrder {
    /// Fields go on the wire in the order the record emitted them.
    #[default]
    AsWritten,
    AscendingId,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct CodecConfig {
    pub string_limit: Option<usize>,
    pub container_limit: Option<usize>,
    pub union_arity: UnionArity,
    pub field_order: FieldOrder,
}

/// The fields of one struct, in the order they go on the wire.
pub struct WireFields<'a>(Either<&'a [(i16, Value)], Vec<&'a (i16, Value)>>);
impl<'a> WireFields<'a> {
    pub fn iter(&self) -> impl '_ + Iterator<Item = &'a (i16, Value)> {
        match &self.0 {
            Either::Left(fields) => Either::Left((*fields).iter()),
            Either::Right(fields) => Either::Right(fields.iter().copied()),
        }
    }
}

impl CodecConfig {
    pub fn wire_fields<'a>(
        &self,
        desc: &StructDesc,
        sv: &'a StructValue,
    ) -> Result<WireFields<'a>, CodecError> {
        let mut fields = sv.fields();
        if desc.kind == StructKind::Union && fields.len() != 1 {
            match (fields.len(), self.union_arity) {
                (count @ 0, _) | (count, UnionArity::Strict) => {
                    return Err(CodecError::UnionArityViolation {
                        union: desc.name,
                        count,
                    })
                }
                (_, UnionArity::FirstSetWins) => fields = &fields[..1],
            }
        }
        let fields = match self.field_order {
            FieldOrder::AsWritten => Either::Left(fields),
            FieldOrder::AscendingId => {
                let mut sorted = fields.iter().collect::<Vec<_>>();
                sorted.sort_by_key(|(id, _)| *id);
                Either::Right(sorted)
            }
        };
        Ok(WireFields(fields))
    }

    /// Called before a known field is read into `sv_so_far`.
    /// Returns whether to keep the field. A field that is not kept must be skipped by the caller.
    pub fn admit_field(
        &self,
        desc: &StructDesc,
        sv_so_far: &StructValue,
    ) -> Result<bool, CodecError> {
        if desc.kind == StructKind::Struct || sv_so_far.is_empty() {
            return Ok(true);
        }
        match self.union_arity {
            UnionArity::Strict => Err(CodecError::UnionArityViolation {
                union: desc.name,
                count: sv_so_far.len() + 1,
            }),
            UnionArity::FirstSetWins => Ok(false),
        }
    }

    /// Called once the stop tag of `sv` has been read.
    pub fn check_complete(&self, desc: &StructDesc, sv: &StructValue) -> Result<(), CodecError> {
        if desc.kind == StructKind::Union && sv.is_empty() {
            return Err(CodecError::UnionArityViolation {
                union: desc.name,
                count: 0,
            });
        }
        Ok(())
    }
}
