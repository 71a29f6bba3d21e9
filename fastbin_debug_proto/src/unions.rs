use crate::{OneOfEach, RandomStuff};
use fastbin_types::serde::CodecError;
use fastbin_types::types::{
    FieldDesc, FromValue, IntoValue, Record, StructDesc, StructKind, StructValue, TypeDesc,
};
use std::collections::{BTreeMap, BTreeSet};

static RANDOM_STUFF_T: TypeDesc = TypeDesc::Struct(RandomStuff::desc);

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum TestUnion {
    StringField(String),
    I32Field(i32),
    StructField(OneOfEach),
    StructList(Vec<RandomStuff>),
    OtherI32Field(i32),
    I32Set(BTreeSet<i32>),
    I32Map(BTreeMap<i32, i32>),
}

pub static TEST_UNION_DESC: StructDesc = StructDesc {
    name: "TestUnion",
    kind: StructKind::Union,
    fields: &[
        FieldDesc::new(1, "string_field", TypeDesc::String),
        FieldDesc::new(2, "i32_field", TypeDesc::I32),
        FieldDesc::new(3, "struct_field", TypeDesc::Struct(OneOfEach::desc)),
        FieldDesc::new(4, "struct_list", TypeDesc::List(&RANDOM_STUFF_T)),
        FieldDesc::new(5, "other_i32_field", TypeDesc::I32),
        FieldDesc::new(7, "i32_set", TypeDesc::Set(&TypeDesc::I32)),
        FieldDesc::new(8, "i32_map", TypeDesc::Map(&TypeDesc::I32, &TypeDesc::I32)),
    ],
};

impl Record for TestUnion {
    fn desc() -> &'static StructDesc {
        &TEST_UNION_DESC
    }

    fn to_struct_value(&self) -> StructValue {
        let field = match self {
            Self::StringField(s) => (1, s.to_value()),
            Self::I32Field(i) => (2, i.to_value()),
            Self::StructField(ooe) => (3, ooe.to_value()),
            Self::StructList(list) => (4, list.to_value()),
            Self::OtherI32Field(i) => (5, i.to_value()),
            Self::I32Set(set) => (7, set.to_value()),
            Self::I32Map(map) => (8, map.to_value()),
        };
        StructValue::from(vec![field])
    }

    fn from_struct_value(sv: StructValue) -> Result<Self, CodecError> {
        let count = sv.len();
        let [(id, val)] = <[_; 1]>::try_from(sv.into_fields()).map_err(|_| {
            CodecError::UnionArityViolation {
                union: TEST_UNION_DESC.name,
                count,
            }
        })?;
        let convert = || -> Result<Self, CodecError> {
            let rec = match id {
                1 => Self::StringField(FromValue::from_value(val)?),
                2 => Self::I32Field(FromValue::from_value(val)?),
                3 => Self::StructField(FromValue::from_value(val)?),
                4 => Self::StructList(FromValue::from_value(val)?),
                5 => Self::OtherI32Field(FromValue::from_value(val)?),
                7 => Self::I32Set(FromValue::from_value(val)?),
                8 => Self::I32Map(FromValue::from_value(val)?),
                id => {
                    return Err(CodecError::UnknownField {
                        record: TEST_UNION_DESC.name,
                        id,
                    })
                }
            };
            Ok(rec)
        };
        convert().map_err(|e| e.in_field(TEST_UNION_DESC.name, id))
    }
}
record_value!(TestUnion);
