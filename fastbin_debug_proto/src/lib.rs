//! Record types of the debug protocol, written out the way a schema compiler would emit them.
//!
//! Structs are table driven: one static [`fastbin_types::types::StructDesc`]
//! and one static accessor table per type. Unions are enums.

/// One accessor for an optional field, i.e. one stored as an `Option`.
/// Prefix with `required` for a field stored bare.
macro_rules! field {
    (required $id:expr, $name:ident) => {
        fastbin_types::types::Accessor {
            id: $id,
            get: |r| Some(fastbin_types::types::IntoValue::to_value(&r.$name)),
            set: |r, v| {
                r.$name = fastbin_types::types::FromValue::from_value(v)?;
                Ok(())
            },
        }
    };
    ($id:expr, $name:ident) => {
        fastbin_types::types::Accessor {
            id: $id,
            get: |r| r.$name.as_ref().map(fastbin_types::types::IntoValue::to_value),
            set: |r, v| {
                r.$name = Some(fastbin_types::types::FromValue::from_value(v)?);
                Ok(())
            },
        }
    };
}

/// Lets a record be nested inside other records and containers.
macro_rules! record_value {
    ($typ:ident) => {
        impl fastbin_types::types::IntoValue for $typ {
            fn to_value(&self) -> fastbin_types::types::Value {
                use fastbin_types::types::Record;
                fastbin_types::types::Value::Struct(self.to_struct_value())
            }
        }
        impl fastbin_types::types::FromValue for $typ {
            fn from_value(
                val: fastbin_types::types::Value,
            ) -> Result<Self, fastbin_types::serde::CodecError> {
                fastbin_types::types::record_from_value(val)
            }
        }
    };
}

/// Decoding starts from `Default::default()`, unless the record names an all-unset
/// constructor with `blank = ...` because its `Default` fills in schema defaults.
macro_rules! table_record {
    ($typ:ident, $desc:ident, $fields:ident) => {
        table_record!($typ, $desc, $fields, blank = Default::default());
    };
    ($typ:ident, $desc:ident, $fields:ident, blank = $blank:expr) => {
        impl fastbin_types::types::Record for $typ {
            fn desc() -> &'static fastbin_types::types::StructDesc {
                &$desc
            }

            fn to_struct_value(&self) -> fastbin_types::types::StructValue {
                fastbin_types::types::collect_fields(self, $fields)
            }

            fn from_struct_value(
                sv: fastbin_types::types::StructValue,
            ) -> Result<Self, fastbin_types::serde::CodecError> {
                fastbin_types::types::populate_fields(&$desc, $fields, $blank, sv)
            }
        }
        record_value!($typ);
    };
}

mod recursive;
mod structs;
mod unions;


pub use recursive::*;
pub use structs::*;
pub use unions::*;
