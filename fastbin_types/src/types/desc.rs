use crate::serde::TType;

/// The declared type of a field or of a container element.
///
/// Nested structs are referenced through a function rather than a reference,
/// so that a record type may contain itself, directly or through other records.
#[derive(Clone, Copy, Debug)]
pub enum TypeDesc {
    Bool,
    Byte,
    I16,
    I32,
    I64,
    Double,
    /// UTF-8 text. Shares [`TType::String`] with [`TypeDesc::Binary`] on the wire.
    String,
    Binary,
    Struct(fn() -> &'static StructDesc),
    List(&'static TypeDesc),
    Set(&'static TypeDesc),
    Map(&'static TypeDesc, &'static TypeDesc),
}

impl TypeDesc {
    pub fn ttype(&self) -> TType {
        match self {
            TypeDesc::Bool => TType::Bool,
            TypeDesc::Byte => TType::Byte,
            TypeDesc::I16 => TType::I16,
            TypeDesc::I32 => TType::I32,
            TypeDesc::I64 => TType::I64,
            TypeDesc::Double => TType::Double,
            TypeDesc::String | TypeDesc::Binary => TType::String,
            TypeDesc::Struct(_) => TType::Struct,
            TypeDesc::List(_) => TType::List,
            TypeDesc::Set(_) => TType::Set,
            TypeDesc::Map(_, _) => TType::Map,
        }
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Requiredness {
    Required,
    Optional,
    /// Neither keyword in the schema. Written when set, never demanded on read.
    Default,
}

#[derive(Debug)]
pub struct FieldDesc {
    pub id: i16,
    pub name: &'static str,
    pub ty: TypeDesc,
    pub req: Requiredness,
}

impl FieldDesc {
    pub const fn new(id: i16, name: &'static str, ty: TypeDesc) -> Self {
        Self {
            id,
            name,
            ty,
            req: Requiredness::Default,
        }
    }

    pub const fn required(mut self) -> Self {
        self.req = Requiredness::Required;
        self
    }

    pub const fn optional(mut self) -> Self {
        self.req = Requiredness::Optional;
        self
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum StructKind {
    Struct,
    Union,
}

/// The static schema of one record type.
/// `fields` lists the fields in declared order, which need not be ascending id order.
#[derive(Debug)]
pub struct StructDesc {
    pub name: &'static str,
    pub kind: StructKind,
    pub fields: &'static [FieldDesc],
}

impl StructDesc {
    pub fn field(&self, id: i16) -> Option<&FieldDesc> {
        self.fields.iter().find(|fd| fd.id == id)
    }
}
