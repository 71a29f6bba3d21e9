use fastbin_types::types::{
    Accessor, Binary, Double, FieldDesc, Record, StructDesc, StructKind, TypeDesc,
};
use std::collections::{BTreeMap, BTreeSet};

static BONK_T: TypeDesc = TypeDesc::Struct(Bonk::desc);
static ONE_OF_EACH_T: TypeDesc = TypeDesc::Struct(OneOfEach::desc);
static WRAPPER_T: TypeDesc = TypeDesc::Struct(Wrapper::desc);
static BONK_LIST_T: TypeDesc = TypeDesc::List(&BONK_T);
static STRING_LIST_T: TypeDesc = TypeDesc::List(&TypeDesc::String);

/* OneOfEach */

/// One field of every scalar type, plus a few lists.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct OneOfEach {
    pub im_true: Option<bool>,
    pub im_false: Option<bool>,
    pub a_bite: Option<i8>,
    pub integer16: Option<i16>,
    pub integer32: Option<i32>,
    pub integer64: Option<i64>,
    pub double_precision: Option<Double>,
    pub some_characters: Option<String>,
    pub zomg_unicode: Option<String>,
    pub what_who: Option<bool>,
    pub base64: Option<Binary>,
    pub byte_list: Option<Vec<i8>>,
    pub i16_list: Option<Vec<i16>>,
    pub i64_list: Option<Vec<i64>>,
}

/// The schema gives some fields default values. Those start out set.
impl Default for OneOfEach {
    fn default() -> Self {
        Self {
            im_true: None,
            im_false: None,
            a_bite: Some(0x7f),
            integer16: Some(0x7fff),
            integer32: None,
            integer64: Some(10000000000),
            double_precision: None,
            some_characters: None,
            zomg_unicode: None,
            what_who: None,
            base64: None,
            byte_list: Some(vec![1, 2, 3]),
            i16_list: Some(vec![1, 2, 3]),
            i64_list: Some(vec![1, 2, 3]),
        }
    }
}

impl OneOfEach {
    /// Every field unset, schema defaults included.
    pub fn unset() -> Self {
        Self {
            im_true: None,
            im_false: None,
            a_bite: None,
            integer16: None,
            integer32: None,
            integer64: None,
            double_precision: None,
            some_characters: None,
            zomg_unicode: None,
            what_who: None,
            base64: None,
            byte_list: None,
            i16_list: None,
            i64_list: None,
        }
    }
}

pub static ONE_OF_EACH_DESC: StructDesc = StructDesc {
    name: "OneOfEach",
    kind: StructKind::Struct,
    fields: &[
        FieldDesc::new(1, "im_true", TypeDesc::Bool),
        FieldDesc::new(2, "im_false", TypeDesc::Bool),
        FieldDesc::new(3, "a_bite", TypeDesc::Byte),
        FieldDesc::new(4, "integer16", TypeDesc::I16),
        FieldDesc::new(5, "integer32", TypeDesc::I32),
        FieldDesc::new(6, "integer64", TypeDesc::I64),
        FieldDesc::new(7, "double_precision", TypeDesc::Double),
        FieldDesc::new(8, "some_characters", TypeDesc::String),
        FieldDesc::new(9, "zomg_unicode", TypeDesc::String),
        FieldDesc::new(10, "what_who", TypeDesc::Bool),
        FieldDesc::new(11, "base64", TypeDesc::Binary),
        FieldDesc::new(12, "byte_list", TypeDesc::List(&TypeDesc::Byte)),
        FieldDesc::new(13, "i16_list", TypeDesc::List(&TypeDesc::I16)),
        FieldDesc::new(14, "i64_list", TypeDesc::List(&TypeDesc::I64)),
    ],
};
static ONE_OF_EACH_FIELDS: &[Accessor<OneOfEach>] = &[
    field!(1, im_true),
    field!(2, im_false),
    field!(3, a_bite),
    field!(4, integer16),
    field!(5, integer32),
    field!(6, integer64),
    field!(7, double_precision),
    field!(8, some_characters),
    field!(9, zomg_unicode),
    field!(10, what_who),
    field!(11, base64),
    field!(12, byte_list),
    field!(13, i16_list),
    field!(14, i64_list),
];
table_record!(
    OneOfEach,
    ONE_OF_EACH_DESC,
    ONE_OF_EACH_FIELDS,
    blank = OneOfEach::unset()
);

/* Bonk */

#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct Bonk {
    pub type_: Option<i32>,
    pub message: Option<String>,
}

impl Bonk {
    pub fn new(type_: i32, message: &str) -> Self {
        Self {
            type_: Some(type_),
            message: Some(message.to_string()),
        }
    }
}

pub static BONK_DESC: StructDesc = StructDesc {
    name: "Bonk",
    kind: StructKind::Struct,
    fields: &[
        FieldDesc::new(1, "type", TypeDesc::I32),
        FieldDesc::new(2, "message", TypeDesc::String),
    ],
};
static BONK_FIELDS: &[Accessor<Bonk>] = &[field!(1, type_), field!(2, message)];
table_record!(Bonk, BONK_DESC, BONK_FIELDS);

/* HolyMoley */

#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct HolyMoley {
    pub big: Option<Vec<OneOfEach>>,
    pub contain: Option<BTreeSet<Vec<String>>>,
    pub bonks: Option<BTreeMap<String, Vec<Bonk>>>,
}

pub static HOLY_MOLEY_DESC: StructDesc = StructDesc {
    name: "HolyMoley",
    kind: StructKind::Struct,
    fields: &[
        FieldDesc::new(1, "big", TypeDesc::List(&ONE_OF_EACH_T)),
        FieldDesc::new(2, "contain", TypeDesc::Set(&STRING_LIST_T)),
        FieldDesc::new(3, "bonks", TypeDesc::Map(&TypeDesc::String, &BONK_LIST_T)),
    ],
};
static HOLY_MOLEY_FIELDS: &[Accessor<HolyMoley>] =
    &[field!(1, big), field!(2, contain), field!(3, bonks)];
table_record!(HolyMoley, HOLY_MOLEY_DESC, HOLY_MOLEY_FIELDS);

/* Empty, Wrapper */

#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct Empty {}

pub static EMPTY_DESC: StructDesc = StructDesc {
    name: "Empty",
    kind: StructKind::Struct,
    fields: &[],
};
static EMPTY_FIELDS: &[Accessor<Empty>] = &[];
table_record!(Empty, EMPTY_DESC, EMPTY_FIELDS);

#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct Wrapper {
    pub foo: Option<Empty>,
}

pub static WRAPPER_DESC: StructDesc = StructDesc {
    name: "Wrapper",
    kind: StructKind::Struct,
    fields: &[FieldDesc::new(1, "foo", TypeDesc::Struct(Empty::desc))],
};
static WRAPPER_FIELDS: &[Accessor<Wrapper>] = &[field!(1, foo)];
table_record!(Wrapper, WRAPPER_DESC, WRAPPER_FIELDS);

/* RandomStuff */

#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct RandomStuff {
    pub a: Option<i32>,
    pub b: Option<i32>,
    pub c: Option<i32>,
    pub d: Option<i32>,
    pub myintlist: Option<Vec<i32>>,
    pub maps: Option<BTreeMap<i32, Wrapper>>,
    pub bigint: Option<i64>,
    pub triple: Option<Double>,
}

pub static RANDOM_STUFF_DESC: StructDesc = StructDesc {
    name: "RandomStuff",
    kind: StructKind::Struct,
    fields: &[
        FieldDesc::new(1, "a", TypeDesc::I32),
        FieldDesc::new(2, "b", TypeDesc::I32),
        FieldDesc::new(3, "c", TypeDesc::I32),
        FieldDesc::new(4, "d", TypeDesc::I32),
        FieldDesc::new(5, "myintlist", TypeDesc::List(&TypeDesc::I32)),
        FieldDesc::new(6, "maps", TypeDesc::Map(&TypeDesc::I32, &WRAPPER_T)),
        FieldDesc::new(7, "bigint", TypeDesc::I64),
        FieldDesc::new(8, "triple", TypeDesc::Double),
    ],
};
static RANDOM_STUFF_FIELDS: &[Accessor<RandomStuff>] = &[
    field!(1, a),
    field!(2, b),
    field!(3, c),
    field!(4, d),
    field!(5, myintlist),
    field!(6, maps),
    field!(7, bigint),
    field!(8, triple),
];
table_record!(RandomStuff, RANDOM_STUFF_DESC, RANDOM_STUFF_FIELDS);

/// An older revision of [`RandomStuff`], for reading bytes written by the newer one.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct RandomStuffV0 {
    pub a: Option<i32>,
    pub b: Option<i32>,
    pub myintlist: Option<Vec<i32>>,
}

pub static RANDOM_STUFF_V0_DESC: StructDesc = StructDesc {
    name: "RandomStuffV0",
    kind: StructKind::Struct,
    fields: &[
        FieldDesc::new(1, "a", TypeDesc::I32),
        FieldDesc::new(2, "b", TypeDesc::I32),
        FieldDesc::new(5, "myintlist", TypeDesc::List(&TypeDesc::I32)),
    ],
};
static RANDOM_STUFF_V0_FIELDS: &[Accessor<RandomStuffV0>] =
    &[field!(1, a), field!(2, b), field!(5, myintlist)];
table_record!(RandomStuffV0, RANDOM_STUFF_V0_DESC, RANDOM_STUFF_V0_FIELDS);

/* Backwards */

/// Declares its higher id first.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct Backwards {
    pub first_tag2: Option<i32>,
    pub second_tag1: Option<i32>,
}

pub static BACKWARDS_DESC: StructDesc = StructDesc {
    name: "Backwards",
    kind: StructKind::Struct,
    fields: &[
        FieldDesc::new(2, "first_tag2", TypeDesc::I32),
        FieldDesc::new(1, "second_tag1", TypeDesc::I32),
    ],
};
static BACKWARDS_FIELDS: &[Accessor<Backwards>] =
    &[field!(2, first_tag2), field!(1, second_tag1)];
table_record!(Backwards, BACKWARDS_DESC, BACKWARDS_FIELDS);

/* Reserved, JankyResult, StructA */

/// Its only field is named after a keyword.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct Reserved {
    pub r#from: Option<String>,
}

pub static RESERVED_DESC: StructDesc = StructDesc {
    name: "Reserved",
    kind: StructKind::Struct,
    fields: &[FieldDesc::new(1, "from", TypeDesc::String)],
};
static RESERVED_FIELDS: &[Accessor<Reserved>] = &[field!(1, r#from)];
table_record!(Reserved, RESERVED_DESC, RESERVED_FIELDS);

/// The result of a service call. Its only field has id 0.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct JankyResult {
    pub success: Option<i32>,
}

impl JankyResult {
    pub fn new(success: i32) -> Self {
        Self {
            success: Some(success),
        }
    }
}

pub static JANKY_RESULT_DESC: StructDesc = StructDesc {
    name: "Janky_result",
    kind: StructKind::Struct,
    fields: &[FieldDesc::new(0, "success", TypeDesc::I32)],
};
static JANKY_RESULT_FIELDS: &[Accessor<JankyResult>] = &[field!(0, success)];
table_record!(JankyResult, JANKY_RESULT_DESC, JANKY_RESULT_FIELDS);

#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct StructA {
    pub s: String,
}

pub static STRUCT_A_DESC: StructDesc = StructDesc {
    name: "StructA",
    kind: StructKind::Struct,
    fields: &[FieldDesc::new(1, "s", TypeDesc::String).required()],
};
static STRUCT_A_FIELDS: &[Accessor<StructA>] = &[field!(required 1, s)];
table_record!(StructA, STRUCT_A_DESC, STRUCT_A_FIELDS);
