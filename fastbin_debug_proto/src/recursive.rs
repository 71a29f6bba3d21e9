use fastbin_types::types::{Accessor, FieldDesc, Record, StructDesc, StructKind, TypeDesc};

static REC_TREE_T: TypeDesc = TypeDesc::Struct(RecTree::desc);

#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct RecTree {
    pub children: Option<Vec<RecTree>>,
    pub item: Option<i16>,
}

pub static REC_TREE_DESC: StructDesc = StructDesc {
    name: "RecTree",
    kind: StructKind::Struct,
    fields: &[
        FieldDesc::new(1, "children", TypeDesc::List(&REC_TREE_T)),
        FieldDesc::new(2, "item", TypeDesc::I16),
    ],
};
static REC_TREE_FIELDS: &[Accessor<RecTree>] = &[field!(1, children), field!(2, item)];
table_record!(RecTree, REC_TREE_DESC, REC_TREE_FIELDS);

#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct RecList {
    pub nextitem: Option<Box<RecList>>,
    pub item: Option<i16>,
}

impl RecList {
    /// A chain of `depth` links, with items counting down to 1 at the tail.
    pub fn chain(depth: i16) -> Self {
        let mut list = RecList::default();
        for item in 1..=depth {
            let prev = std::mem::take(&mut list);
            list = RecList {
                nextitem: (item > 1).then(|| Box::new(prev)),
                item: Some(item),
            };
        }
        list
    }

    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut link = Some(self);
        while let Some(list) = link {
            depth += 1;
            link = list.nextitem.as_deref();
        }
        depth
    }
}

/// Unlinks iteratively, so that dropping a long chain does not recurse.
impl Drop for RecList {
    fn drop(&mut self) {
        let mut next = self.nextitem.take();
        while let Some(mut list) = next {
            next = list.nextitem.take();
        }
    }
}

pub static REC_LIST_DESC: StructDesc = StructDesc {
    name: "RecList",
    kind: StructKind::Struct,
    fields: &[
        FieldDesc::new(1, "nextitem", TypeDesc::Struct(RecList::desc)),
        FieldDesc::new(3, "item", TypeDesc::I16),
    ],
};
static REC_LIST_FIELDS: &[Accessor<RecList>] = &[field!(1, nextitem), field!(3, item)];
table_record!(RecList, REC_LIST_DESC, REC_LIST_FIELDS);

/* CoRec, CoRec2: each contains the other. */

#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct CoRec {
    pub other: Option<Box<CoRec2>>,
}

pub static CO_REC_DESC: StructDesc = StructDesc {
    name: "CoRec",
    kind: StructKind::Struct,
    fields: &[FieldDesc::new(1, "other", TypeDesc::Struct(CoRec2::desc))],
};
static CO_REC_FIELDS: &[Accessor<CoRec>] = &[field!(1, other)];
table_record!(CoRec, CO_REC_DESC, CO_REC_FIELDS);

#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct CoRec2 {
    pub other: Option<CoRec>,
}

pub static CO_REC2_DESC: StructDesc = StructDesc {
    name: "CoRec2",
    kind: StructKind::Struct,
    fields: &[FieldDesc::new(1, "other", TypeDesc::Struct(CoRec::desc))],
};
static CO_REC2_FIELDS: &[Accessor<CoRec2>] = &[field!(1, other)];
table_record!(CoRec2, CO_REC2_DESC, CO_REC2_FIELDS);
