use crate::serde::{TType, WireLen};

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct FieldHeader {
    pub ttype: TType,
    pub id: i16,
}
impl FieldHeader {
    pub const STOP: Self = Self {
        ttype: TType::Stop,
        id: 0,
    };

    pub fn is_stop(&self) -> bool {
        self.ttype == TType::Stop
    }
}

/// Header of a list or a set.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct SeqHeader {
    pub elem: TType,
    pub count: WireLen,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct MapHeader {
    pub key: TType,
    pub val: TType,
    pub count: WireLen,
}
