use derive_more::{Deref, DerefMut, From, Into};
use std::cmp::Ordering;

/// An `f64` that is equal to another only when the bits are identical.
///
/// Two codecs reading the same bytes must produce the same bits,
/// so no tolerance is applied anywhere.
#[derive(From, Into, Clone, Copy, Default, Debug)]
pub struct Double(pub f64);
impl PartialEq for Double {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}
impl Eq for Double {}
impl PartialOrd for Double {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Double {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Raw bytes carried by a `binary` field. `string` fields use [`String`] instead.
#[derive(From, Into, Deref, DerefMut, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Default, Debug)]
pub struct Binary(pub Vec<u8>);
impl From<&[u8]> for Binary {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}
