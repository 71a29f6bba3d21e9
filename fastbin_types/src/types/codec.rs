use crate::serde::{CodecConfig, CodecError, TType, WriteLen};
use crate::types::{Record, StructDesc, StructValue};
use std::io::{BufRead, Write};

/// One complete realization of the wire codec and the record codec.
///
/// Implementations must agree byte for byte on what they write,
/// and must read each other's bytes into equal values.
pub trait Codec {
    fn name(&self) -> &'static str;

    fn config(&self) -> &CodecConfig;

    fn write_struct<W: Write>(
        &self,
        desc: &StructDesc,
        sv: &StructValue,
        w: &mut W,
    ) -> Result<WriteLen, CodecError>;

    /// Reads one struct up to and including its stop tag.
    /// Fields unknown to `desc` are skipped.
    fn read_struct<R: BufRead>(
        &self,
        desc: &StructDesc,
        r: &mut R,
    ) -> Result<StructValue, CodecError>;

    /// Consumes one value of type `ttype` without materializing it.
    fn skip<R: BufRead>(&self, ttype: TType, r: &mut R) -> Result<(), CodecError>;

    fn encode<Rec: Record, W: Write>(&self, rec: &Rec, w: &mut W) -> Result<WriteLen, CodecError> {
        self.write_struct(Rec::desc(), &rec.to_struct_value(), w)
    }

    fn decode<Rec: Record, R: BufRead>(&self, r: &mut R) -> Result<Rec, CodecError> {
        let sv = self.read_struct(Rec::desc(), r)?;
        Rec::from_struct_value(sv)
    }

    fn encode_solo<Rec: Record>(&self, rec: &Rec) -> Result<Vec<u8>, CodecError> {
        let mut buf = vec![];
        self.encode(rec, &mut buf)?;
        Ok(buf)
    }

    fn decode_solo<Rec: Record>(&self, buf: &[u8]) -> Result<Rec, CodecError> {
        let mut r = buf;
        self.decode(&mut r)
    }
}
