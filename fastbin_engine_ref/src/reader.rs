use fastbin_types::serde::{
    CodecError, FieldHeader, LengthKind, MapHeader, SeqHeader, TType, TTypeInt, WireLen,
};
use std::io::{self, Read};
use std::mem;

pub struct BinaryReader<'r, R: Read> {
    r: &'r mut R,
    string_limit: Option<usize>,
    container_limit: Option<usize>,
}

impl<'r, R: Read> BinaryReader<'r, R> {
    pub fn new(r: &'r mut R, string_limit: Option<usize>, container_limit: Option<usize>) -> Self {
        Self {
            r,
            string_limit,
            container_limit,
        }
    }

    fn take<const N: usize>(&mut self) -> Result<[u8; N], CodecError> {
        let mut buf = [0u8; N];
        self.r.read_exact(&mut buf)?;
        Ok(buf)
    }

    fn read_value_ttype(&mut self) -> Result<TType, CodecError> {
        let [tag] = self.take::<1>()?;
        TType::from_value_tag(tag)
    }

    pub fn read_bool(&mut self) -> Result<bool, CodecError> {
        let [b] = self.take::<1>()?;
        Ok(b != 0)
    }

    pub fn read_byte(&mut self) -> Result<i8, CodecError> {
        Ok(i8::from_be_bytes(self.take()?))
    }

    pub fn read_i16(&mut self) -> Result<i16, CodecError> {
        Ok(i16::from_be_bytes(self.take()?))
    }

    pub fn read_i32(&mut self) -> Result<i32, CodecError> {
        Ok(i32::from_be_bytes(self.take()?))
    }

    pub fn read_i64(&mut self) -> Result<i64, CodecError> {
        Ok(i64::from_be_bytes(self.take()?))
    }

    pub fn read_double(&mut self) -> Result<f64, CodecError> {
        Ok(f64::from_bits(u64::from_be_bytes(self.take()?)))
    }

    fn read_len(&mut self, kind: LengthKind) -> Result<WireLen, CodecError> {
        let raw = self.read_i32()?;
        let limit = match kind {
            LengthKind::String => self.string_limit,
            LengthKind::Container => self.container_limit,
        };
        WireLen::from_wire(raw, kind, limit)
    }

    /// Allocates as the bytes arrive, so a bogus length cannot reserve memory up front.
    pub fn read_binary(&mut self) -> Result<Vec<u8>, CodecError> {
        let len = self.read_len(LengthKind::String)?;
        let mut buf = Vec::with_capacity(len.prealloc());
        let r_len = (&mut *self.r).take(*len as u64).read_to_end(&mut buf)?;
        if r_len != *len {
            return Err(CodecError::UnexpectedEof);
        }
        Ok(buf)
    }

    pub fn read_field_begin(&mut self) -> Result<FieldHeader, CodecError> {
        let [tag] = self.take::<1>()?;
        let ttype = TType::try_from(TTypeInt::from(tag))?;
        if ttype == TType::Stop {
            return Ok(FieldHeader::STOP);
        }
        let id = self.read_i16()?;
        Ok(FieldHeader { ttype, id })
    }

    pub fn read_list_begin(&mut self) -> Result<SeqHeader, CodecError> {
        let elem = self.read_value_ttype()?;
        let count = self.read_len(LengthKind::Container)?;
        Ok(SeqHeader { elem, count })
    }

    pub fn read_set_begin(&mut self) -> Result<SeqHeader, CodecError> {
        self.read_list_begin()
    }

    pub fn read_map_begin(&mut self) -> Result<MapHeader, CodecError> {
        let key = self.read_value_ttype()?;
        let val = self.read_value_ttype()?;
        let count = self.read_len(LengthKind::Container)?;
        Ok(MapHeader { key, val, count })
    }

    pub fn skip(&mut self, ttype: TType) -> Result<(), CodecError> {
        match ttype {
            TType::Stop => return Err(CodecError::UnknownType(*TTypeInt::from(ttype))),
            TType::Bool | TType::Byte => {
                self.take::<1>()?;
            }
            TType::I16 => {
                self.take::<{ mem::size_of::<i16>() }>()?;
            }
            TType::I32 => {
                self.take::<{ mem::size_of::<i32>() }>()?;
            }
            TType::I64 | TType::Double => {
                self.take::<{ mem::size_of::<i64>() }>()?;
            }
            TType::String => {
                let len = self.read_len(LengthKind::String)?;
                let r_len = io::copy(&mut (&mut *self.r).take(*len as u64), &mut io::sink())?;
                if r_len != *len as u64 {
                    return Err(CodecError::UnexpectedEof);
                }
            }
            TType::Struct => loop {
                let hdr = self.read_field_begin()?;
                if hdr.is_stop() {
                    break;
                }
                self.skip(hdr.ttype)?;
            },
            TType::Map => {
                let hdr = self.read_map_begin()?;
                for _ in 0..*hdr.count {
                    self.skip(hdr.key)?;
                    self.skip(hdr.val)?;
                }
            }
            TType::Set | TType::List => {
                let hdr = self.read_list_begin()?;
                for _ in 0..*hdr.count {
                    self.skip(hdr.elem)?;
                }
            }
        }
        Ok(())
    }
}
