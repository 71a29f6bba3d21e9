use fastbin_types::serde::{
    CodecError, FieldHeader, LengthKind, MapHeader, SeqHeader, TType, TTypeInt, WireLen,
};
use fastbin_types::types::{Double, Value};
use std::io::BufRead;

/// Reads straight out of the transport's buffer.
///
/// A value that is wholly inside the current `fill_buf` view is decoded in place.
/// Otherwise it is stitched together across as many refills as it takes.
pub struct SliceReader<'r, R: BufRead> {
    r: &'r mut R,
    string_limit: Option<usize>,
    container_limit: Option<usize>,
}

fn to_array<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut arr = [0u8; N];
    arr.copy_from_slice(&bytes[..N]);
    arr
}

/// `bytes` must be exactly as wide as `ttype`.
fn decode_fixed(ttype: TType, bytes: &[u8]) -> Result<Value, CodecError> {
    let val = match ttype {
        TType::Bool => Value::Bool(bytes[0] != 0),
        TType::Byte => Value::Byte(i8::from_be_bytes(to_array(bytes))),
        TType::I16 => Value::I16(i16::from_be_bytes(to_array(bytes))),
        TType::I32 => Value::I32(i32::from_be_bytes(to_array(bytes))),
        TType::I64 => Value::I64(i64::from_be_bytes(to_array(bytes))),
        TType::Double => Value::Double(Double(f64::from_bits(u64::from_be_bytes(to_array(
            bytes,
        ))))),
        ttype => return Err(CodecError::UnknownType(*TTypeInt::from(ttype))),
    };
    Ok(val)
}

impl<'r, R: BufRead> SliceReader<'r, R> {
    pub fn new(r: &'r mut R, string_limit: Option<usize>, container_limit: Option<usize>) -> Self {
        Self {
            r,
            string_limit,
            container_limit,
        }
    }

    fn take<const N: usize>(&mut self) -> Result<[u8; N], CodecError> {
        let buf = self.r.fill_buf()?;
        if buf.len() >= N {
            let arr = to_array(buf);
            self.r.consume(N);
            return Ok(arr);
        }
        self.take_straddling()
    }

    fn take_straddling<const N: usize>(&mut self) -> Result<[u8; N], CodecError> {
        let mut arr = [0u8; N];
        let mut filled = 0;
        while filled < N {
            let buf = self.r.fill_buf()?;
            if buf.is_empty() {
                return Err(CodecError::UnexpectedEof);
            }
            let n = buf.len().min(N - filled);
            arr[filled..filled + n].copy_from_slice(&buf[..n]);
            self.r.consume(n);
            filled += n;
        }
        Ok(arr)
    }

    fn take_bytes(&mut self, len: WireLen) -> Result<Vec<u8>, CodecError> {
        let mut out = Vec::with_capacity(len.prealloc());
        while out.len() < *len {
            let buf = self.r.fill_buf()?;
            if buf.is_empty() {
                return Err(CodecError::UnexpectedEof);
            }
            let n = buf.len().min(*len - out.len());
            out.extend_from_slice(&buf[..n]);
            self.r.consume(n);
        }
        Ok(out)
    }

    fn skip_bytes(&mut self, mut len: u64) -> Result<(), CodecError> {
        while len > 0 {
            let avail = self.r.fill_buf()?.len();
            if avail == 0 {
                return Err(CodecError::UnexpectedEof);
            }
            let n = (avail as u64).min(len);
            self.r.consume(n as usize);
            len -= n;
        }
        Ok(())
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
        let limit = match kind {
            LengthKind::String => self.string_limit,
            LengthKind::Container => self.container_limit,
        };
        WireLen::from_wire(self.read_i32()?, kind, limit)
    }

    pub fn read_binary(&mut self) -> Result<Vec<u8>, CodecError> {
        let len = self.read_len(LengthKind::String)?;
        self.take_bytes(len)
    }

    pub fn read_field_begin(&mut self) -> Result<FieldHeader, CodecError> {
        let buf = self.r.fill_buf()?;
        if buf.len() >= 3 && buf[0] != *TTypeInt::from(TType::Stop) {
            let ttype = TType::try_from(TTypeInt::from(buf[0]))?;
            let id = i16::from_be_bytes([buf[1], buf[2]]);
            self.r.consume(3);
            return Ok(FieldHeader { ttype, id });
        }

        let [tag] = self.take::<1>()?;
        match TType::try_from(TTypeInt::from(tag))? {
            TType::Stop => Ok(FieldHeader::STOP),
            ttype => Ok(FieldHeader {
                ttype,
                id: self.read_i16()?,
            }),
        }
    }

    pub fn read_seq_begin(&mut self) -> Result<SeqHeader, CodecError> {
        let [elem] = self.take::<1>()?;
        let elem = TType::from_value_tag(elem)?;
        let count = self.read_len(LengthKind::Container)?;
        Ok(SeqHeader { elem, count })
    }

    pub fn read_map_begin(&mut self) -> Result<MapHeader, CodecError> {
        let [key] = self.take::<1>()?;
        let key = TType::from_value_tag(key)?;
        let [val] = self.take::<1>()?;
        let val = TType::from_value_tag(val)?;
        let count = self.read_len(LengthKind::Container)?;
        Ok(MapHeader { key, val, count })
    }

    /// Reads one value of a fixed-width type.
    pub fn read_fixed(&mut self, ttype: TType) -> Result<Value, CodecError> {
        match ttype {
            TType::Bool => self.read_bool().map(Value::Bool),
            TType::Byte => self.read_byte().map(Value::Byte),
            TType::I16 => self.read_i16().map(Value::I16),
            TType::I32 => self.read_i32().map(Value::I32),
            TType::I64 => self.read_i64().map(Value::I64),
            TType::Double => self.read_double().map(|d| Value::Double(Double(d))),
            ttype => Err(CodecError::UnknownType(*TTypeInt::from(ttype))),
        }
    }

    /// Reads `count` consecutive values of the fixed-width type `ttype` into `out`.
    ///
    /// Whole elements are decoded in bulk from each buffer view.
    /// An element cut by the end of the view is read on its own.
    pub fn read_fixed_run(
        &mut self,
        ttype: TType,
        count: usize,
        out: &mut Vec<Value>,
    ) -> Result<(), CodecError> {
        let width = match ttype.fixed_width() {
            Some(width) => width,
            None => return Err(CodecError::UnknownType(*TTypeInt::from(ttype))),
        };
        let mut remaining = count;
        while remaining > 0 {
            let buf = self.r.fill_buf()?;
            let whole = (buf.len() / width).min(remaining);
            if whole == 0 {
                out.push(self.read_fixed(ttype)?);
                remaining -= 1;
                continue;
            }
            for chunk in buf[..whole * width].chunks_exact(width) {
                out.push(decode_fixed(ttype, chunk)?);
            }
            self.r.consume(whole * width);
            remaining -= whole;
        }
        Ok(())
    }

    pub fn skip(&mut self, ttype: TType) -> Result<(), CodecError> {
        if let Some(width) = ttype.fixed_width() {
            return self.skip_bytes(width as u64);
        }
        match ttype {
            TType::String => {
                let len = self.read_len(LengthKind::String)?;
                self.skip_bytes(*len as u64)?;
            }
            TType::Struct => loop {
                let hdr = self.read_field_begin()?;
                if hdr.is_stop() {
                    break;
                }
                self.skip(hdr.ttype)?;
            },
            TType::Set | TType::List => {
                let hdr = self.read_seq_begin()?;
                match hdr.elem.fixed_width() {
                    Some(width) => self.skip_bytes(*hdr.count as u64 * width as u64)?,
                    None => {
                        for _ in 0..*hdr.count {
                            self.skip(hdr.elem)?;
                        }
                    }
                }
            }
            TType::Map => {
                let hdr = self.read_map_begin()?;
                match (hdr.key.fixed_width(), hdr.val.fixed_width()) {
                    (Some(kw), Some(vw)) => {
                        self.skip_bytes(*hdr.count as u64 * (kw + vw) as u64)?
                    }
                    _ => {
                        for _ in 0..*hdr.count {
                            self.skip(hdr.key)?;
                            self.skip(hdr.val)?;
                        }
                    }
                }
            }
            ttype => return Err(CodecError::UnknownType(*TTypeInt::from(ttype))),
        }
        Ok(())
    }
}
