use fastbin_types::serde::{CodecError, LengthKind, TTypeInt, TType, WireLen, WriteLen};
use std::io::Write;

pub struct BinaryWriter<'w, W: Write> {
    w: &'w mut W,
    w_len: usize,
}

impl<'w, W: Write> BinaryWriter<'w, W> {
    pub fn new(w: &'w mut W) -> Self {
        Self { w, w_len: 0 }
    }

    pub fn w_len(&self) -> WriteLen {
        WriteLen::new_manual(self.w_len)
    }

    fn put(&mut self, bytes: &[u8]) -> Result<(), CodecError> {
        self.w.write_all(bytes)?;
        self.w_len += bytes.len();
        Ok(())
    }

    fn put_ttype(&mut self, ttype: TType) -> Result<(), CodecError> {
        self.put(&[*TTypeInt::from(ttype)])
    }

    pub fn write_bool(&mut self, b: bool) -> Result<(), CodecError> {
        self.put(&[b as u8])
    }

    pub fn write_byte(&mut self, i: i8) -> Result<(), CodecError> {
        self.put(&i.to_be_bytes())
    }

    pub fn write_i16(&mut self, i: i16) -> Result<(), CodecError> {
        self.put(&i.to_be_bytes())
    }

    pub fn write_i32(&mut self, i: i32) -> Result<(), CodecError> {
        self.put(&i.to_be_bytes())
    }

    pub fn write_i64(&mut self, i: i64) -> Result<(), CodecError> {
        self.put(&i.to_be_bytes())
    }

    pub fn write_double(&mut self, d: f64) -> Result<(), CodecError> {
        self.put(&d.to_bits().to_be_bytes())
    }

    pub fn write_binary(&mut self, bytes: &[u8]) -> Result<(), CodecError> {
        let len = WireLen::from_len(bytes.len(), LengthKind::String)?;
        self.put(&len.to_be_bytes())?;
        self.put(bytes)
    }

    pub fn write_field_begin(&mut self, ttype: TType, id: i16) -> Result<(), CodecError> {
        self.put_ttype(ttype)?;
        self.write_i16(id)
    }

    pub fn write_field_stop(&mut self) -> Result<(), CodecError> {
        self.put_ttype(TType::Stop)
    }

    pub fn write_list_begin(&mut self, elem: TType, count: usize) -> Result<(), CodecError> {
        let count = WireLen::from_len(count, LengthKind::Container)?;
        self.put_ttype(elem)?;
        self.put(&count.to_be_bytes())
    }

    pub fn write_set_begin(&mut self, elem: TType, count: usize) -> Result<(), CodecError> {
        self.write_list_begin(elem, count)
    }

    pub fn write_map_begin(&mut self, key: TType, val: TType, count: usize) -> Result<(), CodecError> {
        let count = WireLen::from_len(count, LengthKind::Container)?;
        self.put_ttype(key)?;
        self.put_ttype(val)?;
        self.put(&count.to_be_bytes())
    }
}
