use fastbin_types::serde::{CodecError, LengthKind, TType, TTypeInt, WireLen, WriteLen};
use std::io::Write;
use tracing::trace;

pub const DEFAULT_STAGING_CAPACITY: usize = 4096;

/// Collects small writes in a staging buffer of fixed capacity.
///
/// The staging buffer is handed to the transport whenever the next write would overflow it.
/// Slices longer than half the capacity skip staging altogether.
/// Call [`Self::finish`] to push out whatever is still staged.
pub struct StagingWriter<'w, W: Write> {
    w: &'w mut W,
    staging: Vec<u8>,
    capacity: usize,
    w_len: usize,
}

impl<'w, W: Write> StagingWriter<'w, W> {
    pub fn new(w: &'w mut W, capacity: usize) -> Self {
        Self {
            w,
            staging: Vec::with_capacity(capacity),
            capacity,
            w_len: 0,
        }
    }

    fn flush_staging(&mut self) -> Result<(), CodecError> {
        if !self.staging.is_empty() {
            trace!(len = self.staging.len(), "Flushing staged bytes.");
            self.w.write_all(&self.staging)?;
            self.staging.clear();
        }
        Ok(())
    }

    fn put_slice(&mut self, bytes: &[u8]) -> Result<(), CodecError> {
        if bytes.len() > self.capacity / 2 {
            self.flush_staging()?;
            self.w.write_all(bytes)?;
        } else {
            if self.staging.len() + bytes.len() > self.capacity {
                self.flush_staging()?;
            }
            self.staging.extend_from_slice(bytes);
        }
        self.w_len += bytes.len();
        Ok(())
    }

    fn put<const N: usize>(&mut self, bytes: [u8; N]) -> Result<(), CodecError> {
        self.put_slice(&bytes)
    }

    pub fn write_bool(&mut self, b: bool) -> Result<(), CodecError> {
        self.put([b as u8])
    }

    pub fn write_byte(&mut self, i: i8) -> Result<(), CodecError> {
        self.put(i.to_be_bytes())
    }

    pub fn write_i16(&mut self, i: i16) -> Result<(), CodecError> {
        self.put(i.to_be_bytes())
    }

    pub fn write_i32(&mut self, i: i32) -> Result<(), CodecError> {
        self.put(i.to_be_bytes())
    }

    pub fn write_i64(&mut self, i: i64) -> Result<(), CodecError> {
        self.put(i.to_be_bytes())
    }

    pub fn write_double(&mut self, d: f64) -> Result<(), CodecError> {
        self.put(d.to_bits().to_be_bytes())
    }

    pub fn write_binary(&mut self, bytes: &[u8]) -> Result<(), CodecError> {
        let len = WireLen::from_len(bytes.len(), LengthKind::String)?;
        self.put(len.to_be_bytes())?;
        self.put_slice(bytes)
    }

    pub fn write_field_begin(&mut self, ttype: TType, id: i16) -> Result<(), CodecError> {
        let [hi, lo] = id.to_be_bytes();
        self.put([*TTypeInt::from(ttype), hi, lo])
    }

    pub fn write_field_stop(&mut self) -> Result<(), CodecError> {
        self.put([*TTypeInt::from(TType::Stop)])
    }

    pub fn write_seq_begin(&mut self, elem: TType, count: usize) -> Result<(), CodecError> {
        let count = WireLen::from_len(count, LengthKind::Container)?;
        let [c0, c1, c2, c3] = count.to_be_bytes();
        self.put([*TTypeInt::from(elem), c0, c1, c2, c3])
    }

    pub fn write_map_begin(&mut self, key: TType, val: TType, count: usize) -> Result<(), CodecError> {
        let count = WireLen::from_len(count, LengthKind::Container)?;
        let [c0, c1, c2, c3] = count.to_be_bytes();
        self.put([*TTypeInt::from(key), *TTypeInt::from(val), c0, c1, c2, c3])
    }

    /// Hands the staged bytes to the transport. Does not flush the transport itself.
    pub fn finish(mut self) -> Result<WriteLen, CodecError> {
        self.flush_staging()?;
        Ok(WriteLen::new_manual(self.w_len))
    }
}
