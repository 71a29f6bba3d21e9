use crate::{SliceReader, StagingWriter, DEFAULT_STAGING_CAPACITY};
use fastbin_types::serde::{CodecConfig, CodecError, TType, WriteLen};
use fastbin_types::types::{Codec, StructDesc, StructValue, TypeDesc, Value};
use std::io::{BufRead, Write};
use tracing::trace;

#[derive(Clone, Debug)]
pub struct AccelCodec {
    config: CodecConfig,
    staging_capacity: usize,
}

impl Default for AccelCodec {
    fn default() -> Self {
        Self::new(CodecConfig::default())
    }
}

impl AccelCodec {
    pub fn new(config: CodecConfig) -> Self {
        Self {
            config,
            staging_capacity: DEFAULT_STAGING_CAPACITY,
        }
    }

    pub fn with_staging_capacity(mut self, staging_capacity: usize) -> Self {
        self.staging_capacity = staging_capacity;
        self
    }

    pub fn staging_capacity(&self) -> usize {
        self.staging_capacity
    }
}

/* Encoding. */
impl AccelCodec {
    fn put_struct<W: Write>(
        &self,
        w: &mut StagingWriter<W>,
        desc: &StructDesc,
        sv: &StructValue,
    ) -> Result<(), CodecError> {
        for (id, val) in self.config.wire_fields(desc, sv)?.iter() {
            let fd = match desc.field(*id) {
                Some(fd) => fd,
                None => {
                    return Err(CodecError::UnknownField {
                        record: desc.name,
                        id: *id,
                    })
                }
            };
            let ttype = fd.ty.ttype();
            if ttype != val.ttype() {
                return Err(CodecError::mismatch(ttype, val.ttype()).in_field(desc.name, fd.id));
            }
            w.write_field_begin(ttype, fd.id)?;
            self.put_value(w, &fd.ty, val)
                .map_err(|e| e.in_field(desc.name, fd.id))?;
        }
        w.write_field_stop()
    }

    /// The caller has checked that `val` carries the wire type of `ty`.
    fn put_value<W: Write>(
        &self,
        w: &mut StagingWriter<W>,
        ty: &TypeDesc,
        val: &Value,
    ) -> Result<(), CodecError> {
        match (val, ty) {
            (Value::Bool(b), _) => w.write_bool(*b),
            (Value::Byte(i), _) => w.write_byte(*i),
            (Value::I16(i), _) => w.write_i16(*i),
            (Value::I32(i), _) => w.write_i32(*i),
            (Value::I64(i), _) => w.write_i64(*i),
            (Value::Double(d), _) => w.write_double(d.0),
            (Value::Binary(bytes), _) => w.write_binary(bytes),
            (Value::Struct(sv), TypeDesc::Struct(desc_fn)) => self.put_struct(w, desc_fn(), sv),
            (Value::List(items), TypeDesc::List(elem)) | (Value::Set(items), TypeDesc::Set(elem)) => {
                let elem_ttype = elem.ttype();
                w.write_seq_begin(elem_ttype, items.len())?;
                for item in items {
                    if item.ttype() != elem_ttype {
                        return Err(CodecError::mismatch(elem_ttype, item.ttype()));
                    }
                    self.put_value(w, elem, item)?;
                }
                Ok(())
            }
            (Value::Map(entries), TypeDesc::Map(key_ty, val_ty)) => {
                let (key_ttype, val_ttype) = (key_ty.ttype(), val_ty.ttype());
                w.write_map_begin(key_ttype, val_ttype, entries.len())?;
                for (k, v) in entries {
                    if k.ttype() != key_ttype {
                        return Err(CodecError::mismatch(key_ttype, k.ttype()));
                    }
                    if v.ttype() != val_ttype {
                        return Err(CodecError::mismatch(val_ttype, v.ttype()));
                    }
                    self.put_value(w, key_ty, k)?;
                    self.put_value(w, val_ty, v)?;
                }
                Ok(())
            }
            (val, ty) => Err(CodecError::mismatch(ty.ttype(), val.ttype())),
        }
    }
}

/* Decoding. */
impl AccelCodec {
    fn get_struct<R: BufRead>(
        &self,
        r: &mut SliceReader<R>,
        desc: &StructDesc,
    ) -> Result<StructValue, CodecError> {
        let mut sv = StructValue::with_capacity(desc.fields.len());
        loop {
            let hdr = r.read_field_begin()?;
            if hdr.is_stop() {
                break;
            }
            let fd = match desc.field(hdr.id) {
                Some(fd) => fd,
                None => {
                    trace!(record = desc.name, id = hdr.id, "Skipping unknown field.");
                    r.skip(hdr.ttype)?;
                    continue;
                }
            };
            let expected = fd.ty.ttype();
            if expected != hdr.ttype {
                return Err(CodecError::mismatch(expected, hdr.ttype).in_field(desc.name, fd.id));
            }
            if !self.config.admit_field(desc, &sv)? {
                r.skip(hdr.ttype)?;
                continue;
            }
            let val = self
                .get_value(r, &fd.ty)
                .map_err(|e| e.in_field(desc.name, fd.id))?;
            sv.push(fd.id, val);
        }
        self.config.check_complete(desc, &sv)?;
        Ok(sv)
    }

    fn get_items<R: BufRead>(
        &self,
        r: &mut SliceReader<R>,
        elem: &TypeDesc,
    ) -> Result<Vec<Value>, CodecError> {
        let hdr = r.read_seq_begin()?;
        let expected = elem.ttype();
        if expected != hdr.elem {
            return Err(CodecError::mismatch(expected, hdr.elem));
        }
        let mut items = Vec::with_capacity(hdr.count.prealloc());
        if expected.fixed_width().is_some() {
            r.read_fixed_run(expected, *hdr.count, &mut items)?;
        } else {
            for _ in 0..*hdr.count {
                items.push(self.get_value(r, elem)?);
            }
        }
        Ok(items)
    }

    fn get_value<R: BufRead>(
        &self,
        r: &mut SliceReader<R>,
        ty: &TypeDesc,
    ) -> Result<Value, CodecError> {
        match ty {
            TypeDesc::Bool
            | TypeDesc::Byte
            | TypeDesc::I16
            | TypeDesc::I32
            | TypeDesc::I64
            | TypeDesc::Double => r.read_fixed(ty.ttype()),
            TypeDesc::String | TypeDesc::Binary => r.read_binary().map(Value::Binary),
            TypeDesc::Struct(desc_fn) => self.get_struct(r, desc_fn()).map(Value::Struct),
            TypeDesc::List(elem) => self.get_items(r, elem).map(Value::List),
            TypeDesc::Set(elem) => self.get_items(r, elem).map(Value::Set),
            TypeDesc::Map(key_ty, val_ty) => {
                let hdr = r.read_map_begin()?;
                let (key_ttype, val_ttype) = (key_ty.ttype(), val_ty.ttype());
                if key_ttype != hdr.key {
                    return Err(CodecError::mismatch(key_ttype, hdr.key));
                }
                if val_ttype != hdr.val {
                    return Err(CodecError::mismatch(val_ttype, hdr.val));
                }
                let mut entries = Vec::with_capacity(hdr.count.prealloc());
                for _ in 0..*hdr.count {
                    let k = self.get_value(r, key_ty)?;
                    let v = self.get_value(r, val_ty)?;
                    entries.push((k, v));
                }
                Ok(Value::Map(entries))
            }
        }
    }

    fn reader<'r, R: BufRead>(&self, r: &'r mut R) -> SliceReader<'r, R> {
        SliceReader::new(r, self.config.string_limit, self.config.container_limit)
    }
}

impl Codec for AccelCodec {
    fn name(&self) -> &'static str {
        "accelerated"
    }

    fn config(&self) -> &CodecConfig {
        &self.config
    }

    fn write_struct<W: Write>(
        &self,
        desc: &StructDesc,
        sv: &StructValue,
        w: &mut W,
    ) -> Result<WriteLen, CodecError> {
        let mut w = StagingWriter::new(w, self.staging_capacity);
        self.put_struct(&mut w, desc, sv)?;
        w.finish()
    }

    fn read_struct<R: BufRead>(
        &self,
        desc: &StructDesc,
        r: &mut R,
    ) -> Result<StructValue, CodecError> {
        let mut r = self.reader(r);
        self.get_struct(&mut r, desc)
    }

    fn skip<R: BufRead>(&self, ttype: TType, r: &mut R) -> Result<(), CodecError> {
        self.reader(r).skip(ttype)
    }
}
