use crate::{BinaryReader, BinaryWriter};
use fastbin_types::serde::{CodecConfig, CodecError, TType, WriteLen};
use fastbin_types::types::{Codec, StructDesc, StructValue, TypeDesc, Value};
use std::io::{BufRead, Read, Write};
use tracing::trace;

#[derive(Clone, Default, Debug)]
pub struct RefCodec {
    config: CodecConfig,
}

impl RefCodec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    fn reader<'r, R: Read>(&self, r: &'r mut R) -> BinaryReader<'r, R> {
        BinaryReader::new(r, self.config.string_limit, self.config.container_limit)
    }
}

fn expect_ttype(ty: &TypeDesc, actual: TType) -> Result<(), CodecError> {
    match ty.ttype() {
        expected if expected == actual => Ok(()),
        expected => Err(CodecError::mismatch(expected, actual)),
    }
}

/* Write side. */
impl RefCodec {
    fn write_struct_body<W: Write>(
        &self,
        w: &mut BinaryWriter<W>,
        desc: &StructDesc,
        sv: &StructValue,
    ) -> Result<(), CodecError> {
        for (id, val) in self.config.wire_fields(desc, sv)?.iter() {
            let fd = desc.field(*id).ok_or(CodecError::UnknownField {
                record: desc.name,
                id: *id,
            })?;
            w.write_field_begin(fd.ty.ttype(), fd.id)?;
            self.write_value(w, &fd.ty, val)
                .map_err(|e| e.in_field(desc.name, fd.id))?;
        }
        w.write_field_stop()
    }

    fn write_value<W: Write>(
        &self,
        w: &mut BinaryWriter<W>,
        ty: &TypeDesc,
        val: &Value,
    ) -> Result<(), CodecError> {
        match (ty, val) {
            (TypeDesc::Bool, Value::Bool(b)) => w.write_bool(*b),
            (TypeDesc::Byte, Value::Byte(i)) => w.write_byte(*i),
            (TypeDesc::I16, Value::I16(i)) => w.write_i16(*i),
            (TypeDesc::I32, Value::I32(i)) => w.write_i32(*i),
            (TypeDesc::I64, Value::I64(i)) => w.write_i64(*i),
            (TypeDesc::Double, Value::Double(d)) => w.write_double(d.0),
            (TypeDesc::String | TypeDesc::Binary, Value::Binary(bytes)) => w.write_binary(bytes),
            (TypeDesc::Struct(desc_fn), Value::Struct(sv)) => self.write_struct_body(w, desc_fn(), sv),
            (TypeDesc::List(elem), Value::List(items)) => {
                w.write_list_begin(elem.ttype(), items.len())?;
                for item in items {
                    self.write_value(w, elem, item)?;
                }
                Ok(())
            }
            (TypeDesc::Set(elem), Value::Set(items)) => {
                w.write_set_begin(elem.ttype(), items.len())?;
                for item in items {
                    self.write_value(w, elem, item)?;
                }
                Ok(())
            }
            (TypeDesc::Map(key_ty, val_ty), Value::Map(entries)) => {
                w.write_map_begin(key_ty.ttype(), val_ty.ttype(), entries.len())?;
                for (k, v) in entries {
                    self.write_value(w, key_ty, k)?;
                    self.write_value(w, val_ty, v)?;
                }
                Ok(())
            }
            (ty, val) => Err(CodecError::mismatch(ty.ttype(), val.ttype())),
        }
    }
}

/* Read side. */
impl RefCodec {
    fn read_struct_body<R: Read>(
        &self,
        r: &mut BinaryReader<R>,
        desc: &StructDesc,
    ) -> Result<StructValue, CodecError> {
        let mut sv = StructValue::new();
        loop {
            let hdr = r.read_field_begin()?;
            if hdr.is_stop() {
                break;
            }
            match desc.field(hdr.id) {
                None => {
                    trace!(record = desc.name, id = hdr.id, "Skipping unknown field.");
                    r.skip(hdr.ttype)?;
                }
                Some(fd) => {
                    expect_ttype(&fd.ty, hdr.ttype).map_err(|e| e.in_field(desc.name, fd.id))?;
                    if self.config.admit_field(desc, &sv)? {
                        let val = self
                            .read_value(r, &fd.ty)
                            .map_err(|e| e.in_field(desc.name, fd.id))?;
                        sv.push(fd.id, val);
                    } else {
                        r.skip(hdr.ttype)?;
                    }
                }
            }
        }
        self.config.check_complete(desc, &sv)?;
        Ok(sv)
    }

    fn read_value<R: Read>(
        &self,
        r: &mut BinaryReader<R>,
        ty: &TypeDesc,
    ) -> Result<Value, CodecError> {
        let val = match ty {
            TypeDesc::Bool => Value::Bool(r.read_bool()?),
            TypeDesc::Byte => Value::Byte(r.read_byte()?),
            TypeDesc::I16 => Value::I16(r.read_i16()?),
            TypeDesc::I32 => Value::I32(r.read_i32()?),
            TypeDesc::I64 => Value::I64(r.read_i64()?),
            TypeDesc::Double => Value::Double(r.read_double()?.into()),
            TypeDesc::String | TypeDesc::Binary => Value::Binary(r.read_binary()?),
            TypeDesc::Struct(desc_fn) => Value::Struct(self.read_struct_body(r, desc_fn())?),
            TypeDesc::List(elem) => {
                let hdr = r.read_list_begin()?;
                expect_ttype(elem, hdr.elem)?;
                let mut items = Vec::with_capacity(hdr.count.prealloc());
                for _ in 0..*hdr.count {
                    items.push(self.read_value(r, elem)?);
                }
                Value::List(items)
            }
            TypeDesc::Set(elem) => {
                let hdr = r.read_set_begin()?;
                expect_ttype(elem, hdr.elem)?;
                let mut items = Vec::with_capacity(hdr.count.prealloc());
                for _ in 0..*hdr.count {
                    items.push(self.read_value(r, elem)?);
                }
                Value::Set(items)
            }
            TypeDesc::Map(key_ty, val_ty) => {
                let hdr = r.read_map_begin()?;
                expect_ttype(key_ty, hdr.key)?;
                expect_ttype(val_ty, hdr.val)?;
                let mut entries = Vec::with_capacity(hdr.count.prealloc());
                for _ in 0..*hdr.count {
                    let k = self.read_value(r, key_ty)?;
                    let v = self.read_value(r, val_ty)?;
                    entries.push((k, v));
                }
                Value::Map(entries)
            }
        };
        Ok(val)
    }
}

impl Codec for RefCodec {
    fn name(&self) -> &'static str {
        "reference"
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
        let mut w = BinaryWriter::new(w);
        self.write_struct_body(&mut w, desc, sv)?;
        Ok(w.w_len())
    }

    fn read_struct<R: BufRead>(
        &self,
        desc: &StructDesc,
        r: &mut R,
    ) -> Result<StructValue, CodecError> {
        let mut r = self.reader(r);
        self.read_struct_body(&mut r, desc)
    }

    fn skip<R: BufRead>(&self, ttype: TType, r: &mut R) -> Result<(), CodecError> {
        self.reader(r).skip(ttype)
    }
}
