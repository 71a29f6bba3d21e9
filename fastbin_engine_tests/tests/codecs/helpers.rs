use fastbin_engine_accel::AccelCodec;
use fastbin_engine_ref::RefCodec;
use fastbin_types::serde::{CodecConfig, CodecError, TType, WriteLen};
use fastbin_types::transport::{BufferedTransport, MemoryBuffer};
use fastbin_types::types::{Codec, Record, StructDesc, StructValue};
use std::io::{BufRead, Write};

/// Either codec, so that one test body can run against both.
pub enum AnyCodec {
    Ref(RefCodec),
    Accel(AccelCodec),
}

impl Codec for AnyCodec {
    fn name(&self) -> &'static str {
        match self {
            AnyCodec::Ref(c) => c.name(),
            AnyCodec::Accel(c) => c.name(),
        }
    }

    fn config(&self) -> &CodecConfig {
        match self {
            AnyCodec::Ref(c) => c.config(),
            AnyCodec::Accel(c) => c.config(),
        }
    }

    fn write_struct<W: Write>(
        &self,
        desc: &StructDesc,
        sv: &StructValue,
        w: &mut W,
    ) -> Result<WriteLen, CodecError> {
        match self {
            AnyCodec::Ref(c) => c.write_struct(desc, sv, w),
            AnyCodec::Accel(c) => c.write_struct(desc, sv, w),
        }
    }

    fn read_struct<R: BufRead>(
        &self,
        desc: &StructDesc,
        r: &mut R,
    ) -> Result<StructValue, CodecError> {
        match self {
            AnyCodec::Ref(c) => c.read_struct(desc, r),
            AnyCodec::Accel(c) => c.read_struct(desc, r),
        }
    }

    fn skip<R: BufRead>(&self, ttype: TType, r: &mut R) -> Result<(), CodecError> {
        match self {
            AnyCodec::Ref(c) => c.skip(ttype, r),
            AnyCodec::Accel(c) => c.skip(ttype, r),
        }
    }
}

pub fn codecs(config: CodecConfig) -> [AnyCodec; 3] {
    [
        AnyCodec::Ref(RefCodec::new(config)),
        AnyCodec::Accel(AccelCodec::new(config)),
        AnyCodec::Accel(AccelCodec::new(config).with_staging_capacity(3)),
    ]
}

pub fn default_codecs() -> [AnyCodec; 3] {
    codecs(CodecConfig::default())
}

/// Decodes through a buffered transport that refills `chunk_size` bytes at a time.
pub fn decode_chunked<C: Codec, Rec: Record>(
    codec: &C,
    bytes: &[u8],
    chunk_size: usize,
) -> Result<Rec, CodecError> {
    let mut t = BufferedTransport::with_chunk_size(MemoryBuffer::from(bytes.to_vec()), chunk_size);
    codec.decode(&mut t)
}

pub fn read_chunked<C: Codec>(
    codec: &C,
    desc: &StructDesc,
    bytes: &[u8],
    chunk_size: usize,
) -> Result<StructValue, CodecError> {
    let mut t = BufferedTransport::with_chunk_size(MemoryBuffer::from(bytes.to_vec()), chunk_size);
    codec.read_struct(desc, &mut t)
}
