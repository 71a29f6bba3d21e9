use super::helpers::default_codecs;
use anyhow::Result;
use fastbin_debug_proto::{Backwards, HolyMoley, JankyResult, RandomStuff};
use fastbin_harness::corpus;
use fastbin_types::serde::CodecError;
use fastbin_types::transport::{
    BufferedTransport, MemoryBuffer, NullTransport, OpenTransport, Transport,
};
use fastbin_types::types::Codec;
use std::io::ErrorKind;

#[test]
fn records_back_to_back() -> Result<()> {
    let hm = corpus::holy_moley();
    let rs = corpus::random_stuff_huge();
    let bw = corpus::backwards();

    for writer in default_codecs().iter() {
        let mut t = BufferedTransport::with_chunk_size(MemoryBuffer::new(), 13);
        {
            let mut open = OpenTransport::open(&mut t)?;
            writer.encode(&hm, &mut *open)?;
            writer.encode(&rs, &mut *open)?;
            writer.encode(&bw, &mut *open)?;
            open.close()?;
        }
        assert!(!t.is_open());
        let bytes = t.into_inner().into_inner();

        for reader in default_codecs().iter() {
            let mut t = BufferedTransport::with_chunk_size(MemoryBuffer::from(bytes.clone()), 5);
            assert_eq!(hm, reader.decode::<HolyMoley, _>(&mut t)?);
            assert_eq!(rs, reader.decode::<RandomStuff, _>(&mut t)?);
            assert_eq!(bw, reader.decode::<Backwards, _>(&mut t)?);
            match reader.decode::<JankyResult, _>(&mut t) {
                Err(CodecError::UnexpectedEof) => {}
                res => panic!("{} {:?}", reader.name(), res),
            }
        }
    }
    Ok(())
}

#[test]
fn closed_transports_fail() -> Result<()> {
    for codec in default_codecs().iter() {
        let mut mem = MemoryBuffer::from(codec.encode_solo(&corpus::reserved())?);
        mem.close()?;
        match codec.decode::<JankyResult, _>(&mut mem) {
            Err(CodecError::Io(e)) => assert_eq!(ErrorKind::NotConnected, e.kind()),
            res => panic!("{} {:?}", codec.name(), res),
        }
        match codec.encode(&JankyResult::new(1), &mut mem) {
            Err(CodecError::Io(e)) => assert_eq!(ErrorKind::NotConnected, e.kind()),
            res => panic!("{} {:?}", codec.name(), res),
        }
    }
    Ok(())
}

#[test]
fn write_lengths_match_the_sink() -> Result<()> {
    let hm = corpus::holy_moley();
    for codec in default_codecs().iter() {
        let mut sink = NullTransport::default();
        let w_len = codec.encode(&hm, &mut sink)?;
        assert_eq!(*w_len as u64, sink.bytes_written());
        assert_eq!(*w_len, codec.encode_solo(&hm)?.len());
    }
    Ok(())
}
