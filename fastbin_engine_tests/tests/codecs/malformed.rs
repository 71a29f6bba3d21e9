use super::helpers::{codecs, decode_chunked, default_codecs};
use anyhow::Result;
use fastbin_debug_proto::{Bonk, HolyMoley, OneOfEach, RandomStuff, Reserved};
use fastbin_harness::corpus;
use fastbin_types::serde::{CodecConfig, CodecError, LengthKind, TType};
use fastbin_types::types::Codec;

#[test]
fn negative_lengths() {
    let cases: [(&[u8], LengthKind); 4] = [
        (&[0x0b, 0x00, 0x01, 0xff, 0xff, 0xff, 0xff], LengthKind::String),
        (&[0x0b, 0x00, 0x01, 0x80, 0x00, 0x00, 0x00], LengthKind::String),
        (&[0x0f, 0x00, 0x05, 0x08, 0xff, 0xff, 0xff, 0xfe], LengthKind::Container),
        (&[0x0d, 0x00, 0x06, 0x08, 0x0c, 0xff, 0xff, 0xff, 0xff], LengthKind::Container),
    ];
    for (bytes, kind) in cases {
        for codec in default_codecs().iter() {
            let res = if kind == LengthKind::String {
                codec.decode_solo::<Reserved>(bytes).map(|_| ())
            } else {
                codec.decode_solo::<RandomStuff>(bytes).map(|_| ())
            };
            match res {
                Err(CodecError::InvalidLength { kind: k, len }) => {
                    assert_eq!(kind, k);
                    assert!(len < 0, "{len}");
                }
                res => panic!("{} {:02x?} {:?}", codec.name(), bytes, res),
            }
        }
    }
}

#[test]
fn unknown_type_tags() {
    for tag in [0x01, 0x05, 0x07, 0x09, 0x10, 0x7f, 0xff] {
        let field = [tag, 0x00, 0x01, 0x00];
        let list_elem = [0x0f, 0x00, 0x05, tag, 0x00, 0x00, 0x00, 0x00, 0x00];
        /* A bad key tag is reported even when the value tag never arrives. */
        let map_key = [0x0d, 0x00, 0x06, tag];
        let map_val = [0x0d, 0x00, 0x06, 0x08, tag];
        for codec in default_codecs().iter() {
            for bytes in [&field[..], &list_elem[..], &map_key[..], &map_val[..]] {
                match codec.decode_solo::<RandomStuff>(bytes) {
                    Err(CodecError::UnknownType(t)) => assert_eq!(tag, t),
                    res => panic!("{} {:02x?} {:?}", codec.name(), bytes, res),
                }
            }
        }
    }
}

#[test]
fn tag_disagrees_with_schema() {
    let cases: [(&[u8], &str, TType, TType); 3] = [
        /* a: i32, sent as i64 */
        (&[0x0a, 0x00, 0x01, 0, 0, 0, 0, 0, 0, 0, 0, 0x00], "RandomStuff.1", TType::I32, TType::I64),
        /* myintlist: list<i32>, sent as set<i32> */
        (&[0x0e, 0x00, 0x05, 0x08, 0, 0, 0, 0, 0x00], "RandomStuff.5", TType::List, TType::Set),
        /* myintlist: list<i32>, sent as list<i16> */
        (&[0x0f, 0x00, 0x05, 0x06, 0, 0, 0, 0, 0x00], "RandomStuff.5", TType::I32, TType::I16),
    ];
    for (bytes, ctx, exp, act) in cases {
        for codec in default_codecs().iter() {
            match decode_chunked::<_, RandomStuff>(codec, bytes, 2) {
                Err(CodecError::TypeMismatch {
                    context,
                    expected,
                    actual,
                }) => assert_eq!((ctx, exp, act), (&context[..], expected, actual)),
                res => panic!("{} {:02x?} {:?}", codec.name(), bytes, res),
            }
        }
    }

    /* Nested: maps: map<i32, Wrapper>, whose Wrapper.foo is a struct but arrives as an i32. */
    let bytes = [
        0x0d, 0x00, 0x06, 0x08, 0x0c, 0, 0, 0, 1, //
        0, 0, 0, 7, 0x08, 0x00, 0x01, 0, 0, 0, 0, 0x00, //
        0x00,
    ];
    for codec in default_codecs().iter() {
        match codec.decode_solo::<RandomStuff>(&bytes) {
            Err(CodecError::TypeMismatch { context, .. }) => assert_eq!("Wrapper.1", context),
            res => panic!("{} {:?}", codec.name(), res),
        }
    }
}

#[test]
fn truncated_input() -> Result<()> {
    let hm = corpus::holy_moley();
    for codec in default_codecs().iter() {
        let bytes = codec.encode_solo(&hm)?;
        for end in (0..bytes.len()).step_by(7) {
            for chunk_size in [1, 4096] {
                match decode_chunked::<_, HolyMoley>(codec, &bytes[..end], chunk_size) {
                    Err(CodecError::UnexpectedEof) => {}
                    res => panic!("{} end={end} {:?}", codec.name(), res),
                }
            }
        }
    }
    Ok(())
}

#[test]
fn huge_declared_lengths_do_not_allocate_up_front() {
    let cases: [&[u8]; 2] = [
        &[0x0b, 0x00, 0x08, 0x7f, 0xff, 0xff, 0xff, b'x'],
        &[0x0f, 0x00, 0x0c, 0x03, 0x7f, 0xff, 0xff, 0xff, 0x01],
    ];
    for bytes in cases {
        for codec in default_codecs().iter() {
            match codec.decode_solo::<OneOfEach>(bytes) {
                Err(CodecError::UnexpectedEof) => {}
                res => panic!("{} {:?}", codec.name(), res),
            }
        }
    }
}

#[test]
fn invalid_utf8() -> Result<()> {
    let bytes = [0x0b, 0x00, 0x02, 0x00, 0x00, 0x00, 0x02, 0xc3, 0x28, 0x00];
    for codec in default_codecs().iter() {
        match codec.decode_solo::<Bonk>(&bytes) {
            Err(CodecError::InvalidUtf8(_)) => {}
            res => panic!("{} {:?}", codec.name(), res),
        }
    }

    /* The same bytes are fine in a binary field. */
    let bytes = [0x0b, 0x00, 0x0b, 0x00, 0x00, 0x00, 0x02, 0xc3, 0x28, 0x00];
    for codec in default_codecs().iter() {
        let ooe = codec.decode_solo::<OneOfEach>(&bytes)?;
        assert_eq!(Some(&[0xc3, 0x28][..]), ooe.base64.as_deref().map(|b| &b[..]));
    }
    Ok(())
}

#[test]
fn configured_limits() -> Result<()> {
    let rshuge = corpus::random_stuff_huge();
    let reserved = corpus::reserved();

    let strict = codecs(CodecConfig {
        string_limit: Some(7),
        container_limit: Some(9999),
        ..Default::default()
    });
    for codec in strict.iter() {
        match codec.decode_solo::<RandomStuff>(&codec.encode_solo(&rshuge)?) {
            Err(CodecError::InvalidLength {
                kind: LengthKind::Container,
                len: 10000,
            }) => {}
            res => panic!("{} {:?}", codec.name(), res.map(|_| ())),
        }
        match codec.decode_solo::<Reserved>(&codec.encode_solo(&reserved)?) {
            Err(CodecError::InvalidLength {
                kind: LengthKind::String,
                len: 8,
            }) => {}
            res => panic!("{} {:?}", codec.name(), res),
        }
    }

    let exact = codecs(CodecConfig {
        string_limit: Some(8),
        container_limit: Some(10000),
        ..Default::default()
    });
    for codec in exact.iter() {
        assert_eq!(rshuge, codec.decode_solo::<RandomStuff>(&codec.encode_solo(&rshuge)?)?);
        assert_eq!(reserved, codec.decode_solo::<Reserved>(&codec.encode_solo(&reserved)?)?);
    }
    Ok(())
}
