use super::helpers::{codecs, default_codecs};
use anyhow::Result;
use fastbin_debug_proto::{StructA, TestUnion};
use fastbin_types::serde::{CodecConfig, CodecError, UnionArity};
use fastbin_types::types::{Codec, Record, StructValue, Value};

#[rustfmt::skip]
const TWO_SET: &[u8] = &[
    0x08, 0x00, 0x02, 0x00, 0x00, 0x00, 0x01,
    0x08, 0x00, 0x05, 0x00, 0x00, 0x00, 0x02,
    0x00,
];

fn two_set() -> StructValue {
    StructValue::from(vec![(2, Value::I32(1)), (5, Value::I32(2))])
}

fn first_set_wins() -> CodecConfig {
    CodecConfig {
        union_arity: UnionArity::FirstSetWins,
        ..Default::default()
    }
}

#[test]
fn strict_unions() {
    for codec in default_codecs().iter() {
        match codec.decode_solo::<TestUnion>(TWO_SET) {
            Err(CodecError::UnionArityViolation { union, count }) => {
                assert_eq!(("TestUnion", 2), (union, count))
            }
            res => panic!("{} {:?}", codec.name(), res),
        }
        match codec.write_struct(TestUnion::desc(), &two_set(), &mut vec![]) {
            Err(CodecError::UnionArityViolation { count: 2, .. }) => {}
            res => panic!("{} {:?}", codec.name(), res),
        }
    }
}

#[test]
fn first_set_wins_unions() -> Result<()> {
    for codec in codecs(first_set_wins()).iter() {
        assert_eq!(TestUnion::I32Field(1), codec.decode_solo::<TestUnion>(TWO_SET)?);

        let mut bytes = vec![];
        codec.write_struct(TestUnion::desc(), &two_set(), &mut bytes)?;
        assert_eq!(&TWO_SET[..7], &bytes[..bytes.len() - 1]);
        assert_eq!(Some(&0x00), bytes.last());
    }
    Ok(())
}

#[test]
fn empty_unions_are_always_rejected() {
    for config in [CodecConfig::default(), first_set_wins()] {
        for codec in codecs(config).iter() {
            match codec.decode_solo::<TestUnion>(&[0x00]) {
                Err(CodecError::UnionArityViolation { count: 0, .. }) => {}
                res => panic!("{} {:?}", codec.name(), res),
            }
            match codec.write_struct(TestUnion::desc(), &StructValue::new(), &mut vec![]) {
                Err(CodecError::UnionArityViolation { count: 0, .. }) => {}
                res => panic!("{} {:?}", codec.name(), res),
            }
        }
    }
}

#[test]
fn required_fields() -> Result<()> {
    for codec in default_codecs().iter() {
        match codec.decode_solo::<StructA>(&[0x00]) {
            Err(CodecError::MissingRequiredField { record, field }) => {
                assert_eq!(("StructA", "s"), (record, field))
            }
            res => panic!("{} {:?}", codec.name(), res),
        }

        let a = StructA {
            s: String::new(),
        };
        let bytes = codec.encode_solo(&a)?;
        assert_eq!(vec![0x0b, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00], bytes);
        assert_eq!(a, codec.decode_solo::<StructA>(&bytes)?);
    }
    Ok(())
}
