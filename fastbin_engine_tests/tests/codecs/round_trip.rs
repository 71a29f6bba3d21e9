use super::helpers::{decode_chunked, default_codecs, read_chunked};
use anyhow::Result;
use fastbin_debug_proto::{Empty, HolyMoley, OneOfEach, RandomStuff, RandomStuffV0};
use fastbin_harness::corpus;
use fastbin_types::transport::MemoryBuffer;
use fastbin_types::types::{Binary, Codec, Double, Record, StructValue};
use itertools::Itertools;
use rand::seq::SliceRandom;

type Setter = fn(&mut OneOfEach);

static SETTERS: &[Setter] = &[
    |o| o.im_true = Some(true),
    |o| o.a_bite = None,
    |o| o.integer32 = Some(i32::MIN),
    |o| o.integer64 = Some(i64::MAX),
    |o| o.double_precision = Some(Double(f64::NAN)),
    |o| o.zomg_unicode = Some(String::from("\u{1f600}\u{0}")),
    |o| o.base64 = Some(Binary(vec![0, 0xff])),
    |o| o.i16_list = Some(vec![]),
    |o| o.i64_list = None,
];

#[test]
fn every_combination_of_fields() -> Result<()> {
    let codecs = default_codecs();
    for setters in SETTERS.iter().powerset() {
        let mut ooe = OneOfEach::default();
        for set in setters {
            set(&mut ooe);
        }

        let expected_bytes = codecs[0].encode_solo(&ooe)?;
        for codec in codecs.iter() {
            let bytes = codec.encode_solo(&ooe)?;
            assert!(expected_bytes == bytes, "{} {:?}", codec.name(), ooe);

            assert_eq!(ooe, codec.decode_solo::<OneOfEach>(&bytes)?);
            assert_eq!(ooe, decode_chunked::<_, OneOfEach>(codec, &bytes, 5)?);
        }
    }
    Ok(())
}

#[test]
fn any_write_order() -> Result<()> {
    let codecs = default_codecs();
    let ooe = corpus::one_of_each_raw_bytes();
    let sv = ooe.to_struct_value();
    let desc = OneOfEach::desc();

    let mut rng = rand::thread_rng();
    for _ in 0..20 {
        let mut fields = sv.fields().to_vec();
        fields.shuffle(&mut rng);
        let shuffled = StructValue::from(fields);

        let mut expected_bytes = vec![];
        codecs[0].write_struct(desc, &shuffled, &mut expected_bytes)?;
        for codec in codecs.iter() {
            let mut bytes = vec![];
            codec.write_struct(desc, &shuffled, &mut bytes)?;
            assert!(expected_bytes == bytes, "{}", codec.name());

            let decoded = read_chunked(codec, desc, &bytes, 3)?;
            assert_eq!(sv, decoded);
            assert_eq!(ooe, OneOfEach::from_struct_value(decoded)?);
        }
    }
    Ok(())
}

#[test]
fn empty_containers_stay_present() -> Result<()> {
    let hm = corpus::holy_moley_empty_containers();
    #[rustfmt::skip]
    let expected: &[u8] = &[
        0x0f, 0x00, 0x01, 0x0c, 0x00, 0x00, 0x00, 0x00,
        0x0e, 0x00, 0x02, 0x0f, 0x00, 0x00, 0x00, 0x00,
        0x0d, 0x00, 0x03, 0x0b, 0x0f, 0x00, 0x00, 0x00, 0x00,
        0x00,
    ];
    for codec in default_codecs().iter() {
        let bytes = codec.encode_solo(&hm)?;
        assert_eq!(expected, &bytes[..], "{}", codec.name());
        let copy = codec.decode_solo::<HolyMoley>(&bytes)?;
        assert_eq!(Some(0), copy.big.as_ref().map(Vec::len));
        assert_eq!(hm, copy);
    }
    Ok(())
}

#[test]
fn unknown_fields_are_skipped() -> Result<()> {
    let rs = corpus::random_stuff();
    let expected = RandomStuffV0 {
        a: rs.a,
        b: rs.b,
        myintlist: rs.myintlist.clone(),
    };
    for writer in default_codecs().iter() {
        let bytes = writer.encode_solo(&rs)?;
        for reader in default_codecs().iter() {
            for chunk_size in [1, 2, 64] {
                let v0 = decode_chunked::<_, RandomStuffV0>(reader, &bytes, chunk_size)?;
                assert_eq!(expected, v0);
            }
        }
    }

    /* Every field is unknown to Empty. The reader must still land exactly after the stop tag. */
    let ooe = corpus::one_of_each_raw_bytes();
    for codec in default_codecs().iter() {
        let mut bytes = codec.encode_solo(&ooe)?;
        bytes.extend(codec.encode_solo(&RandomStuff::default())?);
        let mut t = MemoryBuffer::from(bytes);
        assert_eq!(Empty {}, codec.decode::<Empty, _>(&mut t)?);
        assert_eq!(&[0x00], t.unread());
    }
    Ok(())
}
