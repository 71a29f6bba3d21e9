#[cfg(test)]
mod test {
    use crate::bench::{run_benchmarks, time_encode};
    use crate::corpus;
    use anyhow::Result;
    use fastbin_debug_proto::HolyMoley;
    use fastbin_engine_accel::AccelCodec;
    use fastbin_engine_ref::RefCodec;
    use fastbin_types::types::{Codec, Record};

    #[test]
    fn benchmarks_cover_wide_and_huge_records() -> Result<()> {
        let results = run_benchmarks(3)?;
        let names = results.iter().map(|res| res.name).collect::<Vec<_>>();
        assert_eq!(vec!["HolyMoley", "FastStruct", "HugeStruct"], names);
        for res in results.iter() {
            assert!(res.speedup() > 0.0, "{res}");
            assert!(res.to_string().contains("Speedup"), "{res}");
        }
        Ok(())
    }

    fn write_tree<C: Codec>(codec: &C, hm: &HolyMoley) -> Result<Vec<u8>> {
        let sv = hm.to_struct_value();
        let mut buf = vec![];
        codec.write_struct(HolyMoley::desc(), &sv, &mut buf)?;
        Ok(buf)
    }

    #[test]
    fn timed_encode_writes_what_encode_writes() -> Result<()> {
        let hm = corpus::holy_moley();
        let expected = RefCodec::default().encode_solo(&hm)?;
        assert_eq!(expected, write_tree(&RefCodec::default(), &hm)?);
        assert_eq!(expected, write_tree(&AccelCodec::default(), &hm)?);

        time_encode(&RefCodec::default(), &hm, 0)?;
        time_encode(&AccelCodec::default(), &hm, 2)?;
        Ok(())
    }
}
