use super::helpers::{decode_chunked, default_codecs};
use anyhow::Result;
use fastbin_debug_proto::{CoRec, CoRec2, RecList, RecTree};
use fastbin_types::types::Codec;
use std::thread;

const DEEP: i16 = 1000;

/// Recursion depth is bounded by the stack alone, so run on a thread that has plenty of it.
fn with_big_stack<F>(f: F) -> Result<()>
where
    F: 'static + Send + FnOnce() -> Result<()>,
{
    thread::Builder::new()
        .stack_size(256 << 20)
        .spawn(f)?
        .join()
        .map_err(|_| anyhow::anyhow!("Test thread panicked."))?
}

#[test]
fn deep_list() -> Result<()> {
    with_big_stack(|| {
        let list = RecList::chain(DEEP);
        assert_eq!(DEEP as usize, list.depth());
        let codecs = default_codecs();
        let expected = codecs[0].encode_solo(&list)?;
        for codec in codecs.iter() {
            let bytes = codec.encode_solo(&list)?;
            assert!(expected == bytes, "{}", codec.name());
            let copy = decode_chunked::<_, RecList>(codec, &bytes, 7)?;
            assert_eq!(DEEP as usize, copy.depth());
            assert!(list == copy);
        }
        Ok(())
    })
}

fn tree(depth: u32, fanout: usize) -> RecTree {
    RecTree {
        children: (depth > 0).then(|| (0..fanout).map(|_| tree(depth - 1, fanout)).collect()),
        item: Some(depth as i16),
    }
}

#[test]
fn wide_tree() -> Result<()> {
    let t = tree(5, 4);
    for codec in default_codecs().iter() {
        let bytes = codec.encode_solo(&t)?;
        assert_eq!(t, codec.decode_solo::<RecTree>(&bytes)?);
    }
    Ok(())
}

#[test]
fn mutual_recursion() -> Result<()> {
    with_big_stack(|| {
        let mut co = CoRec::default();
        for _ in 0..DEEP {
            co = CoRec {
                other: Some(Box::new(CoRec2 { other: Some(co) })),
            };
        }
        for codec in default_codecs().iter() {
            let bytes = codec.encode_solo(&co)?;
            assert!(co == codec.decode_solo::<CoRec>(&bytes)?, "{}", codec.name());
        }
        Ok(())
    })
}
