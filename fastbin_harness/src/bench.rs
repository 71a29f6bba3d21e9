use crate::corpus;
use fastbin_engine_accel::AccelCodec;
use fastbin_engine_ref::RefCodec;
use fastbin_types::serde::CodecError;
use fastbin_types::transport::NullTransport;
use fastbin_types::types::{Codec, Record};
use std::fmt::{self, Display};
use std::time::{Duration, Instant};
use tracing::debug;

pub struct BenchResult {
    pub name: &'static str,
    pub standard: Duration,
    pub accelerated: Duration,
}

impl BenchResult {
    /// How many times faster the accelerated codec was.
    pub fn speedup(&self) -> f64 {
        self.standard.as_secs_f64() / self.accelerated.as_secs_f64().max(f64::MIN_POSITIVE)
    }
}

impl Display for BenchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Standard = {:.6}", self.name, self.standard.as_secs_f64())?;
        writeln!(f, "{} Acceler. = {:.6}", self.name, self.accelerated.as_secs_f64())?;
        write!(f, "{} Speedup  = {:.2}x", self.name, self.speedup())
    }
}

/// Encodes `rec` `iters` times into a sink.
///
/// The record is converted into its field tree once, up front,
/// so the timing covers the codec's own walk and nothing else.
pub fn time_encode<C: Codec, Rec: Record>(
    codec: &C,
    rec: &Rec,
    iters: u32,
) -> Result<Duration, CodecError> {
    let sv = rec.to_struct_value();
    let mut sink = NullTransport::default();
    let start = Instant::now();
    for _ in 0..iters {
        codec.write_struct(Rec::desc(), &sv, &mut sink)?;
    }
    let elapsed = start.elapsed();
    debug!(
        codec = codec.name(),
        iters,
        bytes = sink.bytes_written(),
        "Encoded."
    );
    Ok(elapsed)
}

fn bench_one<Rec: Record>(
    name: &'static str,
    rec: &Rec,
    iters: u32,
) -> Result<BenchResult, CodecError> {
    Ok(BenchResult {
        name,
        standard: time_encode(&RefCodec::default(), rec, iters)?,
        accelerated: time_encode(&AccelCodec::default(), rec, iters)?,
    })
}

pub fn run_benchmarks(iters: u32) -> Result<Vec<BenchResult>, CodecError> {
    Ok(vec![
        bench_one("HolyMoley", &corpus::holy_moley(), iters)?,
        bench_one("FastStruct", &corpus::random_stuff(), iters)?,
        bench_one("HugeStruct", &corpus::random_stuff_huge(), iters.div_ceil(100))?,
    ])
}
