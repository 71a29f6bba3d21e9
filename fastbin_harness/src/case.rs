use crate::hexdump;
use fastbin_engine_accel::AccelCodec;
use fastbin_engine_ref::RefCodec;
use fastbin_types::serde::{CodecConfig, CodecError, FieldOrder};
use fastbin_types::transport::{BufferedTransport, MemoryBuffer, OpenTransport};
use fastbin_types::types::{Codec, Record};
use std::fmt::{self, Debug, Display};
use tracing::{debug, warn};

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Stage {
    EncodeRef,
    EncodeAccel,
    CompareBytes,
    DecodeCross,
    DecodeCrossBuffered,
    CompareValues,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum CaseKind {
    Write,
    Read,
    Equivalence,
    Reordered,
    ForwardCompat,
}

#[derive(Debug)]
pub enum Outcome {
    Pass,
    BytesDiffer {
        first_divergence: usize,
        dump: String,
    },
    /// The two codecs were configured to write differently, yet wrote the same bytes.
    BytesUnexpectedlyEqual,
    ValuesDiffer {
        decoded_by: Stage,
        decoder: &'static str,
        expected: String,
        actual: String,
    },
    CodecFailed {
        stage: Stage,
        codec: &'static str,
        error: CodecError,
    },
}

impl Outcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass)
    }

    pub fn stage(&self) -> Option<Stage> {
        match self {
            Outcome::Pass => None,
            Outcome::BytesDiffer { .. } | Outcome::BytesUnexpectedlyEqual => {
                Some(Stage::CompareBytes)
            }
            Outcome::ValuesDiffer { .. } => Some(Stage::CompareValues),
            Outcome::CodecFailed { stage, .. } => Some(*stage),
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Pass => write!(f, "pass"),
            Outcome::BytesDiffer {
                first_divergence,
                dump,
            } => write!(
                f,
                "bytes differ from offset {first_divergence:#x} (reference | accelerated):\n{dump}"
            ),
            Outcome::BytesUnexpectedlyEqual => {
                write!(f, "bytes were expected to differ but are identical")
            }
            Outcome::ValuesDiffer {
                decoded_by,
                decoder,
                expected,
                actual,
            } => write!(
                f,
                "value decoded by {decoder} at {decoded_by:?} differs.\nexpected: {expected}\nactual: {actual}"
            ),
            Outcome::CodecFailed {
                stage,
                codec,
                error,
            } => write!(f, "{codec} failed at {stage:?}: {error}"),
        }
    }
}

#[derive(Debug)]
pub struct CaseReport {
    pub name: String,
    pub kind: CaseKind,
    pub outcome: Outcome,
}

impl Display for CaseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}: {}", self.kind, self.name, self.outcome)
    }
}

#[derive(Default, Debug)]
pub struct SuiteReport {
    pub cases: Vec<CaseReport>,
}

impl SuiteReport {
    pub fn push(&mut self, case: CaseReport) {
        self.cases.push(case);
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseReport> {
        self.cases.iter().filter(|case| !case.outcome.is_pass())
    }

    pub fn passed(&self) -> usize {
        self.cases.len() - self.failures().count()
    }

    pub fn all_passed(&self) -> bool {
        self.failures().next().is_none()
    }
}

impl Display for SuiteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {} cases passed", self.passed(), self.cases.len())
    }
}

/// Either the value a step produced, or the outcome that ends the case.
type Step<T> = Result<T, Outcome>;

fn encode<C: Codec, Rec: Record>(codec: &C, rec: &Rec, stage: Stage) -> Step<Vec<u8>> {
    let mut t = MemoryBuffer::new();
    codec
        .encode(rec, &mut t)
        .map_err(|error| Outcome::CodecFailed {
            stage,
            codec: codec.name(),
            error,
        })?;
    Ok(t.into_inner())
}

/// Decodes `bytes` straight out of memory, or through a buffered transport
/// that refills `chunk_size` bytes at a time.
fn decode<C: Codec, Rec: Record>(
    codec: &C,
    bytes: &[u8],
    chunk_size: Option<usize>,
) -> Result<Rec, CodecError> {
    let mem = MemoryBuffer::from(bytes.to_vec());
    match chunk_size {
        None => {
            let mut t = mem;
            codec.decode(&mut t)
        }
        Some(chunk_size) => {
            let mut t = BufferedTransport::with_chunk_size(mem, chunk_size);
            let mut t = OpenTransport::open(&mut t)?;
            codec.decode(&mut *t)
        }
    }
}

fn compare_bytes(ref_bytes: &[u8], accel_bytes: &[u8]) -> Step<()> {
    match hexdump::first_divergence(ref_bytes, accel_bytes) {
        None => Ok(()),
        Some(first_divergence) => Err(Outcome::BytesDiffer {
            first_divergence,
            dump: hexdump::diff_dump(ref_bytes, accel_bytes),
        }),
    }
}

/// Runs the cases of a suite against one pair of codecs.
pub struct Comparison {
    reference: RefCodec,
    accel: AccelCodec,
    /// Like `accel`, but writes fields in ascending id order.
    reordered: AccelCodec,
    chunk_size: usize,
}

impl Comparison {
    pub fn new(config: CodecConfig, chunk_size: usize) -> Self {
        Self::with_codecs(RefCodec::new(config), AccelCodec::new(config), chunk_size)
    }

    pub fn with_codecs(reference: RefCodec, accel: AccelCodec, chunk_size: usize) -> Self {
        let reordered = AccelCodec::new(CodecConfig {
            field_order: FieldOrder::AscendingId,
            ..*accel.config()
        })
        .with_staging_capacity(accel.staging_capacity());
        Self {
            reference,
            accel,
            reordered,
            chunk_size,
        }
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    fn report(&self, name: &str, kind: CaseKind, step: Step<()>) -> CaseReport {
        let outcome = match step {
            Ok(()) => Outcome::Pass,
            Err(outcome) => outcome,
        };
        if outcome.is_pass() {
            debug!(case = name, ?kind, "Pass.");
        } else {
            warn!(case = name, ?kind, stage = ?outcome.stage(), "Fail.");
        }
        CaseReport {
            name: name.to_string(),
            kind,
            outcome,
        }
    }

    /// Decodes with `codec` both unbuffered and buffered, comparing each result to `expected`.
    fn decode_both_ways<C: Codec, Rec: Record + PartialEq + Debug>(
        &self,
        codec: &C,
        bytes: &[u8],
        expected: &Rec,
    ) -> Step<()> {
        for (stage, chunk_size) in [
            (Stage::DecodeCross, None),
            (Stage::DecodeCrossBuffered, Some(self.chunk_size)),
        ] {
            let actual =
                decode::<C, Rec>(codec, bytes, chunk_size).map_err(|error| {
                    Outcome::CodecFailed {
                        stage,
                        codec: codec.name(),
                        error,
                    }
                })?;
            if &actual != expected {
                return Err(Outcome::ValuesDiffer {
                    decoded_by: stage,
                    decoder: codec.name(),
                    expected: format!("{expected:#?}"),
                    actual: format!("{actual:#?}"),
                });
            }
        }
        Ok(())
    }

    /// Both codecs must write the same bytes.
    pub fn check_write<Rec: Record>(&self, name: &str, rec: &Rec) -> CaseReport {
        let step = || -> Step<()> {
            let ref_bytes = encode(&self.reference, rec, Stage::EncodeRef)?;
            let accel_bytes = encode(&self.accel, rec, Stage::EncodeAccel)?;
            compare_bytes(&ref_bytes, &accel_bytes)
        };
        self.report(name, CaseKind::Write, step())
    }

    /// The accelerated codec must read what the reference codec wrote.
    pub fn check_read<Rec: Record + PartialEq + Debug>(&self, name: &str, rec: &Rec) -> CaseReport {
        let step = || -> Step<()> {
            let ref_bytes = encode(&self.reference, rec, Stage::EncodeRef)?;
            self.decode_both_ways(&self.accel, &ref_bytes, rec)
        };
        self.report(name, CaseKind::Read, step())
    }

    /// Same bytes from both codecs, and each codec reads the other's bytes back into `rec`.
    pub fn check_equivalence<Rec: Record + PartialEq + Debug>(
        &self,
        name: &str,
        rec: &Rec,
    ) -> CaseReport {
        let step = || -> Step<()> {
            let ref_bytes = encode(&self.reference, rec, Stage::EncodeRef)?;
            let accel_bytes = encode(&self.accel, rec, Stage::EncodeAccel)?;
            compare_bytes(&ref_bytes, &accel_bytes)?;
            self.decode_both_ways(&self.accel, &ref_bytes, rec)?;
            self.decode_both_ways(&self.reference, &accel_bytes, rec)
        };
        self.report(name, CaseKind::Equivalence, step())
    }

    /// Writing in ascending id order must change the bytes of `rec` but not what they decode to.
    pub fn check_reordered<Rec: Record + PartialEq + Debug>(
        &self,
        name: &str,
        rec: &Rec,
    ) -> CaseReport {
        let step = || -> Step<()> {
            let ref_bytes = encode(&self.reference, rec, Stage::EncodeRef)?;
            let accel_bytes = encode(&self.reordered, rec, Stage::EncodeAccel)?;
            if ref_bytes == accel_bytes {
                return Err(Outcome::BytesUnexpectedlyEqual);
            }
            self.decode_both_ways(&self.accel, &ref_bytes, rec)?;
            self.decode_both_ways(&self.reference, &accel_bytes, rec)
        };
        self.report(name, CaseKind::Reordered, step())
    }

    /// Bytes of a newer record, read through an older schema, must yield `expected`.
    pub fn check_forward_compat<New: Record, Old: Record + PartialEq + Debug>(
        &self,
        name: &str,
        rec: &New,
        expected: &Old,
    ) -> CaseReport {
        let step = || -> Step<()> {
            let ref_bytes = encode(&self.reference, rec, Stage::EncodeRef)?;
            let accel_bytes = encode(&self.accel, rec, Stage::EncodeAccel)?;
            compare_bytes(&ref_bytes, &accel_bytes)?;
            self.decode_both_ways(&self.accel, &ref_bytes, expected)?;
            self.decode_both_ways(&self.reference, &accel_bytes, expected)
        };
        self.report(name, CaseKind::ForwardCompat, step())
    }
}
