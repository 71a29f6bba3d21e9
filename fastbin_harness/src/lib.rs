//! Checks that the reference and the accelerated codecs are interchangeable on the wire.

pub mod bench;
pub mod case;
pub mod config;
pub mod corpus;
pub mod hexdump;

mod bench_test;
