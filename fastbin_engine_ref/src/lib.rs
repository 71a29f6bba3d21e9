//! The reference codec.
//!
//! Every primitive is one `write_all` or one `read_exact` against the transport,
//! and the record walk follows the descriptor field by field.
//! It is meant to be obviously correct rather than fast.

mod codec;
mod reader;
mod writer;


pub use codec::*;
pub use reader::*;
pub use writer::*;
