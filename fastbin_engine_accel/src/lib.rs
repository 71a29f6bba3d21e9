//! The accelerated codec.
//!
//! Writes go through a bounded staging buffer, and reads borrow the transport's own buffer
//! via [`std::io::BufRead::fill_buf`], falling back to a stitching path only when a value
//! straddles two refills.

mod codec;
mod reader;
mod writer;


pub use codec::*;
pub use reader::*;
pub use writer::*;
