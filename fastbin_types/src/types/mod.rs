//! The in-memory side of the codec.
//!
//! [`Value`] is the schema-less shape of anything that can be put on the wire.
//! [`StructDesc`] is the static schema of one record type.
//! [`Record`] ties a typed Rust struct or enum to both.

mod codec;
mod desc;
mod record;
mod scalars;
mod value;


pub use codec::*;
pub use desc::*;
pub use record::*;
pub use scalars::*;
pub use value::*;
