//! # Serialization format
//!
//! Every value on the wire is identified by a one-byte [`TType`]. The type tag
//! alone tells a reader how many bytes to consume, so any value can be skipped
//! without knowing the schema it was written with.
//!
//! All integers are big-endian. Lengths and counts are `i32` and must not be negative.
//!
//! ```text
//! struct Struct {
//!     field_0:        Field,
//!     field_1:        Field,
//!     ...
//!     // Fields appear in write order, which is not necessarily ascending id order.
//!     stop:           u8,             // TType::Stop
//! }
//!
//! struct Field {
//!     ttype:          u8,
//!     field_id:       i16,
//!     value:          Value,          // as selected by ttype
//! }
//!
//! Value::Bool     { body: u8 }        // 0 or 1
//! Value::Byte     { body: i8 }
//! Value::I16      { body: i16 }
//! Value::I32      { body: i32 }
//! Value::I64      { body: i64 }
//! Value::Double   { body: [u8; 8] }   // IEEE-754 binary64
//!
//! Value::String {
//!     len:            i32,
//!     body:           [u8; len],      // raw bytes; text vs binary is up to the caller
//! }
//!
//! Value::List or Value::Set {
//!     elem_ttype:     u8,
//!     count:          i32,
//!     elems:          [Value; count],
//! }
//!
//! Value::Map {
//!     key_ttype:      u8,
//!     val_ttype:      u8,
//!     count:          i32,
//!     entries:        [(Value, Value); count],
//! }
//! ```
//!
//! Empty containers still carry their element tags.

mod config;
mod error;
mod headers;
mod lengths;
mod ttype;


pub use config::*;
pub use error::*;
pub use headers::*;
pub use lengths::*;
pub use ttype::*;
