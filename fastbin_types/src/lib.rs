pub mod serde;
pub mod transport;
pub mod types;
