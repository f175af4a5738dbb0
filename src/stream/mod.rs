//! stream/mod.rs
//! Streaming adapters over `std::io`.
//!
//! Notes:
//! - Each adapter is bound to one sink/source for its whole lifetime and
//!   becomes permanently inert once a terminal condition is latched.
//! - Scratch buffers are fixed at `HEX_BUF_LEN` hex characters, so a single
//!   round never stages more than that regardless of caller buffer sizes.
//! - Not for concurrent use; share across threads only behind external
//!   synchronization.

pub mod decoder;
pub mod encoder;
pub mod types;

pub use decoder::HexReader;
pub use encoder::HexWriter;
