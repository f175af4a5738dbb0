//! hexstream
//!
//! Streaming hexadecimal encode/decode over `std::io`.
//! Bounded scratch buffers, no allocation on the hot path.

#![forbid(unsafe_code)]

pub mod constants;

pub mod codec;
pub mod stream;

pub use codec::{
    decode_to_slice, decode_to_vec, decoded_len, encode_to_slice, encode_to_string, encoded_len,
    CodecError,
};
pub use stream::{HexReader, HexWriter};
