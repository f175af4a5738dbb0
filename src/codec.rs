//! codec.rs
//! One-shot hex primitive: whole-buffer encode/decode plus length conversion.
//!
//! The streaming layer in `stream/` is built on these; they carry no state
//! and no boundary conditions of their own. Encoding always emits lowercase;
//! decoding accepts either case.

use std::fmt;

/// Failure of a whole-buffer encode or decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Input held a character outside `[0-9a-fA-F]`.
    InvalidChar { ch: char, index: usize },
    /// Hex text length is odd, so the last character has no pair.
    OddLength,
    /// Destination slice does not match the converted length of the source.
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CodecError::*;
        match self {
            InvalidChar { ch, index } =>
                write!(f, "invalid hex character {:?} at index {}", ch, index),
            OddLength =>
                write!(f, "odd number of hex characters"),
            LengthMismatch { expected, actual } =>
                write!(f, "destination length mismatch: expected {}, got {}", expected, actual),
        }
    }
}

impl std::error::Error for CodecError {}

impl From<hex::FromHexError> for CodecError {
    fn from(e: hex::FromHexError) -> Self {
        match e {
            hex::FromHexError::InvalidHexCharacter { c, index } =>
                CodecError::InvalidChar { ch: c, index },
            hex::FromHexError::OddLength => CodecError::OddLength,
            // Only reachable through the *_to_slice entry points, which check
            // lengths themselves first; kept for completeness.
            hex::FromHexError::InvalidStringLength =>
                CodecError::LengthMismatch { expected: 0, actual: 0 },
        }
    }
}

/// Length of the hex text encoding `n` source bytes. Always `2 * n`.
#[inline]
pub const fn encoded_len(n: usize) -> usize {
    n * 2
}

/// Source bytes represented by `x` hex characters. Floor division: an odd
/// trailing character never counts as a byte.
#[inline]
pub const fn decoded_len(x: usize) -> usize {
    x / 2
}

/// Encode `src` into `dst` as lowercase hex text.
/// `dst` must be exactly `encoded_len(src.len())` long.
pub fn encode_to_slice(src: &[u8], dst: &mut [u8]) -> Result<(), CodecError> {
    let expected = encoded_len(src.len());
    if dst.len() != expected {
        return Err(CodecError::LengthMismatch { expected, actual: dst.len() });
    }
    hex::encode_to_slice(src, dst).map_err(CodecError::from)
}

/// Decode even-length hex text from `src` into `dst`.
/// `dst` must be exactly `decoded_len(src.len())` long.
///
/// On `InvalidChar { index, .. }`, every byte before `index / 2` has already
/// been written to `dst`; the streaming decoder relies on that to report
/// partial progress.
pub fn decode_to_slice(src: &[u8], dst: &mut [u8]) -> Result<(), CodecError> {
    if src.len() % 2 != 0 {
        return Err(CodecError::OddLength);
    }
    let expected = decoded_len(src.len());
    if dst.len() != expected {
        return Err(CodecError::LengthMismatch { expected, actual: dst.len() });
    }
    hex::decode_to_slice(src, dst).map_err(CodecError::from)
}

/// Encode `src` into a freshly allocated lowercase hex string.
pub fn encode_to_string(src: impl AsRef<[u8]>) -> String {
    hex::encode(src)
}

/// Decode hex text into a freshly allocated byte vector.
pub fn decode_to_vec(src: impl AsRef<[u8]>) -> Result<Vec<u8>, CodecError> {
    hex::decode(src).map_err(CodecError::from)
}
