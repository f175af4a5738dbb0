//! constants.rs
//! Buffer-sizing bounds shared by the stream adapters.

/// Scratch-buffer capacity, in hex characters, for both stream adapters.
/// Must stay even so a full buffer always holds whole character pairs.
pub const HEX_BUF_LEN: usize = 1024;

/// Source bytes consumed per encoder round (two hex characters each).
pub const MAX_ROUND_BYTES: usize = HEX_BUF_LEN / 2;

const _: () = assert!(HEX_BUF_LEN % 2 == 0, "scratch capacity must be even");
const _: () = assert!(HEX_BUF_LEN >= 2);
