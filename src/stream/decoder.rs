//! stream/decoder.rs
//! Pull-side adapter: reads hex text from a source, yields raw bytes.
//!
//! The hidden state is the leftover slot: when a pull ends on an odd hex
//! character count, the unpaired character is held and becomes the first
//! character of the next round's window. At every pause point at most one
//! character is pending.

use std::cmp;
use std::io::{self, Read};

use crate::codec::{self, CodecError};
use crate::constants::HEX_BUF_LEN;
use crate::stream::types::Terminal;

/// `Read` adapter that pulls hex text from the wrapped source and decodes it
/// into the caller's buffer.
///
/// Each round performs exactly one pull against the source, sized to
/// `min(2 × remaining output, HEX_BUF_LEN)` hex characters (one fewer when
/// the leftover slot occupies the window's first position). Rounds repeat
/// only until at least one decoded byte is available; the adapter never
/// loops to fill the caller's buffer, so short reads are normal and callers
/// wanting a full buffer loop externally.
///
/// End of data, truncation inside a pair, malformed hex, and source I/O
/// errors all latch permanently. Clean end of data replays as `Ok(0)`;
/// truncation replays as `ErrorKind::UnexpectedEof`; malformed hex as
/// `ErrorKind::InvalidData`.
pub struct HexReader<R> {
    inner: R,
    latch: Option<Terminal>,
    carry: Option<u8>,
    buf: [u8; HEX_BUF_LEN],
}

impl<R: Read> HexReader<R> {
    /// Wrap `inner`, which is expected to produce an even total number of
    /// hex characters before end of data.
    pub fn new(inner: R) -> Self {
        HexReader {
            inner,
            latch: None,
            carry: None,
            buf: [0u8; HEX_BUF_LEN],
        }
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Unwrap, discarding the adapter state (including any pending
    /// leftover character).
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for HexReader<R> {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        if let Some(t) = &self.latch {
            return t.replay_read();
        }
        if out.is_empty() {
            return Ok(0);
        }

        let mut n = 0;
        loop {
            // Window of hex text this round, capped by both the remaining
            // output space and the scratch capacity. Both bounds are even;
            // the leftover, if any, takes slot 0 and shrinks the pull by one.
            let window = cmp::min(2 * (out.len() - n), HEX_BUF_LEN);
            let carried = usize::from(self.carry.is_some());
            if let Some(c) = self.carry {
                self.buf[0] = c;
            }

            let pulled = match self.inner.read(&mut self.buf[carried..window]) {
                Ok(p) => p,
                Err(e) => {
                    if e.kind() == io::ErrorKind::Interrupted {
                        // Retryable by convention; leftover slot is intact.
                        return Err(e);
                    }
                    self.latch = Some(Terminal::from_io(&e));
                    return Err(e);
                }
            };

            let mut total = carried + pulled;
            self.carry = None;
            if total % 2 != 0 {
                total -= 1;
                self.carry = Some(self.buf[total]);
            }

            if total > 0 {
                let decoded = codec::decoded_len(total);
                match codec::decode_to_slice(&self.buf[..total], &mut out[n..n + decoded]) {
                    Ok(()) => n += decoded,
                    Err(CodecError::InvalidChar { ch, index }) => {
                        // Bytes ahead of the bad character were already
                        // written into `out`; deliver them, then replay.
                        n += codec::decoded_len(index);
                        let t = Terminal::InvalidChar { ch };
                        let res = if n > 0 { Ok(n) } else { Err(t.to_io_error()) };
                        self.latch = Some(t);
                        return res;
                    }
                    Err(e) => {
                        let t = Terminal::Io {
                            kind: io::ErrorKind::InvalidData,
                            msg: e.to_string(),
                        };
                        let res = if n > 0 { Ok(n) } else { Err(t.to_io_error()) };
                        self.latch = Some(t);
                        return res;
                    }
                }
            }

            if pulled == 0 {
                // Source end of data. A pending leftover means the final
                // pair was cut in half.
                let t = if self.carry.is_some() {
                    Terminal::TruncatedPair
                } else {
                    Terminal::Eof
                };
                let res = if n > 0 { Ok(n) } else { t.replay_read() };
                self.latch = Some(t);
                return res;
            }

            if n > 0 {
                return Ok(n);
            }
            // One character pulled into an empty window: loop once more for
            // its partner.
        }
    }
}
