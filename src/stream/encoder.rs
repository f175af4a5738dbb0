//! stream/encoder.rs
//! Push-side adapter: accepts raw bytes, writes lowercase hex text.

use std::cmp;
use std::io::{self, Write};

use crate::codec;
use crate::constants::{HEX_BUF_LEN, MAX_ROUND_BYTES};
use crate::stream::types::Terminal;

/// `Write` adapter that hex-encodes everything written through it and
/// forwards the text to the wrapped sink.
///
/// Per call, input is consumed in slices of at most `MAX_ROUND_BYTES` source
/// bytes; each slice is staged in a fixed scratch buffer and forwarded in one
/// sink write. The returned count is always in *source* bytes. No encoded
/// text is retained across calls.
///
/// Terminal failures latch: after a sink error or a write that split a hex
/// pair, every later call returns the same error without touching the sink.
pub struct HexWriter<W> {
    inner: W,
    latch: Option<Terminal>,
    buf: [u8; HEX_BUF_LEN],
}

impl<W: Write> HexWriter<W> {
    /// Wrap `inner`. The caller keeps responsibility for closing/flushing
    /// the sink's own resources.
    pub fn new(inner: W) -> Self {
        HexWriter {
            inner,
            latch: None,
            buf: [0u8; HEX_BUF_LEN],
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Unwrap, discarding the adapter state.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for HexWriter<W> {
    fn write(&mut self, src: &[u8]) -> io::Result<usize> {
        if let Some(t) = &self.latch {
            return Err(t.to_io_error());
        }

        let mut n = 0;
        while n < src.len() {
            let take = cmp::min(MAX_ROUND_BYTES, src.len() - n);
            let staged = codec::encoded_len(take);
            codec::encode_to_slice(&src[n..n + take], &mut self.buf[..staged])
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

            match self.inner.write(&self.buf[..staged]) {
                Ok(m) if m == staged => n += take,
                Ok(m) => {
                    // Short sink write. Credit whole pairs only; an odd
                    // count leaves half a pair downstream and the stream
                    // cannot be resumed pair-aligned.
                    n += codec::decoded_len(m);
                    if m % 2 != 0 {
                        self.latch = Some(Terminal::SplitPair);
                        if n == 0 {
                            return Err(Terminal::SplitPair.to_io_error());
                        }
                    }
                    return Ok(n);
                }
                Err(e) => {
                    if e.kind() == io::ErrorKind::Interrupted {
                        // Retryable by convention; do not latch.
                        return if n > 0 { Ok(n) } else { Err(e) };
                    }
                    self.latch = Some(Terminal::from_io(&e));
                    return if n > 0 { Ok(n) } else { Err(e) };
                }
            }
        }
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Some(t) = &self.latch {
            return Err(t.to_io_error());
        }
        self.inner.flush()
    }
}
