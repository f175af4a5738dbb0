//! stream/types.rs
//! Terminal status latched by the stream adapters.

use std::io;

/// One-way terminal state of a stream adapter.
///
/// Once recorded, every later call replays the same condition without
/// touching the wrapped sink/source. `io::Error` is not `Clone`, so I/O
/// failures are latched as kind plus message and rebuilt on replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Terminal {
    /// Clean end-of-data: every pulled character was paired and decoded.
    Eof,
    /// Source ended while one hex character was still pending.
    TruncatedPair,
    /// Hex text held a non-hex-digit character.
    InvalidChar { ch: char },
    /// Sink accepted an odd number of hex characters, splitting a pair;
    /// the stream can no longer be resumed.
    SplitPair,
    /// Underlying sink/source failure, passed through.
    Io { kind: io::ErrorKind, msg: String },
}

impl Terminal {
    pub(crate) fn from_io(e: &io::Error) -> Self {
        Terminal::Io { kind: e.kind(), msg: e.to_string() }
    }

    /// Rebuild the user-visible `io::Error` for this condition.
    pub(crate) fn to_io_error(&self) -> io::Error {
        match self {
            Terminal::Eof => io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "hex stream already at end of data",
            ),
            Terminal::TruncatedPair => io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "hex stream truncated inside a character pair",
            ),
            Terminal::InvalidChar { ch } => io::Error::new(
                io::ErrorKind::InvalidData,
                format!("invalid hex character {:?}", ch),
            ),
            Terminal::SplitPair => io::Error::new(
                io::ErrorKind::WriteZero,
                "sink split a hex character pair",
            ),
            Terminal::Io { kind, msg } => io::Error::new(*kind, msg.clone()),
        }
    }

    /// Replay for a read-side call: clean EOF is `Ok(0)`, everything else
    /// is the recorded error with zero progress.
    pub(crate) fn replay_read(&self) -> io::Result<usize> {
        match self {
            Terminal::Eof => Ok(0),
            other => Err(other.to_io_error()),
        }
    }
}
