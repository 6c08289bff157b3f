//! # Byte-source adapter
//! An external collaborator (spec.md §1): reads an arbitrary `Read` in
//! fixed-size frames and drives a [`Parser`] with them, so the core never
//! has to know whether its input is a file, a socket, or an in-memory
//! buffer. Frame size is a convenience knob, not a correctness one — the
//! parser's partition-invariance (spec.md §8, property 1) holds for any
//! split.

use std::io::{self, Read};

use crate::error::ParseError;
use crate::parser::Parser;

/// 64 KiB, matching the read-buffer size the original C driver used.
const DEFAULT_FRAME_SIZE: usize = 64 * 1024;

pub struct FrameReader<R> {
    inner: R,
    frame: Vec<u8>,
}

impl<R: Read> FrameReader<R> {
    pub fn new(inner: R) -> Self {
        Self::with_frame_size(inner, DEFAULT_FRAME_SIZE)
    }

    pub fn with_frame_size(inner: R, size: usize) -> Self {
        FrameReader { inner, frame: vec![0u8; size.max(1)] }
    }

    /// Reads to EOF, feeding each frame to `parser`. Returns the I/O
    /// result in the outer `Result` and the parser's verdict in the
    /// inner one, so a caller can tell a read failure from a validation
    /// failure without the core ever needing an `IoError` variant.
    pub fn drive(&mut self, parser: &mut Parser<'_>) -> io::Result<Result<(), ParseError>> {
        loop {
            let read = self.inner.read(&mut self.frame)?;
            if read == 0 {
                break;
            }
            if let Err(e) = parser.feed(&self.frame[..read]) {
                return Ok(Err(e));
            }
        }
        Ok(parser.finish())
    }
}
