//! # Chunk
//! A PNG chunk is a length-prefixed, CRC-protected unit: a 4-byte type
//! code, 0..N bytes of data, and a 4-byte CRC. [`Chunk`] borrows its body
//! from the parser's scratch buffer for the lifetime of a single
//! validation call, rather than owning a copy — this replaces the source's
//! chunk descriptor holding a raw pointer into a caller-owned buffer
//! (spec.md §9, "Re-architecting pointer-into-buffer chunk references")
//! with Rust's lifetime system: the body cannot escape the call that
//! produced it.

use std::fmt::{Display, Formatter};

use crate::chunk_type::ChunkType;

/// A chunk as handed to the order validator and the per-type semantic
/// validators: already CRC-checked (the CRC field itself is not carried
/// here — by the time a `Chunk` exists, its integrity has already been
/// confirmed by [`crate::crc::crc32_chunk`]).
#[derive(Debug, Clone, Copy)]
pub struct Chunk<'a> {
    kind: ChunkType,
    body: &'a [u8],
}

impl<'a> Chunk<'a> {
    pub fn new(kind: ChunkType, body: &'a [u8]) -> Self {
        Chunk { kind, body }
    }

    pub fn kind(&self) -> ChunkType {
        self.kind
    }

    pub fn body(&self) -> &'a [u8] {
        self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl Display for Chunk<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} bytes)", self.kind, self.len())
    }
}
