//! Error taxonomy for the PNG validator core.
//!
//! Every variant is fatal to the stream currently being parsed: the first
//! error encountered aborts the in-progress `feed`/`finish` call and the
//! `Parser` must not be reused afterwards. `IoError` deliberately has no
//! variant here; byte-source failures are reported by the caller (see
//! [`crate::source::FrameReader`]), never constructed by the core.

use thiserror::Error;

use crate::chunk_type::ChunkType;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("out of memory allocating {bytes} bytes for chunk body")]
    OutOfMemory { bytes: u32 },

    #[error("bad PNG signature")]
    BadSignature,

    #[error("declared chunk length {declared} exceeds 2^31-1")]
    LengthTooLarge { declared: u32 },

    #[error("chunk body of {declared} bytes exceeds configured limit of {limit} bytes")]
    ChunkTooLarge { declared: u32, limit: u32 },

    #[error("CRC mismatch in {kind:?} chunk")]
    CrcMismatch { kind: [u8; 4] },

    #[error("chunk type {kind:?} contains a byte outside the ISO-646 letter range")]
    BadChunkType { kind: [u8; 4] },

    #[error("unknown critical chunk: {kind}")]
    UnknownCriticalChunk { kind: ChunkType },

    #[error("chunk order violation for {kind}: {rule}")]
    BadChunkOrder { kind: ChunkType, rule: &'static str },

    #[error("malformed {kind} chunk body: {rule}")]
    BadChunkBody { kind: ChunkType, rule: &'static str },

    #[error("stream ended without an IEND chunk")]
    MissingIend,

    #[error("unexpected end of stream in the middle of a chunk")]
    UnexpectedEof,

    #[error("parser previously failed and cannot accept further input")]
    Poisoned,
}
