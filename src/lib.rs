//! Streaming validator and inspector for the PNG container format.
//!
//! The core (parser, chunk-ordering validator, per-chunk semantic
//! validators, CRC-32 engine) has no knowledge of files, processes, or
//! exit codes — those live in [`source`] and [`cli`] and are wired
//! together by the `png-inspect` binary. It does not decode pixel data;
//! `IDAT` bodies are treated opaquely.

pub mod chunk;
pub mod chunk_type;
pub mod cli;
pub mod crc;
pub mod error;
pub mod ordering;
pub mod parser;
pub mod render;
pub mod source;
mod validators;

pub use chunk::Chunk;
pub use chunk_type::ChunkType;
pub use error::ParseError;
pub use ordering::{ChunkKind, OrderingContext};
pub use parser::Parser;
pub use render::{ChunkSink, CollectingSink, StdoutSink};
pub use source::FrameReader;

#[cfg(test)]
mod tests;
