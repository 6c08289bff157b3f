//! # Chunk Type
//! A PNG chunk type is a 4-byte code whose letters encode four property
//! bits (PNG 1.2 §5.4, W3C). Bit 5 (the lower-case bit) of each byte tells
//! a reader whether the chunk is critical, public, reserved-valid, and
//! safe to copy.

use std::fmt::{Display, Formatter};

use crate::error::ParseError;

/// A validated 4-byte PNG chunk type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkType {
    inner: [u8; 4],
}

impl ChunkType {
    /// Checks that every byte is an ISO-646 letter (`A-Z` or `a-z`).
    pub fn is_valid_bytes(bytes: &[u8; 4]) -> bool {
        bytes.iter().all(|&b| b.is_ascii_alphabetic())
    }

    /// Returns the chunk type as its raw bytes.
    pub const fn as_bytes(&self) -> [u8; 4] {
        self.inner
    }

    /// First byte, bit 5 clear: the chunk must be understood to render the image.
    pub fn is_critical(&self) -> bool {
        self.inner[0].is_ascii_uppercase()
    }

    /// Second byte, bit 5 clear: the chunk is part of the public PNG specification.
    pub fn is_public(&self) -> bool {
        self.inner[1].is_ascii_uppercase()
    }

    /// Third byte, bit 5 clear: the reserved bit, must always be clear.
    pub fn is_reserved_bit_valid(&self) -> bool {
        self.inner[2].is_ascii_uppercase()
    }

    /// Fourth byte, bit 5 set: safe for an editor that doesn't understand this
    /// chunk to copy it through unmodified.
    pub fn is_safe_to_copy(&self) -> bool {
        self.inner[3].is_ascii_lowercase()
    }
}

impl TryFrom<[u8; 4]> for ChunkType {
    type Error = ParseError;

    fn try_from(bytes: [u8; 4]) -> Result<Self, Self::Error> {
        if !Self::is_valid_bytes(&bytes) {
            return Err(ParseError::BadChunkType { kind: bytes });
        }
        Ok(ChunkType { inner: bytes })
    }
}

impl AsRef<[u8]> for ChunkType {
    fn as_ref(&self) -> &[u8] {
        &self.inner
    }
}

impl Display for ChunkType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // Every validated ChunkType is ASCII, hence valid UTF-8.
        write!(f, "{}", std::str::from_utf8(&self.inner).unwrap_or("????"))
    }
}
