//! PLTE: palette. A flat list of 3-byte RGB entries (spec.md §4.5).

use crate::chunk_type::ChunkType;
use crate::error::ParseError;

pub fn validate(kind: ChunkType, body: &[u8]) -> Result<String, ParseError> {
    if body.is_empty() || body.len() % 3 != 0 {
        return Err(ParseError::BadChunkBody {
            kind,
            rule: "body must be a nonzero multiple of 3 bytes",
        });
    }
    let entries = body.len() / 3;
    if entries > 256 {
        return Err(ParseError::BadChunkBody {
            kind,
            rule: "at most 256 palette entries are allowed",
        });
    }
    Ok(format!("{kind}: {entries} palette entries"))
}
