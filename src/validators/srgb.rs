//! sRGB: standard RGB color space. A single rendering-intent byte
//! (spec.md §4.5).

use crate::chunk_type::ChunkType;
use crate::error::ParseError;

pub fn validate(kind: ChunkType, body: &[u8]) -> Result<String, ParseError> {
    if body.len() != 1 {
        return Err(ParseError::BadChunkBody {
            kind,
            rule: "body must be exactly 1 byte",
        });
    }
    let intent = body[0];
    if intent > 3 {
        return Err(ParseError::BadChunkBody {
            kind,
            rule: "rendering intent must be in 0..=3",
        });
    }
    Ok(format!("{kind}: rendering intent {intent}"))
}
