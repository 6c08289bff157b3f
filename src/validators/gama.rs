//! gAMA: image gamma. A single u32 in [1, 2^31-1] (spec.md §4.5).

use crate::chunk_type::ChunkType;
use crate::error::ParseError;

pub fn validate(kind: ChunkType, body: &[u8]) -> Result<String, ParseError> {
    if body.len() != 4 {
        return Err(ParseError::BadChunkBody {
            kind,
            rule: "body must be exactly 4 bytes",
        });
    }
    let value = u32::from_be_bytes([body[0], body[1], body[2], body[3]]);
    if value == 0 || value > i32::MAX as u32 {
        return Err(ParseError::BadChunkBody {
            kind,
            rule: "value must be in [1, 2^31-1]",
        });
    }
    Ok(format!("{kind}: gamma {value}"))
}
