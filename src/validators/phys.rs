//! pHYs: physical pixel dimensions. Two u32 axes plus a unit byte
//! (spec.md §4.5).

use crate::chunk_type::ChunkType;
use crate::error::ParseError;

pub fn validate(kind: ChunkType, body: &[u8]) -> Result<String, ParseError> {
    if body.len() != 9 {
        return Err(ParseError::BadChunkBody {
            kind,
            rule: "body must be exactly 9 bytes",
        });
    }
    let x = u32::from_be_bytes([body[0], body[1], body[2], body[3]]);
    let y = u32::from_be_bytes([body[4], body[5], body[6], body[7]]);
    let unit = body[8];
    if x > i32::MAX as u32 || y > i32::MAX as u32 {
        return Err(ParseError::BadChunkBody {
            kind,
            rule: "pixels-per-unit axes must be at most 2^31-1",
        });
    }
    if unit > 1 {
        return Err(ParseError::BadChunkBody {
            kind,
            rule: "unit specifier must be 0 or 1",
        });
    }
    Ok(format!("{kind}: {x} x {y} px/unit, unit {unit}"))
}
