//! sBIT: significant bits. Body length depends on the IHDR `colorType`
//! (spec.md §4.5); no further range check on the per-channel values.

use crate::chunk_type::ChunkType;
use crate::error::ParseError;

pub fn validate(kind: ChunkType, body: &[u8], color_type: Option<u8>) -> Result<String, ParseError> {
    let color_type = color_type.ok_or(ParseError::BadChunkOrder {
        kind,
        rule: "sBIT requires IHDR to have been seen",
    })?;
    let expected_len = match color_type {
        0 => 1,
        2 | 3 => 3,
        4 => 2,
        6 => 4,
        _ => {
            return Err(ParseError::BadChunkBody {
                kind,
                rule: "colorType must be one of 0, 2, 3, 4, 6",
            })
        }
    };
    if body.len() != expected_len {
        return Err(ParseError::BadChunkBody {
            kind,
            rule: "body length must match the colorType's sBIT channel count",
        });
    }
    Ok(format!("{kind}: {expected_len} significant-bit channels for colorType {color_type}"))
}
