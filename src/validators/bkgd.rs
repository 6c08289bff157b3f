//! bKGD: default background color. Body length depends on the IHDR
//! `colorType` already captured by the ordering context (spec.md §4.5).

use crate::chunk_type::ChunkType;
use crate::error::ParseError;

pub fn validate(kind: ChunkType, body: &[u8], color_type: Option<u8>) -> Result<String, ParseError> {
    let color_type = color_type.ok_or(ParseError::BadChunkOrder {
        kind,
        rule: "bKGD requires IHDR to have been seen",
    })?;
    let expected_len = match color_type {
        0 | 4 => 2,
        2 | 6 => 6,
        3 => 1,
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
            rule: "body length must match the colorType's bKGD encoding",
        });
    }
    Ok(format!("{kind}: {expected_len} bytes for colorType {color_type}"))
}
