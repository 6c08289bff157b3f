//! cHRM: primary chromaticities. Eight u32 fixed-point coordinates, no
//! range check beyond decoding (spec.md §4.5).

use crate::chunk_type::ChunkType;
use crate::error::ParseError;

pub fn validate(kind: ChunkType, body: &[u8]) -> Result<String, ParseError> {
    if body.len() != 32 {
        return Err(ParseError::BadChunkBody {
            kind,
            rule: "body must be exactly 32 bytes",
        });
    }
    let mut coords = [0u32; 8];
    for (i, slot) in coords.iter_mut().enumerate() {
        let off = i * 4;
        *slot = u32::from_be_bytes([body[off], body[off + 1], body[off + 2], body[off + 3]]);
    }
    Ok(format!(
        "{kind}: white({}, {}) red({}, {}) green({}, {}) blue({}, {})",
        coords[0], coords[1], coords[2], coords[3], coords[4], coords[5], coords[6], coords[7]
    ))
}
