//! zTXt: compressed textual metadata. keyword NUL compressionMethod
//! compressedData (spec.md §4.5).

use crate::chunk_type::ChunkType;
use crate::error::ParseError;

pub fn validate(kind: ChunkType, body: &[u8]) -> Result<String, ParseError> {
    if body.len() < 3 {
        return Err(ParseError::BadChunkBody {
            kind,
            rule: "body must be at least 3 bytes",
        });
    }
    let sep = body
        .iter()
        .position(|&b| b == 0)
        .ok_or(ParseError::BadChunkBody {
            kind,
            rule: "body must contain a NUL separating keyword and compressed data",
        })?;
    let keyword = &body[..sep];
    if keyword.is_empty() || keyword.len() > 79 {
        return Err(ParseError::BadChunkBody {
            kind,
            rule: "keyword length must be in [1, 79]",
        });
    }
    let rest = &body[sep + 1..];
    if rest.len() < 2 {
        return Err(ParseError::BadChunkBody {
            kind,
            rule: "compression method and at least one byte of compressed data are required",
        });
    }
    if rest[0] != 0 {
        return Err(ParseError::BadChunkBody {
            kind,
            rule: "compression method must be 0",
        });
    }
    let keyword = String::from_utf8_lossy(keyword);
    Ok(format!("{kind}: {keyword}, {} compressed bytes", rest.len() - 1))
}
