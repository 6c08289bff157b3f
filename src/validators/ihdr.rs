//! IHDR: image header. Fixed 13-byte body; establishes the `colorType`
//! the rest of the stream's ordering and bKGD/sBIT validators depend on
//! (spec.md §4.5).

use crate::chunk_type::ChunkType;
use crate::error::ParseError;

pub fn validate(kind: ChunkType, body: &[u8]) -> Result<(String, u8), ParseError> {
    if body.len() != 13 {
        return Err(ParseError::BadChunkBody {
            kind,
            rule: "body must be exactly 13 bytes",
        });
    }

    let width = u32::from_be_bytes([body[0], body[1], body[2], body[3]]);
    let height = u32::from_be_bytes([body[4], body[5], body[6], body[7]]);
    let bit_depth = body[8];
    let color_type = body[9];
    let compression = body[10];
    let filter = body[11];
    let interlace = body[12];

    if width == 0 || height == 0 {
        return Err(ParseError::BadChunkBody {
            kind,
            rule: "width and height must be at least 1",
        });
    }
    if width > i32::MAX as u32 || height > i32::MAX as u32 {
        return Err(ParseError::BadChunkBody {
            kind,
            rule: "width and height must be in [1, 2^31-1]",
        });
    }
    if !matches!(bit_depth, 1 | 2 | 4 | 8 | 16) {
        return Err(ParseError::BadChunkBody {
            kind,
            rule: "bitDepth must be one of 1, 2, 4, 8, 16",
        });
    }
    if !matches!(color_type, 0 | 2 | 3 | 4 | 6) {
        return Err(ParseError::BadChunkBody {
            kind,
            rule: "colorType must be one of 0, 2, 3, 4, 6",
        });
    }
    if matches!(color_type, 2 | 4 | 6) && !matches!(bit_depth, 8 | 16) {
        return Err(ParseError::BadChunkBody {
            kind,
            rule: "colorType 2, 4 or 6 requires bitDepth 8 or 16",
        });
    }
    if color_type == 3 && bit_depth == 16 {
        return Err(ParseError::BadChunkBody {
            kind,
            rule: "colorType 3 forbids bitDepth 16",
        });
    }
    if compression != 0 {
        return Err(ParseError::BadChunkBody {
            kind,
            rule: "compression method must be 0",
        });
    }
    if filter != 0 {
        return Err(ParseError::BadChunkBody {
            kind,
            rule: "filter method must be 0",
        });
    }
    if !matches!(interlace, 0 | 1) {
        return Err(ParseError::BadChunkBody {
            kind,
            rule: "interlace method must be 0 or 1",
        });
    }

    let description = format!(
        "{kind}: SIZE : {width} x {height}, BIT DEPTH : {bit_depth}, COLOR TYPE : {}",
        color_type_name(color_type)
    );
    Ok((description, color_type))
}

fn color_type_name(color_type: u8) -> &'static str {
    match color_type {
        0 => "GRAYSCALE",
        2 => "TRUE COLOR",
        3 => "INDEXED",
        4 => "GRAYSCALE WITH ALPHA",
        6 => "TRUE COLOR WITH ALPHA",
        _ => "UNKNOWN",
    }
}
