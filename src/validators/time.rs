//! tIME: last modification time. Exactly 7 bytes (spec.md §4.5).

use crate::chunk_type::ChunkType;
use crate::error::ParseError;

pub fn validate(kind: ChunkType, body: &[u8]) -> Result<String, ParseError> {
    if body.len() != 7 {
        return Err(ParseError::BadChunkBody {
            kind,
            rule: "body must be exactly 7 bytes",
        });
    }
    let year = u16::from_be_bytes([body[0], body[1]]);
    let month = body[2];
    let day = body[3];
    let hour = body[4];
    let minute = body[5];
    let second = body[6];

    if !(1..=12).contains(&month) {
        return Err(ParseError::BadChunkBody { kind, rule: "month must be in 1..=12" });
    }
    if !(1..=31).contains(&day) {
        return Err(ParseError::BadChunkBody { kind, rule: "day must be in 1..=31" });
    }
    if hour > 23 {
        return Err(ParseError::BadChunkBody { kind, rule: "hour must be at most 23" });
    }
    if minute > 59 {
        return Err(ParseError::BadChunkBody { kind, rule: "minute must be at most 59" });
    }
    if second > 60 {
        return Err(ParseError::BadChunkBody {
            kind,
            rule: "second must be at most 60 (leap second)",
        });
    }

    Ok(format!(
        "{kind}: {year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}"
    ))
}
