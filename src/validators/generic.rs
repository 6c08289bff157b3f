//! Generic handling for opaque chunk kinds (spec.md §4.4/§4.5): a
//! hex-dump of the first 17-20 bytes, with truncation indicated, used
//! for IDAT, tRNS, hIST, sPLT and any unrecognized ancillary type.

use crate::chunk_type::ChunkType;
use crate::error::ParseError;

const DUMP_BYTES: usize = 20;

pub fn validate_opaque(kind: ChunkType, body: &[u8]) -> String {
    format!("{kind} ({} bytes): {}", body.len(), hex_dump(body))
}

pub fn validate_empty(kind: ChunkType, body: &[u8]) -> Result<String, ParseError> {
    if !body.is_empty() {
        return Err(ParseError::BadChunkBody {
            kind,
            rule: "body must be empty",
        });
    }
    Ok(format!("{kind}"))
}

fn hex_dump(body: &[u8]) -> String {
    let shown = &body[..body.len().min(DUMP_BYTES)];
    let mut out = shown
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ");
    if body.len() > DUMP_BYTES {
        out.push_str(" ...");
    }
    out
}
