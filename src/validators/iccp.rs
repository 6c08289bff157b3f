//! iCCP: embedded ICC profile. profileName NUL compressionMethod
//! compressedProfile, with a stricter character set on the name than a
//! plain zTXt keyword (spec.md §4.5).

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
            rule: "body must contain a NUL separating profile name and compressed data",
        })?;
    let name = &body[..sep];
    if name.is_empty() || name.len() > 79 {
        return Err(ParseError::BadChunkBody {
            kind,
            rule: "profile name length must be in [1, 79]",
        });
    }
    if !name.iter().all(|&b| (32..=126).contains(&b) || (161..=255).contains(&b)) {
        return Err(ParseError::BadChunkBody {
            kind,
            rule: "profile name bytes must be in [32,126] or [161,255]",
        });
    }
    if name[0] == b' ' || name[name.len() - 1] == b' ' {
        return Err(ParseError::BadChunkBody {
            kind,
            rule: "profile name must not have leading or trailing spaces",
        });
    }
    if name.windows(2).any(|w| w[0] == b' ' && w[1] == b' ') {
        return Err(ParseError::BadChunkBody {
            kind,
            rule: "profile name must not contain consecutive spaces",
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
    let name = String::from_utf8_lossy(name);
    Ok(format!("{kind}: {name}, {} compressed bytes", rest.len() - 1))
}
