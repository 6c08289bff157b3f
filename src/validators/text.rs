//! tEXt and iTXt: textual metadata. tEXt is keyword/NUL/text (spec.md
//! §4.5); iTXt adds compression and language-tag fields and is not named
//! by the source but follows the same keyword-then-NUL-separated-fields
//! shape, so its envelope is validated the same way rather than treated
//! as opaque.

use crate::chunk_type::ChunkType;
use crate::error::ParseError;

fn validate_keyword(kind: ChunkType, keyword: &[u8], rule_prefix: &'static str) -> Result<(), ParseError> {
    if keyword.is_empty() || keyword.len() > 79 {
        return Err(ParseError::BadChunkBody { kind, rule: rule_prefix });
    }
    Ok(())
}

pub fn validate_text(kind: ChunkType, body: &[u8]) -> Result<String, ParseError> {
    if body.len() < 2 {
        return Err(ParseError::BadChunkBody {
            kind,
            rule: "body must be at least 2 bytes",
        });
    }
    let nul_count = body.iter().filter(|&&b| b == 0).count();
    if nul_count != 1 {
        return Err(ParseError::BadChunkBody {
            kind,
            rule: "body must contain exactly one NUL separator",
        });
    }
    let sep = body.iter().position(|&b| b == 0).unwrap();
    let keyword = &body[..sep];
    validate_keyword(kind, keyword, "keyword length must be in [1, 79]")?;
    let text = &body[sep + 1..];
    let keyword = String::from_utf8_lossy(keyword);
    Ok(format!("{kind}: {keyword} = {} bytes of text", text.len()))
}

pub fn validate_itxt(kind: ChunkType, body: &[u8]) -> Result<String, ParseError> {
    let mut fields = body.splitn(2, |&b| b == 0);
    let keyword = fields.next().unwrap_or(&[]);
    let rest = fields.next().ok_or(ParseError::BadChunkBody {
        kind,
        rule: "iTXt must have a NUL-terminated keyword",
    })?;
    validate_keyword(kind, keyword, "keyword length must be in [1, 79]")?;

    if rest.len() < 2 {
        return Err(ParseError::BadChunkBody {
            kind,
            rule: "iTXt must carry compression flag and method after the keyword",
        });
    }
    let compression_flag = rest[0];
    let compression_method = rest[1];
    if compression_flag > 1 {
        return Err(ParseError::BadChunkBody {
            kind,
            rule: "compression flag must be 0 or 1",
        });
    }
    if compression_flag == 1 && compression_method != 0 {
        return Err(ParseError::BadChunkBody {
            kind,
            rule: "compression method must be 0 when compression flag is set",
        });
    }

    let rest = &rest[2..];
    let mut fields = rest.splitn(2, |&b| b == 0);
    let language_tag = fields.next().unwrap_or(&[]);
    let rest = fields.next().ok_or(ParseError::BadChunkBody {
        kind,
        rule: "iTXt must have a NUL-terminated language tag",
    })?;

    let mut fields = rest.splitn(2, |&b| b == 0);
    let translated_keyword = fields.next().unwrap_or(&[]);
    let text = fields.next().ok_or(ParseError::BadChunkBody {
        kind,
        rule: "iTXt must have a NUL-terminated translated keyword",
    })?;

    let keyword = String::from_utf8_lossy(keyword);
    let language_tag = String::from_utf8_lossy(language_tag);
    let _ = translated_keyword;
    Ok(format!(
        "{kind}: {keyword} [{language_tag}] = {} bytes of text",
        text.len()
    ))
}
