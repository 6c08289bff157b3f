//! # Chunk dispatch and per-type semantics (spec.md §4.4, §4.5)
//! `dispatch` matches a chunk's type code against the recognized set,
//! invoking the matching validator with the chunk body and the running
//! `colorType` context. Unknown critical chunks are rejected outright;
//! unknown ancillary chunks and the opaque critical/ancillary kinds
//! (IDAT, tRNS, hIST, sPLT) fall through to the generic hex-dump.

pub(crate) mod bkgd;
pub(crate) mod chrm;
pub(crate) mod gama;
mod generic;
pub(crate) mod iccp;
pub(crate) mod ihdr;
pub(crate) mod phys;
pub(crate) mod plte;
pub(crate) mod sbit;
pub(crate) mod srgb;
pub(crate) mod text;
pub(crate) mod time;
pub(crate) mod ztxt;

use crate::chunk::Chunk;
use crate::error::ParseError;
use crate::ordering::OrderingContext;
use crate::render::ChunkSink;

pub fn dispatch(
    chunk: Chunk<'_>,
    ctx: &mut OrderingContext,
    sink: &mut dyn ChunkSink,
) -> Result<(), ParseError> {
    let kind = chunk.kind();
    let body = chunk.body();

    let description = match kind.as_bytes().as_ref() {
        b"IHDR" => {
            let (description, color_type) = ihdr::validate(kind, body)?;
            ctx.set_color_type(color_type);
            description
        }
        b"IEND" => generic::validate_empty(kind, body)?,
        b"PLTE" => plte::validate(kind, body)?,
        b"tIME" => time::validate(kind, body)?,
        b"cHRM" => chrm::validate(kind, body)?,
        b"gAMA" => gama::validate(kind, body)?,
        b"tEXt" => text::validate_text(kind, body)?,
        b"zTXt" => ztxt::validate(kind, body)?,
        b"iCCP" => iccp::validate(kind, body)?,
        b"bKGD" => bkgd::validate(kind, body, ctx.color_type())?,
        b"pHYs" => phys::validate(kind, body)?,
        b"sRGB" => srgb::validate(kind, body)?,
        b"sBIT" => sbit::validate(kind, body, ctx.color_type())?,
        b"tRNS" | b"hIST" | b"sPLT" | b"IDAT" => generic::validate_opaque(kind, body),
        b"iTXt" => text::validate_itxt(kind, body)?,
        _ => {
            if kind.is_critical() {
                return Err(ParseError::UnknownCriticalChunk { kind });
            }
            generic::validate_opaque(kind, body)
        }
    };

    sink.chunk(&description);
    Ok(())
}
