//! # Stream state machine
//! Slices an arbitrary byte stream into the signature and a sequence of
//! chunks regardless of how the caller partitions the input into `feed`
//! calls (spec.md §4.2). Mirrors the source's four-state cycle
//! (`PROCESS_PNG_HEADER` / `PROCESS_CHUNK_HEADER` / `PROCESS_CHUNK_DATA` /
//! `PROCESS_CHUNK_CRC`) but represents the zero-length-chunk shortcut as an
//! explicit branch (spec.md §9) instead of a fallthrough, and owns its
//! accumulation buffers as `Vec<u8>` rather than a caller-managed pointer.

use tracing::{debug, trace, warn};

use crate::chunk::Chunk;
use crate::chunk_type::ChunkType;
use crate::crc;
use crate::error::ParseError;
use crate::ordering::{ChunkKind, OrderingContext};
use crate::render::ChunkSink;
use crate::validators;

const SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];
const PREFIX_LEN: usize = 8; // 4-byte length + 4-byte type
const CRC_LEN: usize = 4;
const DEFAULT_MAX_CHUNK_BYTES: u32 = u32::MAX >> 1; // 2^31 - 1

/// Which accumulation phase the parser is in. Each variant owns the buffer
/// it is currently filling plus whatever was decoded at the previous
/// transition and must be carried forward to the next one.
enum State {
    AwaitSignature { buf: Vec<u8> },
    AwaitChunkPrefix { buf: Vec<u8> },
    AwaitChunkBody {
        type_code: [u8; 4],
        length: u32,
        buf: Vec<u8>,
    },
    AwaitChunkCrc {
        type_code: [u8; 4],
        body: Vec<u8>,
        buf: Vec<u8>,
    },
}

impl State {
    fn await_prefix() -> Self {
        State::AwaitChunkPrefix { buf: Vec::with_capacity(PREFIX_LEN) }
    }
}

/// Drives the chunk decomposition, CRC/type validation (§4.3), dispatch
/// (§4.4), per-chunk semantics (§4.5) and ordering (§4.6) for one stream.
/// Holds a borrowed sink for the lifetime of the parse; any error poisons
/// the parser and all further calls return [`ParseError::Poisoned`].
pub struct Parser<'s> {
    state: State,
    ctx: OrderingContext,
    sink: &'s mut dyn ChunkSink,
    poisoned: bool,
    max_chunk_bytes: u32,
}

impl<'s> Parser<'s> {
    /// Constructs a parser in `AwaitSignature` with an empty `OrderingContext`,
    /// capping chunk bodies at the PNG-maximum 2³¹−1 bytes.
    pub fn new(sink: &'s mut dyn ChunkSink) -> Self {
        Self::with_max_chunk_bytes(DEFAULT_MAX_CHUNK_BYTES, sink)
    }

    /// As [`Parser::new`], but rejects any chunk whose declared length
    /// exceeds `max_chunk_bytes` with [`ParseError::ChunkTooLarge`].
    pub fn with_max_chunk_bytes(max_chunk_bytes: u32, sink: &'s mut dyn ChunkSink) -> Self {
        Parser {
            state: State::AwaitSignature { buf: Vec::with_capacity(SIGNATURE.len()) },
            ctx: OrderingContext::new(),
            sink,
            poisoned: false,
            max_chunk_bytes,
        }
    }

    /// Consumes all of `bytes`, completing zero or more chunks. Never
    /// partial-reads on success. On the first error the parser is poisoned;
    /// the caller must discard it.
    pub fn feed(&mut self, bytes: &[u8]) -> Result<(), ParseError> {
        if self.poisoned {
            return Err(ParseError::Poisoned);
        }
        let mut cursor = bytes;
        while !cursor.is_empty() {
            match self.step(cursor) {
                Ok(consumed) => cursor = &cursor[consumed..],
                Err(e) => {
                    warn!(error = %e, "parser poisoned");
                    self.poisoned = true;
                    return Err(e);
                }
            }
        }
        Ok(())
    }

    /// Consumes as much of `input` as is needed to complete the current
    /// state's target, runs the corresponding transition, and returns how
    /// many bytes were consumed. `input` is guaranteed non-empty.
    fn step(&mut self, input: &[u8]) -> Result<usize, ParseError> {
        match &mut self.state {
            State::AwaitSignature { buf } => {
                let need = SIGNATURE.len() - buf.len();
                let take = need.min(input.len());
                buf.extend_from_slice(&input[..take]);
                if buf.len() == SIGNATURE.len() {
                    if buf.as_slice() != SIGNATURE {
                        warn!(got = ?buf.as_slice(), "signature mismatch");
                        return Err(ParseError::BadSignature);
                    }
                    trace!("signature accepted, awaiting first chunk prefix");
                    self.state = State::await_prefix();
                }
                Ok(take)
            }
            State::AwaitChunkPrefix { buf } => {
                let need = PREFIX_LEN - buf.len();
                let take = need.min(input.len());
                buf.extend_from_slice(&input[..take]);
                if buf.len() == PREFIX_LEN {
                    let length = u32::from_be_bytes([buf[0], buf[1], buf[2], buf[3]]);
                    let type_code = [buf[4], buf[5], buf[6], buf[7]];
                    trace!(?type_code, length, "chunk prefix decoded");
                    if length > DEFAULT_MAX_CHUNK_BYTES {
                        warn!(length, "declared length exceeds 2^31-1");
                        return Err(ParseError::LengthTooLarge { declared: length });
                    }
                    if length > self.max_chunk_bytes {
                        warn!(length, limit = self.max_chunk_bytes, "declared length exceeds configured cap");
                        return Err(ParseError::ChunkTooLarge {
                            declared: length,
                            limit: self.max_chunk_bytes,
                        });
                    }
                    // Explicit branch for the zero-length-body shortcut
                    // (spec.md §9): no body phase is entered at all.
                    if length == 0 {
                        self.state = State::AwaitChunkCrc {
                            type_code,
                            body: Vec::new(),
                            buf: Vec::with_capacity(CRC_LEN),
                        };
                    } else {
                        let mut body = Vec::new();
                        body.try_reserve_exact(length as usize)
                            .map_err(|_| ParseError::OutOfMemory { bytes: length })?;
                        self.state = State::AwaitChunkBody { type_code, length, buf: body };
                    }
                }
                Ok(take)
            }
            State::AwaitChunkBody { type_code, length, buf } => {
                let need = *length as usize - buf.len();
                let take = need.min(input.len());
                buf.extend_from_slice(&input[..take]);
                if buf.len() == *length as usize {
                    let body = std::mem::take(buf);
                    let type_code = *type_code;
                    self.state = State::AwaitChunkCrc {
                        type_code,
                        body,
                        buf: Vec::with_capacity(CRC_LEN),
                    };
                }
                Ok(take)
            }
            State::AwaitChunkCrc { type_code, body, buf } => {
                let need = CRC_LEN - buf.len();
                let take = need.min(input.len());
                buf.extend_from_slice(&input[..take]);
                if buf.len() == CRC_LEN {
                    let crc_field = u32::from_be_bytes([buf[0], buf[1], buf[2], buf[3]]);
                    let type_code = *type_code;
                    let body = std::mem::take(body);
                    self.complete_chunk(type_code, &body, crc_field)?;
                    trace!(?type_code, "chunk admitted, awaiting next prefix");
                    self.state = State::await_prefix();
                }
                Ok(take)
            }
        }
    }

    /// §4.3 CRC/type validation, then §4.4 dispatch: order validation
    /// followed by the matching per-type semantic validator.
    fn complete_chunk(
        &mut self,
        type_code: [u8; 4],
        body: &[u8],
        crc_field: u32,
    ) -> Result<(), ParseError> {
        let expected = crc::crc32_chunk(type_code, body);
        if expected != crc_field {
            warn!(?type_code, expected, got = crc_field, "CRC mismatch");
            return Err(ParseError::CrcMismatch { kind: type_code });
        }
        let kind = ChunkType::try_from(type_code)?;
        let chunk = Chunk::new(kind, body);

        let ordering_kind = ChunkKind::from_type(&kind);
        self.ctx.admit(ordering_kind, kind)?;
        debug!(%kind, bytes = body.len(), "chunk validated");

        validators::dispatch(chunk, &mut self.ctx, self.sink)
    }

    /// Asserts terminal acceptance: the parser must be sitting at an empty
    /// `AwaitChunkPrefix` (no partially-consumed chunk) and `afterIEND`
    /// must hold.
    pub fn finish(&mut self) -> Result<(), ParseError> {
        if self.poisoned {
            return Err(ParseError::Poisoned);
        }
        let at_boundary = matches!(&self.state, State::AwaitChunkPrefix { buf } if buf.is_empty());
        if !at_boundary {
            warn!("finish called mid-chunk");
            self.poisoned = true;
            return Err(ParseError::UnexpectedEof);
        }
        match self.ctx.finish() {
            Ok(()) => {
                debug!("stream accepted");
                Ok(())
            }
            Err(e) => {
                self.poisoned = true;
                Err(e)
            }
        }
    }
}
