//! # Ordering context
//! Replaces the fifteen-boolean-plus-`colorType` struct the C source keeps
//! (`ChunkInfo`) with a fixed-size `seen` table keyed by an enumerated
//! [`ChunkKind`], and a transition table expressing spec.md §3's invariants
//! as data rather than a long `if`/`else if` chain. The table is what makes
//! those invariants directly unit-testable per chunk kind.

use crate::chunk_type::ChunkType;
use crate::error::ParseError;

/// Every chunk kind the ordering rules distinguish. Recognized-but-opaque
/// kinds (tRNS, hIST, sPLT) still need a slot here because the *ordering*
/// rules apply to them even though their *body* validation is a generic
/// hex-dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkKind {
    Ihdr,
    Plte,
    Idat,
    Iend,
    Chrm,
    Gama,
    Iccp,
    Sbit,
    Srgb,
    Bkgd,
    Hist,
    Trns,
    Phys,
    Time,
    Text,
    Ztxt,
    Itxt,
    Splt,
    Other,
}

const TRACKED_KINDS: usize = 13;

impl ChunkKind {
    pub fn from_type(kind: &ChunkType) -> Self {
        match &kind.as_bytes() {
            b"IHDR" => ChunkKind::Ihdr,
            b"PLTE" => ChunkKind::Plte,
            b"IDAT" => ChunkKind::Idat,
            b"IEND" => ChunkKind::Iend,
            b"cHRM" => ChunkKind::Chrm,
            b"gAMA" => ChunkKind::Gama,
            b"iCCP" => ChunkKind::Iccp,
            b"sBIT" => ChunkKind::Sbit,
            b"sRGB" => ChunkKind::Srgb,
            b"bKGD" => ChunkKind::Bkgd,
            b"hIST" => ChunkKind::Hist,
            b"tRNS" => ChunkKind::Trns,
            b"pHYs" => ChunkKind::Phys,
            b"tIME" => ChunkKind::Time,
            b"tEXt" => ChunkKind::Text,
            b"zTXt" => ChunkKind::Ztxt,
            b"iTXt" => ChunkKind::Itxt,
            b"sPLT" => ChunkKind::Splt,
            _ => ChunkKind::Other,
        }
    }

    /// Index into the "seen" table for single-instance chunk kinds. `None`
    /// for `Idat` (tracked separately via `idat_seen`/`last_was_idat`) and
    /// `Other` (unrecognized kinds are never single-instance).
    fn seen_index(self) -> Option<usize> {
        match self {
            ChunkKind::Ihdr => Some(0),
            ChunkKind::Plte => Some(1),
            ChunkKind::Iend => Some(2),
            ChunkKind::Chrm => Some(3),
            ChunkKind::Gama => Some(4),
            ChunkKind::Iccp => Some(5),
            ChunkKind::Sbit => Some(6),
            ChunkKind::Srgb => Some(7),
            ChunkKind::Bkgd => Some(8),
            ChunkKind::Hist => Some(9),
            ChunkKind::Trns => Some(10),
            ChunkKind::Phys => Some(11),
            ChunkKind::Time => Some(12),
            ChunkKind::Idat | ChunkKind::Text | ChunkKind::Ztxt | ChunkKind::Itxt
            | ChunkKind::Splt | ChunkKind::Other => None,
        }
    }
}

/// Tracks which chunk kinds have been admitted so far, plus the auxiliary
/// state the invariants in spec.md §3 need: IDAT contiguity, the sealed
/// post-IEND state, and the color type captured from IHDR.
#[derive(Debug, Default)]
pub struct OrderingContext {
    seen: [bool; TRACKED_KINDS],
    idat_seen: bool,
    last_was_idat: bool,
    after_iend: bool,
    color_type: Option<u8>,
}

impl OrderingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn after_iend(&self) -> bool {
        self.after_iend
    }

    pub fn color_type(&self) -> Option<u8> {
        self.color_type
    }

    pub fn set_color_type(&mut self, color_type: u8) {
        self.color_type = Some(color_type);
    }

    pub fn ihdr_seen(&self) -> bool {
        self.seen[ChunkKind::Ihdr.seen_index().unwrap()]
    }

    pub fn plte_seen(&self) -> bool {
        self.seen[ChunkKind::Plte.seen_index().unwrap()]
    }

    fn has_seen(&self, kind: ChunkKind) -> bool {
        match kind.seen_index() {
            Some(i) => self.seen[i],
            None => false,
        }
    }

    fn mark_seen(&mut self, kind: ChunkKind) {
        if let Some(i) = kind.seen_index() {
            self.seen[i] = true;
        }
    }

    /// Applies the transition table from spec.md §3 for an incoming chunk of
    /// the given `kind`/`display`, rejecting with [`ParseError::BadChunkOrder`]
    /// on any violated precedence or single-instance rule, and otherwise
    /// updating the context to record admission.
    pub fn admit(&mut self, kind: ChunkKind, display: ChunkType) -> Result<(), ParseError> {
        let reject = |rule: &'static str| {
            Err(ParseError::BadChunkOrder {
                kind: display,
                rule,
            })
        };

        if self.after_iend {
            return reject("no chunk may follow IEND");
        }
        if self.idat_seen && !self.last_was_idat && kind == ChunkKind::Idat {
            return reject("IDAT chunks must be consecutive");
        }
        // Every non-IDAT admission breaks IDAT contiguity; set this before
        // the per-kind match so the IDAT arm above sees the value from the
        // *previous* chunk and can restore it to `true` below.
        if kind != ChunkKind::Idat {
            self.last_was_idat = false;
        }

        if kind != ChunkKind::Ihdr && !self.ihdr_seen() {
            return reject("IHDR must precede every other chunk");
        }

        match kind {
            ChunkKind::Ihdr => {
                if self.ihdr_seen() {
                    return reject("IHDR may appear only once");
                }
                self.mark_seen(ChunkKind::Ihdr);
            }
            ChunkKind::Plte => {
                if self.plte_seen()
                    || self.idat_seen
                    || self.has_seen(ChunkKind::Bkgd)
                    || self.has_seen(ChunkKind::Hist)
                    || self.has_seen(ChunkKind::Trns)
                {
                    return reject(
                        "PLTE must be unique and precede IDAT, bKGD, hIST and tRNS",
                    );
                }
                self.mark_seen(ChunkKind::Plte);
            }
            ChunkKind::Idat => {
                self.idat_seen = true;
                self.last_was_idat = true;
            }
            ChunkKind::Iend => {
                if !self.idat_seen {
                    return reject("IEND requires at least one IDAT chunk first");
                }
                self.mark_seen(ChunkKind::Iend);
                self.after_iend = true;
            }
            ChunkKind::Chrm => {
                if self.has_seen(ChunkKind::Chrm) || self.plte_seen() || self.idat_seen {
                    return reject("cHRM must be unique and precede PLTE and IDAT");
                }
                self.mark_seen(ChunkKind::Chrm);
            }
            ChunkKind::Gama => {
                if self.has_seen(ChunkKind::Gama) || self.plte_seen() || self.idat_seen {
                    return reject("gAMA must be unique and precede PLTE and IDAT");
                }
                self.mark_seen(ChunkKind::Gama);
            }
            ChunkKind::Iccp => {
                if self.has_seen(ChunkKind::Iccp)
                    || self.has_seen(ChunkKind::Srgb)
                    || self.plte_seen()
                    || self.idat_seen
                {
                    return reject(
                        "iCCP must be unique, exclude sRGB, and precede PLTE and IDAT",
                    );
                }
                self.mark_seen(ChunkKind::Iccp);
            }
            ChunkKind::Srgb => {
                if self.has_seen(ChunkKind::Srgb)
                    || self.has_seen(ChunkKind::Iccp)
                    || self.plte_seen()
                    || self.idat_seen
                {
                    return reject(
                        "sRGB must be unique, exclude iCCP, and precede PLTE and IDAT",
                    );
                }
                self.mark_seen(ChunkKind::Srgb);
            }
            ChunkKind::Sbit => {
                if self.has_seen(ChunkKind::Sbit) || self.plte_seen() || self.idat_seen {
                    return reject("sBIT must be unique and precede PLTE and IDAT");
                }
                self.mark_seen(ChunkKind::Sbit);
            }
            ChunkKind::Bkgd => {
                if self.has_seen(ChunkKind::Bkgd) || self.idat_seen {
                    return reject("bKGD must be unique and precede IDAT");
                }
                self.mark_seen(ChunkKind::Bkgd);
            }
            ChunkKind::Hist => {
                if self.has_seen(ChunkKind::Hist) || !self.plte_seen() || self.idat_seen {
                    return reject("hIST must be unique, follow PLTE, and precede IDAT");
                }
                self.mark_seen(ChunkKind::Hist);
            }
            ChunkKind::Trns => {
                if self.has_seen(ChunkKind::Trns) || self.idat_seen {
                    return reject("tRNS must be unique and precede IDAT");
                }
                self.mark_seen(ChunkKind::Trns);
            }
            ChunkKind::Phys => {
                if self.has_seen(ChunkKind::Phys) || self.idat_seen {
                    return reject("pHYs must be unique and precede IDAT");
                }
                self.mark_seen(ChunkKind::Phys);
            }
            ChunkKind::Time => {
                if self.has_seen(ChunkKind::Time) {
                    return reject("tIME may appear only once");
                }
                self.mark_seen(ChunkKind::Time);
            }
            ChunkKind::Text | ChunkKind::Ztxt | ChunkKind::Itxt | ChunkKind::Splt
            | ChunkKind::Other => {
                // Multi-instance ancillary chunks: only the IHDR-seen /
                // not-sealed checks above apply.
            }
        }

        Ok(())
    }

    /// Terminal checks spec.md §3 requires once the stream is fully fed:
    /// IEND must have been seen, and PLTE presence must match `colorType`.
    pub fn finish(&self) -> Result<(), ParseError> {
        if !self.after_iend {
            return Err(ParseError::MissingIend);
        }
        let display = ChunkType::try_from(*b"PLTE").expect("PLTE is a valid chunk type");
        match self.color_type {
            Some(3) if !self.plte_seen() => Err(ParseError::BadChunkOrder {
                kind: display,
                rule: "PLTE is required when colorType is 3",
            }),
            Some(0) | Some(4) if self.plte_seen() => Err(ParseError::BadChunkOrder {
                kind: display,
                rule: "PLTE is forbidden when colorType is 0 or 4",
            }),
            _ => Ok(()),
        }
    }
}
