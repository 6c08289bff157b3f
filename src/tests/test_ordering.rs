use crate::chunk_type::ChunkType;
use crate::error::ParseError;
use crate::ordering::{ChunkKind, OrderingContext};

fn kind(bytes: [u8; 4]) -> ChunkType {
    ChunkType::try_from(bytes).unwrap()
}

#[test]
fn ihdr_must_come_first() {
    let mut ctx = OrderingContext::new();
    let err = ctx
        .admit(ChunkKind::Idat, kind(*b"IDAT"))
        .unwrap_err();
    assert!(matches!(err, ParseError::BadChunkOrder { .. }));
}

#[test]
fn duplicate_ihdr_rejected() {
    let mut ctx = OrderingContext::new();
    ctx.admit(ChunkKind::Ihdr, kind(*b"IHDR")).unwrap();
    let err = ctx.admit(ChunkKind::Ihdr, kind(*b"IHDR")).unwrap_err();
    assert!(matches!(err, ParseError::BadChunkOrder { .. }));
}

#[test]
fn nothing_follows_iend() {
    let mut ctx = OrderingContext::new();
    ctx.admit(ChunkKind::Ihdr, kind(*b"IHDR")).unwrap();
    ctx.admit(ChunkKind::Idat, kind(*b"IDAT")).unwrap();
    ctx.admit(ChunkKind::Iend, kind(*b"IEND")).unwrap();
    assert!(ctx.after_iend());
    let err = ctx.admit(ChunkKind::Text, kind(*b"tEXt")).unwrap_err();
    assert!(matches!(err, ParseError::BadChunkOrder { .. }));
}

#[test]
fn non_contiguous_idat_rejected() {
    let mut ctx = OrderingContext::new();
    ctx.admit(ChunkKind::Ihdr, kind(*b"IHDR")).unwrap();
    ctx.admit(ChunkKind::Idat, kind(*b"IDAT")).unwrap();
    ctx.admit(ChunkKind::Text, kind(*b"tEXt")).unwrap();
    let err = ctx.admit(ChunkKind::Idat, kind(*b"IDAT")).unwrap_err();
    assert!(matches!(err, ParseError::BadChunkOrder { .. }));
}

#[test]
fn plte_forbidden_after_idat() {
    let mut ctx = OrderingContext::new();
    ctx.admit(ChunkKind::Ihdr, kind(*b"IHDR")).unwrap();
    ctx.admit(ChunkKind::Idat, kind(*b"IDAT")).unwrap();
    let err = ctx.admit(ChunkKind::Plte, kind(*b"PLTE")).unwrap_err();
    assert!(matches!(err, ParseError::BadChunkOrder { .. }));
}

#[test]
fn iccp_and_srgb_are_mutually_exclusive() {
    let mut ctx = OrderingContext::new();
    ctx.admit(ChunkKind::Ihdr, kind(*b"IHDR")).unwrap();
    ctx.admit(ChunkKind::Iccp, kind(*b"iCCP")).unwrap();
    let err = ctx.admit(ChunkKind::Srgb, kind(*b"sRGB")).unwrap_err();
    assert!(matches!(err, ParseError::BadChunkOrder { .. }));
}

#[test]
fn hist_requires_plte_first() {
    let mut ctx = OrderingContext::new();
    ctx.admit(ChunkKind::Ihdr, kind(*b"IHDR")).unwrap();
    let err = ctx.admit(ChunkKind::Hist, kind(*b"hIST")).unwrap_err();
    assert!(matches!(err, ParseError::BadChunkOrder { .. }));

    ctx.admit(ChunkKind::Plte, kind(*b"PLTE")).unwrap();
    ctx.admit(ChunkKind::Hist, kind(*b"hIST")).unwrap();
}

#[test]
fn finish_requires_iend() {
    let mut ctx = OrderingContext::new();
    ctx.admit(ChunkKind::Ihdr, kind(*b"IHDR")).unwrap();
    ctx.set_color_type(2);
    let err = ctx.finish().unwrap_err();
    assert!(matches!(err, ParseError::MissingIend));
}

#[test]
fn finish_checks_plte_against_color_type() {
    let mut ctx = OrderingContext::new();
    ctx.admit(ChunkKind::Ihdr, kind(*b"IHDR")).unwrap();
    ctx.set_color_type(3);
    ctx.admit(ChunkKind::Idat, kind(*b"IDAT")).unwrap();
    ctx.admit(ChunkKind::Iend, kind(*b"IEND")).unwrap();
    let err = ctx.finish().unwrap_err();
    assert!(matches!(err, ParseError::BadChunkOrder { .. }));
}
