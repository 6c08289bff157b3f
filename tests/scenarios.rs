//! Concrete end-to-end scenarios run through the public `Parser` API,
//! built from raw bytes rather than real PNG files so each one stays a
//! small, self-contained fixture.

use png_inspect::render::CollectingSink;
use png_inspect::Parser;

const SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

fn make_chunk(kind: &[u8; 4], body: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(8 + body.len() + 4);
    out.extend_from_slice(&(body.len() as u32).to_be_bytes());
    out.extend_from_slice(kind);
    out.extend_from_slice(body);
    out.extend_from_slice(&png_inspect::crc::crc32_chunk(*kind, body).to_be_bytes());
    out
}

fn ihdr_body(color_type: u8, bit_depth: u8) -> Vec<u8> {
    let mut body = Vec::with_capacity(13);
    body.extend_from_slice(&1u32.to_be_bytes());
    body.extend_from_slice(&1u32.to_be_bytes());
    body.push(bit_depth);
    body.push(color_type);
    body.push(0);
    body.push(0);
    body.push(0);
    body
}

fn valid_png() -> Vec<u8> {
    let mut stream = SIGNATURE.to_vec();
    stream.extend(make_chunk(b"IHDR", &ihdr_body(2, 8)));
    stream.extend(make_chunk(b"IDAT", &[0x01, 0x00, 0x00, 0x00, 0x01]));
    stream.extend(make_chunk(b"IEND", &[]));
    stream
}

/// S1 — minimum valid PNG: IHDR, one IDAT, IEND all succeed and each
/// emits a description.
#[test]
fn s1_minimum_valid_png() {
    let stream = valid_png();
    let mut sink = CollectingSink::default();
    let mut parser = Parser::new(&mut sink);
    parser.feed(&stream).expect("feed should succeed");
    parser.finish().expect("finish should succeed");
    assert_eq!(sink.lines.len(), 3);
    assert!(sink.lines[0].contains("1 x 1"));
    assert!(sink.lines[0].contains("TRUE COLOR"));
}

/// S2 — bad signature: the very last signature byte is wrong.
#[test]
fn s2_bad_signature() {
    let mut stream = valid_png();
    stream[7] = 0x0B;
    let mut sink = CollectingSink::default();
    let mut parser = Parser::new(&mut sink);
    let err = parser.feed(&stream).unwrap_err();
    assert!(matches!(err, png_inspect::ParseError::BadSignature));
}

/// S3 — CRC corruption: flip the least-significant bit of IHDR's CRC.
#[test]
fn s3_crc_corruption() {
    let mut stream = valid_png();
    let crc_offset = SIGNATURE.len() + 8 + 13;
    stream[crc_offset + 3] ^= 0x01;
    let mut sink = CollectingSink::default();
    let mut parser = Parser::new(&mut sink);
    let err = parser.feed(&stream).unwrap_err();
    assert!(matches!(err, png_inspect::ParseError::CrcMismatch { .. }));
}

/// S4 — length 2^31: a chunk prefix claiming a length of 0x80000000 must
/// be rejected before any body is read.
#[test]
fn s4_length_too_large() {
    let mut stream = SIGNATURE.to_vec();
    stream.extend_from_slice(&0x8000_0000u32.to_be_bytes());
    stream.extend_from_slice(b"IDAT");
    let mut sink = CollectingSink::default();
    let mut parser = Parser::new(&mut sink);
    let err = parser.feed(&stream).unwrap_err();
    assert!(matches!(
        err,
        png_inspect::ParseError::LengthTooLarge { declared: 0x8000_0000 }
    ));
}

/// S5 — PLTE with colorType 0: PLTE is forbidden for grayscale images.
#[test]
fn s5_plte_with_grayscale_color_type() {
    let mut stream = SIGNATURE.to_vec();
    stream.extend(make_chunk(b"IHDR", &ihdr_body(0, 8)));
    stream.extend(make_chunk(b"PLTE", &[0, 0, 0]));
    stream.extend(make_chunk(b"IDAT", &[0x01]));
    stream.extend(make_chunk(b"IEND", &[]));
    let mut sink = CollectingSink::default();
    let mut parser = Parser::new(&mut sink);
    let err = parser.feed(&stream).unwrap_err();
    assert!(matches!(err, png_inspect::ParseError::BadChunkOrder { .. }));
}

/// S6 — non-contiguous IDAT: IHDR, IDAT, tEXt, IDAT, IEND.
#[test]
fn s6_non_contiguous_idat() {
    let mut stream = SIGNATURE.to_vec();
    stream.extend(make_chunk(b"IHDR", &ihdr_body(2, 8)));
    stream.extend(make_chunk(b"IDAT", &[0x01]));
    stream.extend(make_chunk(b"tEXt", b"k\0v"));
    stream.extend(make_chunk(b"IDAT", &[0x02]));
    stream.extend(make_chunk(b"IEND", &[]));
    let mut sink = CollectingSink::default();
    let mut parser = Parser::new(&mut sink);
    let err = parser.feed(&stream).unwrap_err();
    assert!(matches!(err, png_inspect::ParseError::BadChunkOrder { .. }));
}
