use crate::chunk_type::ChunkType;

#[test]
fn accepts_letters_only() {
    assert!(ChunkType::is_valid_bytes(b"IHDR"));
    assert!(ChunkType::is_valid_bytes(b"ruSt"));
    assert!(!ChunkType::is_valid_bytes(b"Ru1t"));
}

#[test]
fn property_bits_read_from_case() {
    let critical = ChunkType::try_from(*b"IHDR").unwrap();
    assert!(critical.is_critical());
    assert!(critical.is_public());
    assert!(critical.is_reserved_bit_valid());
    assert!(!critical.is_safe_to_copy());

    let ancillary = ChunkType::try_from(*b"ruSt").unwrap();
    assert!(!ancillary.is_critical());
    assert!(!ancillary.is_public());
    assert!(!ancillary.is_reserved_bit_valid());
    assert!(ancillary.is_safe_to_copy());
}

#[test]
fn rejects_non_letter_bytes() {
    let err = ChunkType::try_from(*b"RuS1").unwrap_err();
    assert!(matches!(err, crate::error::ParseError::BadChunkType { kind } if kind == *b"RuS1"));
}

#[test]
fn displays_as_ascii() {
    let kind = ChunkType::try_from(*b"IDAT").unwrap();
    assert_eq!(kind.to_string(), "IDAT");
}
