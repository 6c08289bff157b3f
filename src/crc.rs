//! # CRC engine
//! The PNG-specified CRC-32: reflected polynomial `0xEDB88320`, register
//! initialized to all-ones, result XORed with all-ones on completion
//! (PNG 1.2 §D). Stateless and reentrant: any byte pattern is valid input.
//!
//! The table is generated at compile time the same way the reference CRC
//! implementation in the PNG specification's appendix does it, rather than
//! reaching for a hashing crate: the public contract here is a chainable
//! `update(register, bytes)` step (`crc32_chunk` folds in the type code and
//! body as two separate calls), and hand-rolling the table keeps that
//! raw-register chaining unambiguous.

const CRC_TABLE: [u32; 256] = generate_table();

const fn generate_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let poly: u32 = 0xEDB8_8320;
    let mut n = 0usize;
    while n < 256 {
        let mut c = n as u32;
        let mut k = 0;
        while k < 8 {
            c = if c & 1 != 0 { poly ^ (c >> 1) } else { c >> 1 };
            k += 1;
        }
        table[n] = c;
        n += 1;
    }
    table
}

/// Runs the CRC-32 update step over `bytes` starting from the raw register
/// value `initial`, without applying the final XOR. Chainable: the result
/// can be fed back in as `initial` for a subsequent call, which is exactly
/// how [`crc32_chunk`] folds in a chunk's type code and then its body.
pub fn crc32(initial: u32, bytes: &[u8]) -> u32 {
    let mut crc = initial;
    for &byte in bytes {
        let index = ((crc ^ byte as u32) & 0xFF) as usize;
        crc = CRC_TABLE[index] ^ (crc >> 8);
    }
    crc
}

/// Computes the CRC stored alongside a chunk: `final_xor(update(update(
/// 0xFFFFFFFF, type_code), body))`, the composition PNG requires.
pub fn crc32_chunk(type_code: [u8; 4], body: &[u8]) -> u32 {
    let register = crc32(crc32(0xFFFF_FFFF, &type_code), body);
    register ^ 0xFFFF_FFFF
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_check_value() {
        // The canonical CRC-32 check value for the ASCII string "123456789".
        let register = crc32(0xFFFF_FFFF, b"123456789");
        assert_eq!(register ^ 0xFFFF_FFFF, 0xCBF4_3926);
    }

    #[test]
    fn empty_input_is_zero() {
        assert_eq!(crc32_chunk(*b"IEND", &[]), {
            let r = crc32(0xFFFF_FFFF, b"IEND");
            r ^ 0xFFFF_FFFF
        });
    }

    #[test]
    fn chaining_matches_one_shot() {
        let one_shot = crc32(0xFFFF_FFFF, b"IHDRhello");
        let chained = crc32(crc32(0xFFFF_FFFF, b"IHDR"), b"hello");
        assert_eq!(one_shot, chained);
    }
}
