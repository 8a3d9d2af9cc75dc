//! CRC-16/DNP checksum engine shared by every block on the wire.
//!
//! Parameters: polynomial `0x3d65`, reflected, zero seed, complemented
//! result. The two check bytes are stored little-endian after each block's
//! content.

use crate::constants::{BLOCK_CONTENT_MAX, BLOCK_CONTENT_MIN, BLOCK_CRC_LEN};
use crate::error::CrcError;

/// The CRC-16/DNP polynomial `0x3d65`, bit-reversed for the right-shifting
/// table algorithm.
const REFLECTED_POLY: u16 = 0xA6BC;

const fn build_table() -> [u16; 256] {
    let mut table = [0u16; 256];
    let mut index = 0;
    while index < 256 {
        let mut crc = index as u16;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 1 != 0 {
                (crc >> 1) ^ REFLECTED_POLY
            } else {
                crc >> 1
            };
            bit += 1;
        }
        table[index] = crc;
        index += 1;
    }
    table
}

static CRC_TABLE: [u16; 256] = build_table();

/// Raw table-driven CRC over `data`, without length gating.
pub(crate) fn crc16(data: &[u8]) -> u16 {
    let mut crc = 0u16;
    for &byte in data {
        crc = (crc >> 8) ^ CRC_TABLE[((crc ^ u16::from(byte)) & 0xFF) as usize];
    }
    !crc
}

/// Computes the checksum of one block's content.
///
/// The content must span 1 to 16 bytes, the widest run a single block
/// protects.
pub fn calculate(content: &[u8]) -> Result<u16, CrcError> {
    if content.len() < BLOCK_CONTENT_MIN || content.len() > BLOCK_CONTENT_MAX {
        return Err(CrcError::ContentLength {
            actual: content.len(),
        });
    }
    Ok(crc16(content))
}

/// Verifies a buffer laid out as content followed by its little-endian
/// checksum.
///
/// The trailing two bytes are compared against the checksum recomputed over
/// everything before them.
pub fn check(buffer: &[u8]) -> Result<(), CrcError> {
    if buffer.len() < BLOCK_CONTENT_MIN + BLOCK_CRC_LEN {
        return Err(CrcError::BufferTooShort {
            min: BLOCK_CONTENT_MIN + BLOCK_CRC_LEN,
            actual: buffer.len(),
        });
    }
    let split = buffer.len() - BLOCK_CRC_LEN;
    let computed = calculate(&buffer[..split])?;
    let stored = u16::from_le_bytes([buffer[split], buffer[split + 1]]);
    if stored != computed {
        return Err(CrcError::Mismatch { stored, computed });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_u16(hex: &str) -> u16 {
        u16::from_str_radix(hex, 16).unwrap()
    }

    #[test]
    fn test_table_matches_spot_checks() {
        let v = dnp3_test_vectors::crc::load();
        for spot in &v.table_spot_checks {
            assert_eq!(
                CRC_TABLE[spot.index as usize],
                parse_u16(&spot.value),
                "table entry {}",
                spot.index
            );
        }
    }

    #[test]
    fn test_reflected_polynomial_matches_parameters() {
        let v = dnp3_test_vectors::crc::load();
        assert_eq!(REFLECTED_POLY, parse_u16(&v.parameters.reflected_polynomial));
        // Row 128 of a reflected table is the polynomial itself.
        assert_eq!(CRC_TABLE[128], REFLECTED_POLY);
    }

    #[test]
    fn test_published_check_value() {
        let v = dnp3_test_vectors::crc::load();
        let check_string = v.parameters.check_string.as_bytes();
        assert_eq!(
            calculate(check_string).unwrap(),
            parse_u16(&v.parameters.check_value)
        );
        assert_eq!(calculate(b"123456789").unwrap(), 0xEA82);
    }

    #[test]
    fn test_calculate_matches_test_vectors() {
        let v = dnp3_test_vectors::crc::load();
        for vector in &v.calculate_vectors {
            let content = hex::decode(&vector.content).unwrap();
            assert_eq!(
                calculate(&content).unwrap(),
                parse_u16(&vector.crc),
                "{}",
                vector.description
            );
        }
    }

    #[test]
    fn test_calculate_rejects_out_of_range_content() {
        assert_eq!(
            calculate(&[]),
            Err(CrcError::ContentLength { actual: 0 })
        );
        assert_eq!(
            calculate(&[0u8; 17]),
            Err(CrcError::ContentLength { actual: 17 })
        );
    }

    #[test]
    fn test_check_matches_test_vectors() {
        let v = dnp3_test_vectors::crc::load();
        for vector in &v.check_vectors {
            let buffer = hex::decode(&vector.buffer).unwrap();
            assert_eq!(
                check(&buffer).is_ok(),
                vector.valid,
                "{}",
                vector.description
            );
        }
    }

    #[test]
    fn test_check_rejects_short_buffers() {
        assert_eq!(
            check(&[]),
            Err(CrcError::BufferTooShort { min: 3, actual: 0 })
        );
        assert_eq!(
            check(&[0x05, 0x64]),
            Err(CrcError::BufferTooShort { min: 3, actual: 2 })
        );
    }

    #[test]
    fn test_check_rejects_oversized_content() {
        // 17 content bytes plus 2 check bytes is wider than any block.
        assert_eq!(
            check(&[0u8; 19]),
            Err(CrcError::ContentLength { actual: 17 })
        );
    }

    #[test]
    fn test_check_reports_stored_and_computed() {
        assert_eq!(
            check(&[0x00, 0x00, 0x00]),
            Err(CrcError::Mismatch {
                stored: 0x0000,
                computed: 0xFFFF,
            })
        );
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        /// Bit-at-a-time rendition of the same parameters, kept independent
        /// of the lookup table.
        fn bitwise_reference(data: &[u8]) -> u16 {
            let mut crc = 0u16;
            for &byte in data {
                crc ^= u16::from(byte);
                for _ in 0..8 {
                    crc = if crc & 1 != 0 {
                        (crc >> 1) ^ 0xA6BC
                    } else {
                        crc >> 1
                    };
                }
            }
            !crc
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(256))]

            #[test]
            fn table_agrees_with_bitwise_reference(
                content in proptest::collection::vec(any::<u8>(), 1..=16)
            ) {
                prop_assert_eq!(calculate(&content).unwrap(), bitwise_reference(&content));
            }

            #[test]
            fn appended_checksum_always_verifies(
                content in proptest::collection::vec(any::<u8>(), 1..=16)
            ) {
                let crc = calculate(&content).unwrap();
                let mut buffer = content;
                buffer.extend_from_slice(&crc.to_le_bytes());
                prop_assert!(check(&buffer).is_ok());
            }

            #[test]
            fn any_single_bit_flip_is_detected(
                content in proptest::collection::vec(any::<u8>(), 1..=16),
                bit in any::<proptest::sample::Index>(),
            ) {
                let crc = calculate(&content).unwrap();
                let mut buffer = content;
                buffer.extend_from_slice(&crc.to_le_bytes());
                let bit_index = bit.index(buffer.len() * 8);
                buffer[bit_index / 8] ^= 1 << (bit_index % 8);
                prop_assert!(check(&buffer).is_err());
            }
        }
    }
}
