//! Shared hex-decoding test helpers.
//!
//! Enable the `helpers` feature to use them.

/// Decode a hex string into a `Vec<u8>`.
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    hex::decode(hex).expect("invalid hex")
}

/// Parse a hex string like "ea82" into a `u16`.
pub fn hex_to_u16(hex: &str) -> u16 {
    u16::from_str_radix(hex, 16).expect("invalid hex u16")
}
