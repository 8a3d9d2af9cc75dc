//! Newtype wrapper for link-layer station addresses.

use core::fmt;

use crate::constants::BROADCAST_ADDRESS;

/// A 16-bit link-layer station address, stored little-endian on the wire.
///
/// The type itself is transparent over the full `u16` range; the rules that
/// restrict where an address may appear (a source is never broadcast, a
/// destination never equals the source) are enforced at the header and
/// session seams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub struct StationAddress(pub(crate) u16);

impl StationAddress {
    /// The all-stations broadcast address.
    pub const BROADCAST: StationAddress = StationAddress(BROADCAST_ADDRESS);

    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u16 {
        self.0
    }

    pub const fn is_broadcast(self) -> bool {
        self.0 == BROADCAST_ADDRESS
    }

    pub const fn to_le_bytes(self) -> [u8; 2] {
        self.0.to_le_bytes()
    }

    pub const fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_le_bytes(bytes))
    }
}

impl From<u16> for StationAddress {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<StationAddress> for u16 {
    fn from(address: StationAddress) -> Self {
        address.0
    }
}

impl fmt::Display for StationAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_broadcast() {
            write!(f, "broadcast")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broadcast_is_detected() {
        assert!(StationAddress::BROADCAST.is_broadcast());
        assert!(StationAddress::new(0xFFFF).is_broadcast());
        assert!(!StationAddress::new(0xFFFE).is_broadcast());
        assert!(!StationAddress::new(0).is_broadcast());
    }

    #[test]
    fn little_endian_round_trip() {
        let a = StationAddress::new(1024);
        assert_eq!(a.to_le_bytes(), [0x00, 0x04]);
        assert_eq!(StationAddress::from_le_bytes([0x00, 0x04]), a);
    }

    #[test]
    fn display_shows_decimal_or_broadcast() {
        assert_eq!(StationAddress::new(1024).to_string(), "1024");
        assert_eq!(StationAddress::BROADCAST.to_string(), "broadcast");
    }

    #[test]
    fn u16_conversions() {
        let a: StationAddress = 7u16.into();
        assert_eq!(u16::from(a), 7);
    }
}
