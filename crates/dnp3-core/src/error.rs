//! Error types for the dnp3-core crate.

use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrcError {
    ContentLength { actual: usize },
    BufferTooShort { min: usize, actual: usize },
    Mismatch { stored: u16, computed: u16 },
}

impl fmt::Display for CrcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrcError::ContentLength { actual } => {
                write!(f, "crc input must be 1-16 bytes, got {actual}")
            }
            CrcError::BufferTooShort { min, actual } => {
                write!(
                    f,
                    "crc check buffer too short: need at least {min} bytes, got {actual}"
                )
            }
            CrcError::Mismatch { stored, computed } => {
                write!(
                    f,
                    "crc mismatch: stored 0x{stored:04x}, computed 0x{computed:04x}"
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CrcError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockError {
    ContentLength { actual: usize },
    BufferLength { actual: usize },
    SizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for BlockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockError::ContentLength { actual } => {
                write!(f, "block content must be 1-16 bytes, got {actual}")
            }
            BlockError::BufferLength { actual } => {
                write!(f, "block buffer must be 3-18 bytes, got {actual}")
            }
            BlockError::SizeMismatch { expected, actual } => {
                write!(f, "buffer size mismatch: expected {expected}, got {actual}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BlockError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    SourceBroadcast,
    Collision { address: u16 },
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressError::SourceBroadcast => {
                write!(f, "source address may not be the broadcast address")
            }
            AddressError::Collision { address } => {
                write!(f, "destination and source are both {address}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AddressError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderError {
    BlockShape { actual: usize },
    StartMark { found: [u8; 2] },
    LenBelowFloor { min: u8, actual: u8 },
    InvalidFieldAccess { field: &'static str, primary: bool },
    BadFunctionCode { primary: bool, code: u8 },
    FcvMismatch { code: u8, fcv: bool },
    ReservedBitSet,
    Address(AddressError),
}

impl fmt::Display for HeaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderError::BlockShape { actual } => {
                write!(
                    f,
                    "link header requires an 8-byte block content, got {actual}"
                )
            }
            HeaderError::StartMark { found } => {
                write!(
                    f,
                    "bad start mark: expected 0x05 0x64, found 0x{:02x} 0x{:02x}",
                    found[0], found[1]
                )
            }
            HeaderError::LenBelowFloor { min, actual } => {
                write!(f, "declared length {actual} below minimum {min}")
            }
            HeaderError::InvalidFieldAccess { field, primary } => {
                let kind = if *primary { "primary" } else { "secondary" };
                write!(f, "field {field} is not defined for a {kind} frame")
            }
            HeaderError::BadFunctionCode { primary, code } => {
                let kind = if *primary { "primary" } else { "secondary" };
                write!(f, "function code {code} is not valid for a {kind} frame")
            }
            HeaderError::FcvMismatch { code, fcv } => {
                write!(
                    f,
                    "fcv bit set to {fcv} is inconsistent with function code {code}"
                )
            }
            HeaderError::ReservedBitSet => {
                write!(f, "reserved bit 5 must be zero on a secondary frame")
            }
            HeaderError::Address(e) => write!(f, "address error: {e}"),
        }
    }
}

impl From<AddressError> for HeaderError {
    fn from(e: AddressError) -> Self {
        HeaderError::Address(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HeaderError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    TotalLength { actual: usize },
    SizeMismatch { expected: usize, actual: usize },
    NotBlockAligned { total: usize, remainder: usize },
    PayloadTooLarge { max: usize, actual: usize },
    BlockIntegrity { index: usize, source: CrcError },
    ContentLengthMismatch { declared: usize, actual: usize },
    Header(HeaderError),
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::TotalLength { actual } => {
                write!(f, "frame length must be 10-292 bytes, got {actual}")
            }
            FrameError::SizeMismatch { expected, actual } => {
                write!(f, "buffer size mismatch: expected {expected}, got {actual}")
            }
            FrameError::NotBlockAligned { total, remainder } => {
                write!(
                    f,
                    "frame length {total} cannot be tiled into blocks ({remainder} trailing bytes)"
                )
            }
            FrameError::PayloadTooLarge { max, actual } => {
                write!(f, "payload of {actual} bytes exceeds the {max}-byte capacity")
            }
            FrameError::BlockIntegrity { index, source } => {
                write!(f, "block {index} failed integrity check: {source}")
            }
            FrameError::ContentLengthMismatch { declared, actual } => {
                write!(
                    f,
                    "declared content length {declared} but frame carries {actual}"
                )
            }
            FrameError::Header(e) => write!(f, "header error: {e}"),
        }
    }
}

impl From<HeaderError> for FrameError {
    fn from(e: HeaderError) -> Self {
        FrameError::Header(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FrameError {}
