//! Wire geometry constants and function-code enumerations for the DNP3
//! link layer.

use crate::error::HeaderError;

// Frame geometry
pub const START_BYTES: [u8; 2] = [0x05, 0x64];
pub const BLOCK_CONTENT_MIN: usize = 1;
pub const BLOCK_CONTENT_MAX: usize = 16;
pub const BLOCK_CRC_LEN: usize = 2;
pub const BLOCK_WIRE_MIN: usize = BLOCK_CONTENT_MIN + BLOCK_CRC_LEN;
pub const BLOCK_WIRE_MAX: usize = BLOCK_CONTENT_MAX + BLOCK_CRC_LEN;
pub const HEADER_CONTENT_LEN: usize = 8;
pub const HEADER_BLOCK_LEN: usize = HEADER_CONTENT_LEN + BLOCK_CRC_LEN;
pub const FRAME_MIN_LEN: usize = HEADER_BLOCK_LEN;
pub const FRAME_MAX_LEN: usize = 292;

// The len field counts the control byte and both addresses, then every
// payload content byte beyond block 0. Start, len, and CRC bytes are never
// counted.
pub const LEN_FIELD_MIN: u8 = 5;
pub const LEN_FIELD_HEADER_BYTES: usize = 5;
pub const PAYLOAD_MAX: usize = 250;

// Station addressing
pub const MAX_STATION_ADDRESS: u16 = 0xFFFE;
pub const BROADCAST_ADDRESS: u16 = 0xFFFF;

/// Function codes a primary station (`prm=1`) may send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PrimaryFunction {
    ResetLinkStates = 0,
    ResetUserProcess = 1,
    TestLinkStates = 2,
    ConfirmedUserData = 3,
    UnconfirmedUserData = 4,
    RequestLinkStatus = 9,
}

impl PrimaryFunction {
    pub fn from_u8(v: u8) -> Result<Self, HeaderError> {
        match v {
            0 => Ok(PrimaryFunction::ResetLinkStates),
            1 => Ok(PrimaryFunction::ResetUserProcess),
            2 => Ok(PrimaryFunction::TestLinkStates),
            3 => Ok(PrimaryFunction::ConfirmedUserData),
            4 => Ok(PrimaryFunction::UnconfirmedUserData),
            9 => Ok(PrimaryFunction::RequestLinkStatus),
            _ => Err(HeaderError::BadFunctionCode {
                primary: true,
                code: v,
            }),
        }
    }

    /// Whether this function requires the FCV bit. The FCV bit is derived
    /// from the function code, never set independently.
    pub const fn fcv_required(self) -> bool {
        matches!(
            self,
            PrimaryFunction::TestLinkStates | PrimaryFunction::ConfirmedUserData
        )
    }

    /// Whether this function carries user data in the payload blocks.
    pub const fn carries_user_data(self) -> bool {
        matches!(
            self,
            PrimaryFunction::ConfirmedUserData | PrimaryFunction::UnconfirmedUserData
        )
    }
}

/// Function codes a secondary station (`prm=0`) may send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SecondaryFunction {
    Ack = 0,
    Nack = 1,
    LinkStatus = 11,
}

impl SecondaryFunction {
    pub fn from_u8(v: u8) -> Result<Self, HeaderError> {
        match v {
            0 => Ok(SecondaryFunction::Ack),
            1 => Ok(SecondaryFunction::Nack),
            11 => Ok(SecondaryFunction::LinkStatus),
            _ => Err(HeaderError::BadFunctionCode {
                primary: false,
                code: v,
            }),
        }
    }
}
