//! Typed view of the link-layer control byte.
//!
//! Bit layout: bit 7 DIR, bit 6 PRM, bit 5 FCB (primary) or reserved zero
//! (secondary), bit 4 FCV (primary) or DFC (secondary), bits 3..0 the
//! function code. FCV is fully determined by the function code, so the
//! typed form never stores it.

use crate::constants::{PrimaryFunction, SecondaryFunction};
use crate::error::HeaderError;

pub(crate) const DIR_BIT: u8 = 0x80;
pub(crate) const PRM_BIT: u8 = 0x40;
/// Bit 5: FCB in primary frames, reserved zero in secondary frames.
pub(crate) const FCB_BIT: u8 = 0x20;
/// Bit 4: FCV in primary frames, DFC in secondary frames.
pub(crate) const FCV_BIT: u8 = 0x10;
pub(crate) const FNC_MASK: u8 = 0x0F;

/// Physical direction of a frame. DIR set means the frame travels from the
/// master station.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Direction {
    FromOutstation = 0,
    FromMaster = 1,
}

impl Direction {
    pub const fn from_bit(bit: bool) -> Self {
        if bit {
            Direction::FromMaster
        } else {
            Direction::FromOutstation
        }
    }

    pub const fn bit(self) -> bool {
        matches!(self, Direction::FromMaster)
    }
}

/// Primary or secondary role of a frame, with the role-specific bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameType {
    /// Initiating frame. FCV on the wire is derived from the function code.
    Primary {
        fcb: bool,
        function: PrimaryFunction,
    },
    /// Responding frame. Bit 5 is reserved and must be zero.
    Secondary {
        dfc: bool,
        function: SecondaryFunction,
    },
}

/// Decoded control byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlField {
    pub direction: Direction,
    pub frame_type: FrameType,
}

impl ControlField {
    /// Decodes and validates a control byte.
    ///
    /// Checks run in order: function code legality for the frame's role,
    /// then FCV consistency (primary) or the reserved bit (secondary).
    pub fn from_byte(byte: u8) -> Result<Self, HeaderError> {
        let direction = Direction::from_bit(byte & DIR_BIT != 0);
        let code = byte & FNC_MASK;

        let frame_type = if byte & PRM_BIT != 0 {
            let function = PrimaryFunction::from_u8(code)?;
            let fcv = byte & FCV_BIT != 0;
            if fcv != function.fcv_required() {
                return Err(HeaderError::FcvMismatch { code, fcv });
            }
            FrameType::Primary {
                fcb: byte & FCB_BIT != 0,
                function,
            }
        } else {
            let function = SecondaryFunction::from_u8(code)?;
            if byte & FCB_BIT != 0 {
                return Err(HeaderError::ReservedBitSet);
            }
            FrameType::Secondary {
                dfc: byte & FCV_BIT != 0,
                function,
            }
        };

        Ok(Self {
            direction,
            frame_type,
        })
    }

    /// Encodes the control byte, stamping FCV from the function code.
    pub fn to_byte(&self) -> u8 {
        let mut byte = 0u8;
        if self.direction.bit() {
            byte |= DIR_BIT;
        }
        match self.frame_type {
            FrameType::Primary { fcb, function } => {
                byte |= PRM_BIT;
                if fcb {
                    byte |= FCB_BIT;
                }
                if function.fcv_required() {
                    byte |= FCV_BIT;
                }
                byte |= function as u8;
            }
            FrameType::Secondary { dfc, function } => {
                if dfc {
                    byte |= FCV_BIT;
                }
                byte |= function as u8;
            }
        }
        byte
    }

    pub const fn is_primary(&self) -> bool {
        matches!(self.frame_type, FrameType::Primary { .. })
    }

    pub const fn function_code(&self) -> u8 {
        match self.frame_type {
            FrameType::Primary { function, .. } => function as u8,
            FrameType::Secondary { function, .. } => function as u8,
        }
    }
}
