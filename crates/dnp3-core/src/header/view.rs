//! Field-level view over a frame's block 0.
//!
//! Block 0 content is eight bytes: the two start mark bytes, the length
//! field, the control byte, then destination and source addresses stored
//! little-endian. [`LinkHeader`] borrows the block mutably so every field
//! write flows through the block's checksum bookkeeping.

use crate::block::Block;
use crate::constants::{
    BROADCAST_ADDRESS, HEADER_CONTENT_LEN, LEN_FIELD_MIN, PrimaryFunction, SecondaryFunction,
    START_BYTES,
};
use crate::error::{AddressError, HeaderError};
use crate::header::control::{
    ControlField, DIR_BIT, Direction, FCB_BIT, FCV_BIT, FNC_MASK, PRM_BIT,
};
use crate::types::StationAddress;

pub(crate) const OFFSET_LEN: usize = 2;
const OFFSET_CONTROL: usize = 3;
const OFFSET_DST: usize = 4;
const OFFSET_SRC: usize = 6;

/// Checks the two start mark bytes of a header content slice.
pub(crate) fn check_start_mark(content: &[u8]) -> Result<(), HeaderError> {
    if content[0] != START_BYTES[0] || content[1] != START_BYTES[1] {
        return Err(HeaderError::StartMark {
            found: [content[0], content[1]],
        });
    }
    Ok(())
}

/// Validates the header fields of a block 0 content slice.
///
/// Checks run in order: length floor, control byte (function code legality,
/// FCV consistency or reserved bit), source not broadcast, destination
/// distinct from source. The start mark is checked separately because a
/// frame lifted out of a byte stream has already matched it.
pub(crate) fn validate_content(content: &[u8]) -> Result<(), HeaderError> {
    if content[OFFSET_LEN] < LEN_FIELD_MIN {
        return Err(HeaderError::LenBelowFloor {
            min: LEN_FIELD_MIN,
            actual: content[OFFSET_LEN],
        });
    }
    ControlField::from_byte(content[OFFSET_CONTROL])?;
    let destination = u16::from_le_bytes([content[OFFSET_DST], content[OFFSET_DST + 1]]);
    let source = u16::from_le_bytes([content[OFFSET_SRC], content[OFFSET_SRC + 1]]);
    if source == BROADCAST_ADDRESS {
        return Err(AddressError::SourceBroadcast.into());
    }
    if destination == source {
        return Err(AddressError::Collision {
            address: destination,
        }
        .into());
    }
    Ok(())
}

/// Mutable field view over a header block.
#[derive(Debug)]
pub struct LinkHeader<'a> {
    block: &'a mut Block,
}

impl<'a> LinkHeader<'a> {
    /// Opens a view for building an outgoing header and writes the start
    /// mark. The block must carry exactly eight content bytes.
    pub fn for_send(block: &'a mut Block) -> Result<Self, HeaderError> {
        if block.content_len() != HEADER_CONTENT_LEN {
            return Err(HeaderError::BlockShape {
                actual: block.content_len(),
            });
        }
        block.content_mut()[..START_BYTES.len()].copy_from_slice(&START_BYTES);
        Ok(Self { block })
    }

    /// Opens a view over a received header block, requiring the start mark
    /// to already be in place.
    pub fn from_block(block: &'a mut Block) -> Result<Self, HeaderError> {
        if block.content_len() != HEADER_CONTENT_LEN {
            return Err(HeaderError::BlockShape {
                actual: block.content_len(),
            });
        }
        check_start_mark(block.content())?;
        Ok(Self { block })
    }

    fn byte(&self, offset: usize) -> u8 {
        self.block.content()[offset]
    }

    fn control_bit(&self, mask: u8) -> bool {
        self.byte(OFFSET_CONTROL) & mask != 0
    }

    fn set_control_bit(&mut self, mask: u8, value: bool) {
        let content = self.block.content_mut();
        if value {
            content[OFFSET_CONTROL] |= mask;
        } else {
            content[OFFSET_CONTROL] &= !mask;
        }
    }

    /// The declared length field: control, address, and payload bytes.
    pub fn len(&self) -> u8 {
        self.byte(OFFSET_LEN)
    }

    /// Writes the length field, enforcing the floor of 5. The ceiling is
    /// carried by the field's width.
    pub fn set_len(&mut self, len: u8) -> Result<(), HeaderError> {
        if len < LEN_FIELD_MIN {
            return Err(HeaderError::LenBelowFloor {
                min: LEN_FIELD_MIN,
                actual: len,
            });
        }
        self.block.content_mut()[OFFSET_LEN] = len;
        Ok(())
    }

    pub fn control_byte(&self) -> u8 {
        self.byte(OFFSET_CONTROL)
    }

    /// Decodes the control byte into its typed form.
    pub fn control(&self) -> Result<ControlField, HeaderError> {
        ControlField::from_byte(self.control_byte())
    }

    /// Writes a typed control field into the control byte.
    pub fn set_control(&mut self, control: &ControlField) {
        self.block.content_mut()[OFFSET_CONTROL] = control.to_byte();
    }

    pub fn direction(&self) -> Direction {
        Direction::from_bit(self.control_bit(DIR_BIT))
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.set_control_bit(DIR_BIT, direction.bit());
    }

    pub fn is_primary(&self) -> bool {
        self.control_bit(PRM_BIT)
    }

    /// Sets the primary bit. Dropping to secondary clears bit 5, which is
    /// reserved in that role.
    pub fn set_primary(&mut self, primary: bool) {
        self.set_control_bit(PRM_BIT, primary);
        if !primary {
            self.set_control_bit(FCB_BIT, false);
        }
    }

    /// The frame count bit. Only primary frames carry one.
    pub fn fcb(&self) -> Result<bool, HeaderError> {
        if !self.is_primary() {
            return Err(HeaderError::InvalidFieldAccess {
                field: "fcb",
                primary: false,
            });
        }
        Ok(self.control_bit(FCB_BIT))
    }

    pub fn set_fcb(&mut self, fcb: bool) -> Result<(), HeaderError> {
        if !self.is_primary() {
            return Err(HeaderError::InvalidFieldAccess {
                field: "fcb",
                primary: false,
            });
        }
        self.set_control_bit(FCB_BIT, fcb);
        Ok(())
    }

    /// The frame count valid bit as stored. Only primary frames carry one.
    pub fn fcv(&self) -> Result<bool, HeaderError> {
        if !self.is_primary() {
            return Err(HeaderError::InvalidFieldAccess {
                field: "fcv",
                primary: false,
            });
        }
        Ok(self.control_bit(FCV_BIT))
    }

    /// The data flow control bit. Only secondary frames carry one.
    pub fn dfc(&self) -> Result<bool, HeaderError> {
        if self.is_primary() {
            return Err(HeaderError::InvalidFieldAccess {
                field: "dfc",
                primary: true,
            });
        }
        Ok(self.control_bit(FCV_BIT))
    }

    pub fn set_dfc(&mut self, dfc: bool) -> Result<(), HeaderError> {
        if self.is_primary() {
            return Err(HeaderError::InvalidFieldAccess {
                field: "dfc",
                primary: true,
            });
        }
        self.set_control_bit(FCV_BIT, dfc);
        Ok(())
    }

    pub fn function_code(&self) -> u8 {
        self.byte(OFFSET_CONTROL) & FNC_MASK
    }

    /// Writes a function code legal for the frame's current role. On a
    /// primary frame the FCV bit is stamped from the code.
    pub fn set_function_code(&mut self, code: u8) -> Result<(), HeaderError> {
        if self.is_primary() {
            let function = PrimaryFunction::from_u8(code)?;
            let content = self.block.content_mut();
            content[OFFSET_CONTROL] &= !(FNC_MASK | FCV_BIT);
            content[OFFSET_CONTROL] |= code;
            if function.fcv_required() {
                content[OFFSET_CONTROL] |= FCV_BIT;
            }
        } else {
            SecondaryFunction::from_u8(code)?;
            let content = self.block.content_mut();
            content[OFFSET_CONTROL] &= !FNC_MASK;
            content[OFFSET_CONTROL] |= code;
        }
        Ok(())
    }

    pub fn destination(&self) -> StationAddress {
        StationAddress::from_le_bytes([self.byte(OFFSET_DST), self.byte(OFFSET_DST + 1)])
    }

    /// Writes the destination address, rejecting a collision with the
    /// source currently stored. [`LinkHeader::set_addresses`] sets the pair
    /// atomically.
    pub fn set_destination(&mut self, destination: StationAddress) -> Result<(), HeaderError> {
        if destination == self.source() {
            return Err(AddressError::Collision {
                address: destination.raw(),
            }
            .into());
        }
        self.block.content_mut()[OFFSET_DST..OFFSET_DST + 2]
            .copy_from_slice(&destination.to_le_bytes());
        Ok(())
    }

    pub fn source(&self) -> StationAddress {
        StationAddress::from_le_bytes([self.byte(OFFSET_SRC), self.byte(OFFSET_SRC + 1)])
    }

    /// Writes the source address, which is never broadcast and never equal
    /// to the destination currently stored.
    pub fn set_source(&mut self, source: StationAddress) -> Result<(), HeaderError> {
        if source.is_broadcast() {
            return Err(AddressError::SourceBroadcast.into());
        }
        if source == self.destination() {
            return Err(AddressError::Collision {
                address: source.raw(),
            }
            .into());
        }
        self.block.content_mut()[OFFSET_SRC..OFFSET_SRC + 2].copy_from_slice(&source.to_le_bytes());
        Ok(())
    }

    /// Writes both addresses after validating them as a pair. This is the
    /// setter to use on a freshly zeroed header, where the single-field
    /// setters would compare against stale zero bytes.
    pub fn set_addresses(
        &mut self,
        destination: StationAddress,
        source: StationAddress,
    ) -> Result<(), HeaderError> {
        if source.is_broadcast() {
            return Err(AddressError::SourceBroadcast.into());
        }
        if destination == source {
            return Err(AddressError::Collision {
                address: destination.raw(),
            }
            .into());
        }
        let content = self.block.content_mut();
        content[OFFSET_DST..OFFSET_DST + 2].copy_from_slice(&destination.to_le_bytes());
        content[OFFSET_SRC..OFFSET_SRC + 2].copy_from_slice(&source.to_le_bytes());
        Ok(())
    }

    /// Runs the full field validation over the current header content.
    pub fn validate(&self) -> Result<(), HeaderError> {
        validate_content(self.block.content())
    }

    /// Closes the view and stamps the block's checksum, returning it.
    pub fn finalize(self) -> u16 {
        self.block.crc_update()
    }
}
