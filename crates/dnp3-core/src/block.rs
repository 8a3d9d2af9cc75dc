//! Checksummed block, the unit every frame is tiled from.
//!
//! A block carries 1 to 16 content bytes followed by their CRC-16/DNP
//! checksum stored little-endian, so a block occupies 3 to 18 wire bytes.
//! Each block remembers whether its stored checksum has been verified;
//! any content mutation drops that knowledge.

use alloc::vec::Vec;

use crate::constants::{
    BLOCK_CONTENT_MAX, BLOCK_CONTENT_MIN, BLOCK_CRC_LEN, BLOCK_WIRE_MAX, BLOCK_WIRE_MIN,
};
use crate::crc;
use crate::error::{BlockError, CrcError};

/// What is known about a block's stored checksum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrcStatus {
    /// Nothing checked yet, or the content changed since the last check.
    Unvalidated,
    Valid,
    Invalid(CrcError),
}

impl CrcStatus {
    pub const fn is_valid(&self) -> bool {
        matches!(self, CrcStatus::Valid)
    }
}

/// One content-plus-checksum unit of a frame.
#[derive(Debug, Clone)]
pub struct Block {
    /// Content bytes followed by the two checksum bytes.
    buf: Vec<u8>,
    content_len: usize,
    crc_status: CrcStatus,
}

impl Block {
    /// Allocates an outbound block with `content_len` zeroed content bytes
    /// and a zeroed checksum.
    pub fn create(content_len: usize) -> Result<Self, BlockError> {
        if !(BLOCK_CONTENT_MIN..=BLOCK_CONTENT_MAX).contains(&content_len) {
            return Err(BlockError::ContentLength {
                actual: content_len,
            });
        }
        Ok(Self::zeroed(content_len))
    }

    /// Adopts a caller-supplied wire buffer of exactly `content_len + 2`
    /// bytes as an outbound block. The stored checksum is taken as-is and
    /// left unvalidated.
    pub fn create_with(content_len: usize, buffer: &[u8]) -> Result<Self, BlockError> {
        if !(BLOCK_CONTENT_MIN..=BLOCK_CONTENT_MAX).contains(&content_len) {
            return Err(BlockError::ContentLength {
                actual: content_len,
            });
        }
        if buffer.len() != content_len + BLOCK_CRC_LEN {
            return Err(BlockError::SizeMismatch {
                expected: content_len + BLOCK_CRC_LEN,
                actual: buffer.len(),
            });
        }
        Ok(Self::from_chunk(buffer))
    }

    /// Parses one received wire chunk laid out as content followed by its
    /// checksum, and records the checksum verdict immediately.
    ///
    /// A checksum mismatch does not prevent construction; the status
    /// carries the reason.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BlockError> {
        if !(BLOCK_WIRE_MIN..=BLOCK_WIRE_MAX).contains(&bytes.len()) {
            return Err(BlockError::BufferLength {
                actual: bytes.len(),
            });
        }
        Ok(Self::from_chunk_validated(bytes))
    }

    /// Infallible constructor for content lengths already known to be in
    /// range.
    pub(crate) fn zeroed(content_len: usize) -> Self {
        let mut buf = Vec::with_capacity(content_len + BLOCK_CRC_LEN);
        buf.resize(content_len + BLOCK_CRC_LEN, 0);
        Self {
            buf,
            content_len,
            crc_status: CrcStatus::Unvalidated,
        }
    }

    /// Infallible constructor for wire chunks whose shape was already
    /// verified by the caller.
    pub(crate) fn from_chunk(chunk: &[u8]) -> Self {
        Self {
            buf: chunk.to_vec(),
            content_len: chunk.len() - BLOCK_CRC_LEN,
            crc_status: CrcStatus::Unvalidated,
        }
    }

    /// Like [`Block::from_chunk`], but records the checksum verdict
    /// immediately.
    pub(crate) fn from_chunk_validated(chunk: &[u8]) -> Self {
        let mut block = Self::from_chunk(chunk);
        let _ = block.crc_validate();
        block
    }

    pub fn content(&self) -> &[u8] {
        &self.buf[..self.content_len]
    }

    /// Mutable view of the content bytes. The checksum status drops back to
    /// unvalidated because the caller may change what it covers.
    pub(crate) fn content_mut(&mut self) -> &mut [u8] {
        self.crc_status = CrcStatus::Unvalidated;
        &mut self.buf[..self.content_len]
    }

    /// Replaces the content with a same-length slice.
    pub fn write_content(&mut self, content: &[u8]) -> Result<(), BlockError> {
        if content.len() != self.content_len {
            return Err(BlockError::SizeMismatch {
                expected: self.content_len,
                actual: content.len(),
            });
        }
        self.content_mut().copy_from_slice(content);
        Ok(())
    }

    /// Recomputes the checksum over the current content, stores it, and
    /// returns it.
    pub fn crc_update(&mut self) -> u16 {
        let computed = crc::crc16(&self.buf[..self.content_len]);
        let crc_bytes = computed.to_le_bytes();
        self.buf[self.content_len] = crc_bytes[0];
        self.buf[self.content_len + 1] = crc_bytes[1];
        self.crc_status = CrcStatus::Valid;
        computed
    }

    /// Compares the stored checksum against one recomputed over the current
    /// content and records the verdict.
    pub fn crc_validate(&mut self) -> Result<(), CrcError> {
        let computed = crc::crc16(&self.buf[..self.content_len]);
        let stored = self.crc_value();
        if stored == computed {
            self.crc_status = CrcStatus::Valid;
            Ok(())
        } else {
            let error = CrcError::Mismatch { stored, computed };
            self.crc_status = CrcStatus::Invalid(error.clone());
            Err(error)
        }
    }

    /// The checksum currently stored after the content, little-endian.
    pub fn crc_value(&self) -> u16 {
        u16::from_le_bytes([self.buf[self.content_len], self.buf[self.content_len + 1]])
    }

    pub fn crc_status(&self) -> &CrcStatus {
        &self.crc_status
    }

    pub fn content_len(&self) -> usize {
        self.content_len
    }

    /// Total wire footprint, content plus checksum.
    pub fn wire_len(&self) -> usize {
        self.buf.len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }
}
