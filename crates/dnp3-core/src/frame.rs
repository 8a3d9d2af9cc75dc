//! Whole-frame tiling over checksummed blocks.
//!
//! A frame is block 0 (10 wire bytes holding the 8-byte header content)
//! followed by payload blocks of up to 18 wire bytes each, 10 to 292 bytes
//! in total. A total whose remainder after block 0 is 1 or 2 modulo 18
//! cannot be tiled, because no block fits in fewer than 3 wire bytes.

use alloc::vec::Vec;

use crate::block::Block;
use crate::constants::{
    BLOCK_CONTENT_MAX, BLOCK_CRC_LEN, BLOCK_WIRE_MAX, FRAME_MAX_LEN, FRAME_MIN_LEN,
    HEADER_BLOCK_LEN, HEADER_CONTENT_LEN, LEN_FIELD_HEADER_BYTES, LEN_FIELD_MIN, PAYLOAD_MAX,
};
use crate::crc;
use crate::error::FrameError;
use crate::header::view;

/// The wire length a frame must have to carry the given declared length
/// field, or `None` when the field is below the floor of 5.
///
/// The frame accumulator uses this to know how many bytes to collect once
/// it has seen a header block.
pub fn wire_len_for_declared(len_field: u8) -> Option<usize> {
    if len_field < LEN_FIELD_MIN {
        return None;
    }
    let payload = usize::from(len_field) - LEN_FIELD_HEADER_BYTES;
    let full = payload / BLOCK_CONTENT_MAX;
    let remainder = payload % BLOCK_CONTENT_MAX;
    let mut total = HEADER_BLOCK_LEN + full * BLOCK_WIRE_MAX;
    if remainder > 0 {
        total += remainder + BLOCK_CRC_LEN;
    }
    Some(total)
}

/// Wire size of each block in a frame of `total` bytes, block 0 first.
fn block_wire_sizes(total: usize) -> Result<Vec<usize>, FrameError> {
    let rest = total - HEADER_BLOCK_LEN;
    let full = rest / BLOCK_WIRE_MAX;
    let remainder = rest % BLOCK_WIRE_MAX;
    if remainder == 1 || remainder == 2 {
        return Err(FrameError::NotBlockAligned { total, remainder });
    }
    let mut sizes = Vec::with_capacity(1 + full + usize::from(remainder > 0));
    sizes.push(HEADER_BLOCK_LEN);
    for _ in 0..full {
        sizes.push(BLOCK_WIRE_MAX);
    }
    if remainder > 0 {
        sizes.push(remainder);
    }
    Ok(sizes)
}

fn check_total(total: usize) -> Result<(), FrameError> {
    if !(FRAME_MIN_LEN..=FRAME_MAX_LEN).contains(&total) {
        return Err(FrameError::TotalLength { actual: total });
    }
    Ok(())
}

/// One link-layer frame, owned block by block.
#[derive(Debug, Clone)]
pub struct Frame {
    blocks: Vec<Block>,
}

impl Frame {
    /// Allocates a zeroed outbound frame of `total` wire bytes, sliced into
    /// blocks with status unvalidated.
    pub fn create(total: usize) -> Result<Self, FrameError> {
        check_total(total)?;
        let sizes = block_wire_sizes(total)?;
        let blocks = sizes
            .iter()
            .map(|size| Block::zeroed(size - BLOCK_CRC_LEN))
            .collect();
        Ok(Self { blocks })
    }

    /// Adopts a caller-supplied buffer of exactly `total` bytes as an
    /// outbound frame. Stored checksums are taken as-is and left
    /// unvalidated.
    pub fn create_with(total: usize, buffer: &[u8]) -> Result<Self, FrameError> {
        check_total(total)?;
        if buffer.len() != total {
            return Err(FrameError::SizeMismatch {
                expected: total,
                actual: buffer.len(),
            });
        }
        let blocks = Self::slice_blocks(buffer, Block::from_chunk)?;
        Ok(Self { blocks })
    }

    /// Parses a received wire buffer. Every block records its checksum
    /// verdict immediately; a mismatch does not prevent construction and is
    /// reported by [`Frame::validate`].
    pub fn from_bytes(buffer: &[u8]) -> Result<Self, FrameError> {
        check_total(buffer.len())?;
        let blocks = Self::slice_blocks(buffer, Block::from_chunk_validated)?;
        Ok(Self { blocks })
    }

    /// Builds an outbound frame around a payload of 0 to 250 bytes.
    ///
    /// The payload is sliced left to right into 16-byte content chunks with
    /// the remainder in the final block, and every payload block's checksum
    /// is stamped. Block 0 is left zeroed for the header view to fill and
    /// finalize.
    pub fn assemble(payload: &[u8]) -> Result<Self, FrameError> {
        if payload.len() > PAYLOAD_MAX {
            return Err(FrameError::PayloadTooLarge {
                max: PAYLOAD_MAX,
                actual: payload.len(),
            });
        }
        let mut blocks = Vec::with_capacity(1 + payload.len().div_ceil(BLOCK_CONTENT_MAX));
        blocks.push(Block::zeroed(HEADER_CONTENT_LEN));
        for chunk in payload.chunks(BLOCK_CONTENT_MAX) {
            let mut block = Block::zeroed(chunk.len());
            block.content_mut().copy_from_slice(chunk);
            block.crc_update();
            blocks.push(block);
        }
        Ok(Self { blocks })
    }

    fn slice_blocks(
        buffer: &[u8],
        make: impl Fn(&[u8]) -> Block,
    ) -> Result<Vec<Block>, FrameError> {
        let sizes = block_wire_sizes(buffer.len())?;
        let mut blocks = Vec::with_capacity(sizes.len());
        let mut offset = 0;
        for size in sizes {
            blocks.push(make(&buffer[offset..offset + size]));
            offset += size;
        }
        Ok(blocks)
    }

    /// Checks the whole frame and returns the first violation: each block's
    /// stored checksum in index order, then the start mark and header field
    /// constraints on block 0, then the declared length against the payload
    /// bytes actually carried.
    pub fn validate(&self) -> Result<(), FrameError> {
        for (index, block) in self.blocks.iter().enumerate() {
            crc::check(block.as_bytes())
                .map_err(|source| FrameError::BlockIntegrity { index, source })?;
        }
        let header = self.blocks[0].content();
        view::check_start_mark(header)?;
        view::validate_content(header)?;
        let declared = usize::from(header[view::OFFSET_LEN]);
        let actual = LEN_FIELD_HEADER_BYTES + self.payload_len();
        if declared != actual {
            return Err(FrameError::ContentLengthMismatch { declared, actual });
        }
        Ok(())
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn block_mut(&mut self, index: usize) -> Option<&mut Block> {
        self.blocks.get_mut(index)
    }

    /// Block 0, which the header view binds to.
    pub fn header_block_mut(&mut self) -> &mut Block {
        &mut self.blocks[0]
    }

    /// Total wire footprint across all blocks.
    pub fn total_len(&self) -> usize {
        self.blocks.iter().map(Block::wire_len).sum()
    }

    /// The length field as stored in block 0.
    pub fn declared_len(&self) -> u8 {
        self.blocks[0].content()[view::OFFSET_LEN]
    }

    /// Number of payload content bytes carried by blocks 1 onward.
    pub fn payload_len(&self) -> usize {
        self.blocks[1..].iter().map(Block::content_len).sum()
    }

    /// Concatenated content of blocks 1 onward.
    pub fn payload(&self) -> Vec<u8> {
        let mut payload = Vec::with_capacity(self.payload_len());
        for block in &self.blocks[1..] {
            payload.extend_from_slice(block.content());
        }
        payload
    }

    /// Serializes by concatenating block buffers.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.total_len());
        for block in &self.blocks {
            bytes.extend_from_slice(block.as_bytes());
        }
        bytes
    }
}
