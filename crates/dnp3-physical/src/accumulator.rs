//! Streaming frame accumulator for raw byte feeds.
//!
//! Provides a stateful buffer that accumulates bytes and extracts complete
//! link frames. Media that deliver byte streams rather than discrete frames
//! run their reads through this before handing frames to the link layer.

use dnp3_core::constants::{HEADER_BLOCK_LEN, START_BYTES};
use dnp3_core::{crc, wire_len_for_declared};
use tracing::trace;

/// Stateful accumulator that buffers stream data and extracts complete
/// frames opening with the 0x05 0x64 start mark.
///
/// Recovery rules:
/// - Scans forward to the next start mark, discarding leading garbage
/// - Trusts the declared length field only after block 0's checksum passes
/// - Advances a single byte past a candidate whose block 0 fails, so a
///   corrupted length field cannot desynchronize the stream
pub struct FrameAccumulator {
    buffer: Vec<u8>,
}

impl FrameAccumulator {
    pub fn new() -> Self {
        Self {
            buffer: Vec::with_capacity(4096),
        }
    }

    /// Feed new data from the stream and extract all complete frames.
    ///
    /// Returns each complete frame as its full wire buffer, start mark and
    /// checksums included. Incomplete candidates carry over to later feeds.
    pub fn feed(&mut self, data: &[u8]) -> Vec<Vec<u8>> {
        self.buffer.extend_from_slice(data);

        let mut frames = Vec::new();
        let mut start = 0;

        loop {
            match find_start_mark(&self.buffer[start..]) {
                Some(offset) => start += offset,
                None => {
                    // Keep a trailing 0x05 in case its 0x64 arrives in the
                    // next feed; everything else before it is garbage.
                    let tail = &self.buffer[start..];
                    start = if tail.last() == Some(&START_BYTES[0]) {
                        self.buffer.len() - 1
                    } else {
                        self.buffer.len()
                    };
                    break;
                }
            }

            // Block 0 must be fully buffered before anything can be trusted.
            if self.buffer.len() - start < HEADER_BLOCK_LEN {
                break;
            }

            let block0 = &self.buffer[start..start + HEADER_BLOCK_LEN];
            if let Err(e) = crc::check(block0) {
                trace!("candidate at offset {start} failed the block 0 checksum: {e}");
                start += 1;
                continue;
            }

            // Byte 2 of block 0 is the declared length, checksummed above.
            let declared = block0[2];
            let Some(total) = wire_len_for_declared(declared) else {
                trace!("candidate at offset {start} declares length {declared} below the floor");
                start += 1;
                continue;
            };

            if self.buffer.len() - start < total {
                break;
            }

            frames.push(self.buffer[start..start + total].to_vec());
            start += total;
        }

        self.buffer = self.buffer[start..].to_vec();
        frames
    }

    /// Number of bytes currently buffered awaiting more data.
    pub fn buffered_len(&self) -> usize {
        self.buffer.len()
    }

    /// Discard all buffered bytes.
    pub fn reset(&mut self) {
        self.buffer.clear();
    }
}

impl Default for FrameAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Position of the first 0x05 0x64 pair in `data`, if one is present.
fn find_start_mark(data: &[u8]) -> Option<usize> {
    data.windows(2).position(|pair| pair == START_BYTES)
}
