//! Core medium trait for byte transports that carry link frames.

use dnp3_core::constants::FRAME_MAX_LEN;

use crate::error::MediumError;

/// Byte transport implemented by anything that can carry serialized frames.
///
/// The link layer produces and consumes whole frame buffers; concrete media
/// bridge those buffers to an actual transport. Media that deliver byte
/// streams rather than discrete frames run their reads through a
/// [`FrameAccumulator`](crate::accumulator::FrameAccumulator) first.
pub trait Medium: Send + Sync {
    // -- Identity --

    /// Human-readable name for this medium (e.g. "loopback[a]").
    fn name(&self) -> &str;

    // -- Capabilities --

    /// Whether the medium is currently able to carry frames.
    fn is_ready(&self) -> bool;

    /// Largest frame buffer this medium can carry. Defaults to
    /// `FRAME_MAX_LEN` (292 bytes), the largest legal frame.
    fn max_frame_len(&self) -> usize {
        FRAME_MAX_LEN
    }

    // -- I/O --

    /// Transmit one serialized frame.
    fn transmit(&mut self, frame: &[u8]) -> Result<(), MediumError>;

    /// Poll for the next received frame buffer, if one has arrived.
    fn poll_receive(&mut self) -> Result<Option<Vec<u8>>, MediumError>;
}
