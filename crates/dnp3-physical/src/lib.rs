//! Physical-layer collaborators for the DNP3 link layer.
//!
//! This crate provides the [`Medium`] trait implemented by byte transports,
//! a streaming [`FrameAccumulator`] that extracts complete frames from raw
//! byte feeds, and an in-memory [`LoopbackMedium`] pair for tests and demos.

pub mod accumulator;
pub mod error;
pub mod loopback;
pub mod testing;
pub mod traits;

pub use accumulator::FrameAccumulator;
pub use error::MediumError;
pub use loopback::LoopbackMedium;
pub use traits::Medium;
