//! Test vector loading infrastructure for the DNP3 link layer.
//!
//! Each module corresponds to a single JSON test vector file and provides:
//! - Typed structs matching the JSON schema
//! - A `load()` function that deserializes the embedded JSON via `include_str!`
//!
//! # Usage
//!
//! ```rust
//! let vectors = dnp3_test_vectors::crc::load();
//! for v in &vectors.calculate_vectors {
//!     let content = hex::decode(&v.content).unwrap();
//!     // ... test the checksum of `content` against v.crc
//! }
//! ```

#[cfg(feature = "helpers")]
pub mod helpers;

pub mod crc;
pub mod link_frames;

// Re-export top-level vector types for convenience
pub use crc::CrcVectors;
pub use link_frames::LinkFrameVectors;
