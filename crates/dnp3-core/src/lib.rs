//! Core wire format for the DNP3 link layer.
//!
//! This crate defines the FT3-style frame geometry, the CRC-16/DNP checksum
//! engine, checksummed blocks, whole-frame assembly and validation, and the
//! structured view over the block-0 link header.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod block;
pub mod constants;
pub mod crc;
pub mod error;
pub mod frame;
pub mod header;
pub mod types;

pub use block::{Block, CrcStatus};
pub use constants::{PrimaryFunction, SecondaryFunction};
pub use error::{AddressError, BlockError, CrcError, FrameError, HeaderError};
pub use frame::{wire_len_for_declared, Frame};
pub use header::control::{ControlField, Direction, FrameType};
pub use header::view::LinkHeader;
pub use types::StationAddress;
