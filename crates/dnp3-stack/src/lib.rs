//! Station orchestration for the DNP3 link layer.
//!
//! This crate ties the link session, the medium, and the frame accumulator
//! together, providing configuration, logging, and a runnable [`Station`].

pub mod config;
pub mod error;
pub mod logging;
pub mod station;

pub use config::StackConfig;
pub use error::StackError;
pub use station::{Delivery, Station};
