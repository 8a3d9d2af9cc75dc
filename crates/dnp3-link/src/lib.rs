//! Link session service for the DNP3 link layer.
//!
//! This crate turns the raw wire format from `dnp3-core` into a
//! conversation: [`LinkSession`] builds addressed frames with the right
//! frame-count-bit sequence and accepts, validates, and filters inbound
//! frames; [`triage`] classifies accepted control fields for the layer
//! above.

pub mod builder;
pub mod error;
pub mod session;
pub mod triage;

pub use builder::FrameBuilder;
pub use error::LinkError;
pub use session::{LinkSession, Received, SessionConfig};
pub use triage::{classify, FrameCategory};
