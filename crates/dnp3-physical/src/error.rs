//! Error types for the physical layer.

/// Errors that can occur during medium operations.
#[derive(Debug, thiserror::Error)]
pub enum MediumError {
    #[error("medium not ready")]
    NotReady,
    #[error("medium closed")]
    Closed,
    #[error("frame of {len} bytes exceeds medium capacity of {max} bytes")]
    FrameTooLarge { len: usize, max: usize },
    #[error("transmit failed: {0}")]
    TransmitFailed(String),
    #[error("receive failed: {0}")]
    ReceiveFailed(String),
}
