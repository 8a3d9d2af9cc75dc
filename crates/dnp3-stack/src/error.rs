//! Error types for the station orchestrator.

use dnp3_link::LinkError;
use dnp3_physical::MediumError;

/// Errors that can occur during station operation.
#[derive(Debug, thiserror::Error)]
pub enum StackError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("link error: {0}")]
    Link(#[from] LinkError),
    #[error("medium error: {0}")]
    Medium(#[from] MediumError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("medium {name} cannot carry this link: {reason}")]
    IncompatibleMedium { name: String, reason: String },
}
