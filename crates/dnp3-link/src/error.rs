//! Error types for the link session layer.

use dnp3_core::{FrameError, HeaderError};

/// Errors that can occur while building or accepting frames.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    #[error("frame error: {0}")]
    Frame(#[from] FrameError),
    #[error("header error: {0}")]
    Header(#[from] HeaderError),
    #[error("station address {0} is reserved for broadcast")]
    ReservedAddress(u16),
    #[error("local and peer station addresses are both {0}")]
    AddressCollision(u16),
    #[error("frame for station {destination} ignored by station {local}")]
    NotAddressed { destination: u16, local: u16 },
    #[error("function code {function} does not carry user data")]
    UnexpectedPayload { function: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use dnp3_core::FrameError;

    #[test]
    fn error_display_variants() {
        let frame = LinkError::Frame(FrameError::TotalLength { actual: 9 });
        assert!(frame.to_string().contains("frame error"));

        let reserved = LinkError::ReservedAddress(0xFFFF);
        assert!(reserved.to_string().contains("65535"));
        assert!(reserved.to_string().contains("broadcast"));

        let collision = LinkError::AddressCollision(7);
        assert!(collision.to_string().contains("both 7"));

        let filtered = LinkError::NotAddressed {
            destination: 9,
            local: 1,
        };
        assert!(filtered.to_string().contains("station 9"));
        assert!(filtered.to_string().contains("station 1"));

        let payload = LinkError::UnexpectedPayload { function: 0 };
        assert!(payload.to_string().contains("function code 0"));
    }

    #[test]
    fn error_from_frame_error() {
        let source = FrameError::NotBlockAligned {
            total: 11,
            remainder: 1,
        };
        let err: LinkError = source.into();
        assert!(matches!(err, LinkError::Frame(_)));
    }
}
