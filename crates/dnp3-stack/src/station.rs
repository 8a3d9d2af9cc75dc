//! Station orchestration: a link session bound to a medium.

use dnp3_core::constants::FRAME_MAX_LEN;
use dnp3_core::{Frame, PrimaryFunction, SecondaryFunction};
use dnp3_link::{classify, FrameCategory, LinkSession, Received};
use dnp3_physical::{FrameAccumulator, Medium};

use crate::error::StackError;

/// An accepted inbound frame together with its handling category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub received: Received,
    pub category: FrameCategory,
}

/// A link session bound to a medium.
///
/// Outbound frames built by the session go straight to the medium; inbound
/// bytes drain through a frame accumulator and the session's acceptance
/// path before they surface as [`Delivery`] values.
pub struct Station {
    session: LinkSession,
    medium: Box<dyn Medium>,
    accumulator: FrameAccumulator,
    confirmed: bool,
}

impl Station {
    /// Bind `session` to `medium` after checking the medium can actually
    /// carry link frames: it must be ready and able to move the largest
    /// legal frame.
    pub fn bind(
        session: LinkSession,
        medium: Box<dyn Medium>,
        confirmed: bool,
    ) -> Result<Self, StackError> {
        if !medium.is_ready() {
            return Err(StackError::IncompatibleMedium {
                name: medium.name().to_string(),
                reason: "not ready".to_string(),
            });
        }
        if medium.max_frame_len() < FRAME_MAX_LEN {
            return Err(StackError::IncompatibleMedium {
                name: medium.name().to_string(),
                reason: format!(
                    "maximum frame length {} is below {FRAME_MAX_LEN}",
                    medium.max_frame_len()
                ),
            });
        }

        tracing::info!(
            medium = medium.name(),
            local = session.config().local().raw(),
            peer = session.config().peer().raw(),
            "station bound"
        );
        Ok(Self {
            session,
            medium,
            accumulator: FrameAccumulator::new(),
            confirmed,
        })
    }

    /// Send one payload of user data to the peer.
    ///
    /// A confirmed station sends it as confirmed user data carrying the
    /// frame count bit; an unconfirmed station expects no acknowledgement.
    pub fn send_user_data(&mut self, payload: &[u8]) -> Result<(), StackError> {
        let function = if self.confirmed {
            PrimaryFunction::ConfirmedUserData
        } else {
            PrimaryFunction::UnconfirmedUserData
        };
        let frame = self.session.build_primary(function, payload)?;
        self.transmit(&frame)
    }

    /// Send a link-states reset to the peer.
    pub fn send_reset(&mut self) -> Result<(), StackError> {
        let frame = self
            .session
            .build_primary(PrimaryFunction::ResetLinkStates, &[])?;
        self.transmit(&frame)
    }

    /// Acknowledge the peer's last confirmed frame.
    pub fn acknowledge(&mut self) -> Result<(), StackError> {
        let frame = self.session.build_secondary(SecondaryFunction::Ack, false)?;
        self.transmit(&frame)
    }

    fn transmit(&mut self, frame: &Frame) -> Result<(), StackError> {
        let bytes = frame.to_bytes();
        self.medium.transmit(&bytes)?;
        tracing::debug!(
            len = bytes.len(),
            medium = self.medium.name(),
            "frame sent"
        );
        Ok(())
    }

    /// Drain the medium and hand back everything addressed to this station.
    ///
    /// Frames that fail validation or carry another station's address are
    /// logged and dropped; only accepted frames surface.
    pub fn poll(&mut self) -> Result<Vec<Delivery>, StackError> {
        let mut deliveries = Vec::new();
        while let Some(chunk) = self.medium.poll_receive()? {
            for frame_bytes in self.accumulator.feed(&chunk) {
                match self.session.accept(&frame_bytes) {
                    Ok(received) => {
                        let category = classify(&received.control);
                        tracing::info!(
                            source = received.source.raw(),
                            payload_len = received.payload.len(),
                            ?category,
                            "frame accepted"
                        );
                        deliveries.push(Delivery { received, category });
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "inbound frame rejected");
                    }
                }
            }
        }
        Ok(deliveries)
    }

    pub fn session(&self) -> &LinkSession {
        &self.session
    }

    pub fn medium_name(&self) -> &str {
        self.medium.name()
    }
}
