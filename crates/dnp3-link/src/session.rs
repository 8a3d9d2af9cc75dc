//! Stateful link session: addressed frame construction and inbound
//! acceptance.

use dnp3_core::constants::MAX_STATION_ADDRESS;
use dnp3_core::{
    ControlField, Direction, Frame, FrameType, LinkHeader, PrimaryFunction, SecondaryFunction,
    StationAddress,
};

use crate::builder::FrameBuilder;
use crate::error::LinkError;

/// Addresses and direction of one side of a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    local: StationAddress,
    peer: StationAddress,
    direction: Direction,
}

impl SessionConfig {
    /// Create a config for the station at `local` talking to `peer`.
    ///
    /// Both addresses must be assignable (at most 0xFFFE) and distinct.
    /// The direction defaults to [`Direction::FromMaster`].
    pub fn new(local: u16, peer: u16) -> Result<Self, LinkError> {
        if local > MAX_STATION_ADDRESS {
            return Err(LinkError::ReservedAddress(local));
        }
        if peer > MAX_STATION_ADDRESS {
            return Err(LinkError::ReservedAddress(peer));
        }
        if local == peer {
            return Err(LinkError::AddressCollision(local));
        }
        Ok(Self {
            local: StationAddress::new(local),
            peer: StationAddress::new(peer),
            direction: Direction::FromMaster,
        })
    }

    /// Same config with the direction bit this station stamps on every
    /// frame it sends.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn local(&self) -> StationAddress {
        self.local
    }

    pub fn peer(&self) -> StationAddress {
        self.peer
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

/// Summary of an accepted inbound frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Received {
    pub source: StationAddress,
    pub destination: StationAddress,
    pub direction: Direction,
    pub control: ControlField,
    pub payload: Vec<u8>,
}

/// One side of a link conversation.
///
/// Holds the addressing config and the frame count bit used for duplicate
/// detection on confirmed sends. A fresh session behaves as though link
/// states were just reset: the next confirmed send carries FCB = 1.
#[derive(Debug)]
pub struct LinkSession {
    config: SessionConfig,
    fcb: bool,
}

impl LinkSession {
    pub fn new(config: SessionConfig) -> Self {
        Self { config, fcb: true }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Frame count bit the next FCV-carrying primary frame will stamp.
    pub fn next_fcb(&self) -> bool {
        self.fcb
    }

    /// Build an addressed primary frame for `function`.
    ///
    /// Functions that require FCV stamp the current frame count bit and
    /// toggle it; a link-states reset re-arms the bit so the next confirmed
    /// send carries FCB = 1. Only the user-data functions accept a payload.
    pub fn build_primary(
        &mut self,
        function: PrimaryFunction,
        payload: &[u8],
    ) -> Result<Frame, LinkError> {
        if !function.carries_user_data() && !payload.is_empty() {
            return Err(LinkError::UnexpectedPayload {
                function: function as u8,
            });
        }

        let fcb = function.fcv_required() && self.fcb;
        let frame = FrameBuilder {
            control: ControlField {
                direction: self.config.direction,
                frame_type: FrameType::Primary { fcb, function },
            },
            destination: self.config.peer,
            source: self.config.local,
            payload: payload.to_vec(),
        }
        .build()?;

        if function.fcv_required() {
            self.fcb = !self.fcb;
        } else if function == PrimaryFunction::ResetLinkStates {
            self.fcb = true;
        }

        tracing::debug!(
            function = function as u8,
            payload_len = payload.len(),
            "built primary frame"
        );
        Ok(frame)
    }

    /// Build a secondary (response) frame for `function`.
    pub fn build_secondary(
        &mut self,
        function: SecondaryFunction,
        dfc: bool,
    ) -> Result<Frame, LinkError> {
        let frame = FrameBuilder {
            control: ControlField {
                direction: self.config.direction,
                frame_type: FrameType::Secondary { dfc, function },
            },
            destination: self.config.peer,
            source: self.config.local,
            payload: Vec::new(),
        }
        .build()?;

        tracing::debug!(function = function as u8, dfc, "built secondary frame");
        Ok(frame)
    }

    /// Build unconfirmed user data addressed to every station.
    pub fn build_broadcast(&mut self, payload: &[u8]) -> Result<Frame, LinkError> {
        let frame = FrameBuilder {
            control: ControlField {
                direction: self.config.direction,
                frame_type: FrameType::Primary {
                    fcb: false,
                    function: PrimaryFunction::UnconfirmedUserData,
                },
            },
            destination: StationAddress::BROADCAST,
            source: self.config.local,
            payload: payload.to_vec(),
        }
        .build()?;

        tracing::debug!(payload_len = payload.len(), "built broadcast frame");
        Ok(frame)
    }

    /// Parse, validate, and filter one inbound frame buffer.
    ///
    /// Frames addressed to neither this station nor broadcast are rejected
    /// with [`LinkError::NotAddressed`].
    pub fn accept(&self, bytes: &[u8]) -> Result<Received, LinkError> {
        let frame = Frame::from_bytes(bytes)?;
        frame.validate()?;

        // The header view needs a mutable block; reads work on a copy.
        let mut block0 = frame.blocks()[0].clone();
        let header = LinkHeader::from_block(&mut block0)?;
        let destination = header.destination();
        let source = header.source();
        let direction = header.direction();
        let control = header.control()?;

        if destination != self.config.local && !destination.is_broadcast() {
            tracing::trace!(
                destination = destination.raw(),
                local = self.config.local.raw(),
                "dropping frame for another station"
            );
            return Err(LinkError::NotAddressed {
                destination: destination.raw(),
                local: self.config.local.raw(),
            });
        }

        Ok(Received {
            source,
            destination,
            direction,
            control,
            payload: frame.payload(),
        })
    }
}
