//! Pure inbound frame triage.
//!
//! Extracted from [`crate::session`] so that routing decisions over decoded
//! control fields can be tested without a session.

use dnp3_core::{ControlField, FrameType, PrimaryFunction, SecondaryFunction};

/// How the layer above should handle an accepted frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameCategory {
    /// Hand the payload upward. `confirm` is set when the sender expects an
    /// acknowledgement frame back.
    DeliverUserData { confirm: bool },
    /// A link-control request for the secondary station to answer.
    LinkControl(PrimaryFunction),
    /// An acknowledgement or status report from a secondary station.
    Acknowledgement(SecondaryFunction),
}

/// Classify a decoded control field.
pub fn classify(control: &ControlField) -> FrameCategory {
    match control.frame_type {
        FrameType::Primary { function, .. } => match function {
            PrimaryFunction::ConfirmedUserData => FrameCategory::DeliverUserData { confirm: true },
            PrimaryFunction::UnconfirmedUserData => {
                FrameCategory::DeliverUserData { confirm: false }
            }
            other => FrameCategory::LinkControl(other),
        },
        FrameType::Secondary { function, .. } => FrameCategory::Acknowledgement(function),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dnp3_core::Direction;

    fn primary(function: PrimaryFunction) -> ControlField {
        ControlField {
            direction: Direction::FromMaster,
            frame_type: FrameType::Primary {
                fcb: false,
                function,
            },
        }
    }

    fn secondary(function: SecondaryFunction) -> ControlField {
        ControlField {
            direction: Direction::FromOutstation,
            frame_type: FrameType::Secondary {
                dfc: false,
                function,
            },
        }
    }

    /// Exhaustively verify every legal function code lands in the expected
    /// category. This catches regressions if function codes are added
    /// without updating the triage.
    #[test]
    fn classify_exhaustive() {
        let expectations = [
            (
                primary(PrimaryFunction::ResetLinkStates),
                FrameCategory::LinkControl(PrimaryFunction::ResetLinkStates),
            ),
            (
                primary(PrimaryFunction::ResetUserProcess),
                FrameCategory::LinkControl(PrimaryFunction::ResetUserProcess),
            ),
            (
                primary(PrimaryFunction::TestLinkStates),
                FrameCategory::LinkControl(PrimaryFunction::TestLinkStates),
            ),
            (
                primary(PrimaryFunction::ConfirmedUserData),
                FrameCategory::DeliverUserData { confirm: true },
            ),
            (
                primary(PrimaryFunction::UnconfirmedUserData),
                FrameCategory::DeliverUserData { confirm: false },
            ),
            (
                primary(PrimaryFunction::RequestLinkStatus),
                FrameCategory::LinkControl(PrimaryFunction::RequestLinkStatus),
            ),
            (
                secondary(SecondaryFunction::Ack),
                FrameCategory::Acknowledgement(SecondaryFunction::Ack),
            ),
            (
                secondary(SecondaryFunction::Nack),
                FrameCategory::Acknowledgement(SecondaryFunction::Nack),
            ),
            (
                secondary(SecondaryFunction::LinkStatus),
                FrameCategory::Acknowledgement(SecondaryFunction::LinkStatus),
            ),
        ];

        // One entry per legal function code (6 primary + 3 secondary).
        assert_eq!(expectations.len(), 9, "triage test must cover every code");

        for (control, expected) in expectations {
            assert_eq!(
                classify(&control),
                expected,
                "{control:?} should classify as {expected:?}"
            );
        }
    }

    #[test]
    fn classification_ignores_frame_count_bit() {
        let with_fcb = ControlField {
            direction: Direction::FromMaster,
            frame_type: FrameType::Primary {
                fcb: true,
                function: PrimaryFunction::ConfirmedUserData,
            },
        };
        assert_eq!(
            classify(&with_fcb),
            FrameCategory::DeliverUserData { confirm: true }
        );
    }

    #[test]
    fn classification_ignores_flow_control_bit() {
        let with_dfc = ControlField {
            direction: Direction::FromOutstation,
            frame_type: FrameType::Secondary {
                dfc: true,
                function: SecondaryFunction::Nack,
            },
        };
        assert_eq!(
            classify(&with_dfc),
            FrameCategory::Acknowledgement(SecondaryFunction::Nack)
        );
    }
}
