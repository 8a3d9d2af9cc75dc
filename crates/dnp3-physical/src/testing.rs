//! Generic conformance assertions for [`Medium`] implementations.
//!
//! These helpers validate invariants every medium should satisfy,
//! regardless of its transport.
//!
//! # Usage
//!
//! ```rust,ignore
//! use dnp3_physical::{testing, LoopbackMedium};
//!
//! let (mut a, _b) = LoopbackMedium::pair();
//! testing::assert_fresh_medium_conformance(&mut a);
//! ```

use dnp3_core::constants::FRAME_MAX_LEN;

use crate::traits::Medium;

/// Assert that the medium has a non-empty name.
pub fn assert_has_name(medium: &impl Medium) {
    assert!(!medium.name().is_empty(), "medium name must not be empty");
}

/// Assert that the medium can carry the largest legal frame (292 bytes).
pub fn assert_carries_largest_frame(medium: &impl Medium) {
    assert!(
        medium.max_frame_len() >= FRAME_MAX_LEN,
        "medium must carry {FRAME_MAX_LEN}-byte frames, reports {}",
        medium.max_frame_len()
    );
}

/// Assert that polling a medium with nothing in flight yields no frame.
pub fn assert_idle_receive_is_empty(medium: &mut impl Medium) {
    let polled = medium.poll_receive();
    assert!(
        matches!(polled, Ok(None)),
        "idle poll_receive should yield Ok(None): {polled:?}"
    );
}

/// Assert that a medium reporting `is_ready() == false` refuses to
/// transmit. The caller supplies a medium already in that state.
pub fn assert_not_ready_refuses_transmit(medium: &mut impl Medium) {
    assert!(
        !medium.is_ready(),
        "this check requires a medium that is not ready"
    );
    let result = medium.transmit(&[0x42; 20]);
    assert!(result.is_err(), "transmit should fail while not ready");
}

/// Run all conformance checks that apply to a freshly created medium.
///
/// This is a convenience that calls:
/// - [`assert_has_name`]
/// - [`assert_carries_largest_frame`]
/// - [`assert_idle_receive_is_empty`]
pub fn assert_fresh_medium_conformance(medium: &mut impl Medium) {
    assert_has_name(medium);
    assert_carries_largest_frame(medium);
    assert_idle_receive_is_empty(medium);
}
