//! In-memory loopback medium pair.
//!
//! Two cross-connected endpoints over shared queues: frames transmitted on
//! one endpoint are received by the other. Used by tests and the demo
//! binary; not an I/O driver.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::trace;

use crate::error::MediumError;
use crate::traits::Medium;

/// Largest frame a loopback endpoint accepts.
pub const LOOPBACK_FRAME_CAPACITY: usize = 4096;

type FrameQueue = Arc<Mutex<VecDeque<Vec<u8>>>>;

/// One endpoint of the in-memory pair created by [`LoopbackMedium::pair`].
#[derive(Debug)]
pub struct LoopbackMedium {
    name: &'static str,
    inbound: FrameQueue,
    outbound: FrameQueue,
    open: Arc<AtomicBool>,
}

impl LoopbackMedium {
    /// Create two cross-connected endpoints sharing one open flag.
    pub fn pair() -> (LoopbackMedium, LoopbackMedium) {
        let a_to_b: FrameQueue = Arc::new(Mutex::new(VecDeque::new()));
        let b_to_a: FrameQueue = Arc::new(Mutex::new(VecDeque::new()));
        let open = Arc::new(AtomicBool::new(true));

        let a = LoopbackMedium {
            name: "loopback[a]",
            inbound: Arc::clone(&b_to_a),
            outbound: Arc::clone(&a_to_b),
            open: Arc::clone(&open),
        };
        let b = LoopbackMedium {
            name: "loopback[b]",
            inbound: a_to_b,
            outbound: b_to_a,
            open,
        };
        (a, b)
    }

    /// Close the pair. Both endpoints stop accepting transmits; frames
    /// already in flight remain receivable.
    pub fn close(&self) {
        self.open.store(false, Ordering::SeqCst);
    }
}

/// A poisoned queue lock still guards a structurally intact queue.
fn lock(queue: &Mutex<VecDeque<Vec<u8>>>) -> MutexGuard<'_, VecDeque<Vec<u8>>> {
    queue.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl Medium for LoopbackMedium {
    fn name(&self) -> &str {
        self.name
    }

    fn is_ready(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    fn max_frame_len(&self) -> usize {
        LOOPBACK_FRAME_CAPACITY
    }

    fn transmit(&mut self, frame: &[u8]) -> Result<(), MediumError> {
        if !self.is_ready() {
            return Err(MediumError::Closed);
        }
        if frame.len() > self.max_frame_len() {
            return Err(MediumError::FrameTooLarge {
                len: frame.len(),
                max: self.max_frame_len(),
            });
        }
        lock(&self.outbound).push_back(frame.to_vec());
        trace!("{}: queued {} bytes for the peer", self.name, frame.len());
        Ok(())
    }

    fn poll_receive(&mut self) -> Result<Option<Vec<u8>>, MediumError> {
        Ok(lock(&self.inbound).pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_cross_delivers() {
        let (mut a, mut b) = LoopbackMedium::pair();

        a.transmit(&[0x05, 0x64, 0x01]).unwrap();
        assert_eq!(b.poll_receive().unwrap(), Some(vec![0x05, 0x64, 0x01]));

        // Nothing echoes back to the sender.
        assert_eq!(a.poll_receive().unwrap(), None);
    }

    #[test]
    fn fifo_order_preserved() {
        let (mut a, mut b) = LoopbackMedium::pair();

        a.transmit(&[1]).unwrap();
        a.transmit(&[2]).unwrap();
        a.transmit(&[3]).unwrap();

        assert_eq!(b.poll_receive().unwrap(), Some(vec![1]));
        assert_eq!(b.poll_receive().unwrap(), Some(vec![2]));
        assert_eq!(b.poll_receive().unwrap(), Some(vec![3]));
        assert_eq!(b.poll_receive().unwrap(), None);
    }

    #[test]
    fn both_directions_independent() {
        let (mut a, mut b) = LoopbackMedium::pair();

        a.transmit(&[0xAA]).unwrap();
        b.transmit(&[0xBB]).unwrap();

        assert_eq!(a.poll_receive().unwrap(), Some(vec![0xBB]));
        assert_eq!(b.poll_receive().unwrap(), Some(vec![0xAA]));
    }

    #[test]
    fn oversized_frame_rejected() {
        let (mut a, _b) = LoopbackMedium::pair();

        let huge = vec![0u8; LOOPBACK_FRAME_CAPACITY + 1];
        assert!(matches!(
            a.transmit(&huge),
            Err(MediumError::FrameTooLarge { len, max })
                if len == LOOPBACK_FRAME_CAPACITY + 1 && max == LOOPBACK_FRAME_CAPACITY
        ));
    }

    #[test]
    fn close_stops_both_endpoints() {
        let (mut a, mut b) = LoopbackMedium::pair();

        a.transmit(&[0x01]).unwrap();
        a.close();

        assert!(!a.is_ready());
        assert!(!b.is_ready());
        assert!(matches!(a.transmit(&[0x02]), Err(MediumError::Closed)));
        assert!(matches!(b.transmit(&[0x03]), Err(MediumError::Closed)));

        // Frames already in flight still drain.
        assert_eq!(b.poll_receive().unwrap(), Some(vec![0x01]));
        assert_eq!(b.poll_receive().unwrap(), None);
    }

    #[test]
    fn endpoints_carry_distinct_names() {
        let (a, b) = LoopbackMedium::pair();
        assert_ne!(a.name(), b.name());
        assert!(a.name().starts_with("loopback"));
    }
}
