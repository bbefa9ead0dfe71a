//! Events delivered by camera devices back to their owner.
//!
//! The platform camera subsystem completes capture requests on a thread of
//! its choosing. Instead of running side effects there, a device sends a
//! [`CameraEvent`] through the channel it was handed at open time; the
//! controller drains the channel on its own thread. Each sender is tagged
//! with the generation of the handle it belongs to, so completions from a
//! handle that has since been released can be told apart from live ones.

use std::sync::mpsc::Sender;

/// An event emitted by an open camera device.
#[derive(Debug)]
pub enum CameraEvent {
    /// A single-shot capture finished and produced an encoded image.
    CaptureComplete {
        /// Generation of the handle that issued the capture request.
        generation: u64,
        /// Opaque encoded image bytes (JPEG from real hardware).
        data: Vec<u8>,
    },
}

/// Sending half handed to a device when it is opened.
///
/// Cloneable and safe to use from any thread; sends are fire-and-forget
/// because the receiving controller may already be gone during teardown.
#[derive(Debug, Clone)]
pub struct EventSender {
    inner: Sender<CameraEvent>,
    generation: u64,
}

impl EventSender {
    /// Creates a sender bound to one handle generation.
    pub fn new(inner: Sender<CameraEvent>, generation: u64) -> Self {
        Self { inner, generation }
    }

    /// Generation of the handle this sender belongs to.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Delivers a completed capture. A closed channel is ignored.
    pub fn capture_complete(&self, data: Vec<u8>) {
        let event = CameraEvent::CaptureComplete {
            generation: self.generation,
            data,
        };
        if self.inner.send(event).is_err() {
            tracing::debug!(
                generation = self.generation,
                "capture completion dropped, receiver gone"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::channel;

    #[test]
    fn test_completion_carries_generation_and_data() {
        let (tx, rx) = channel();
        let sender = EventSender::new(tx, 7);
        sender.capture_complete(vec![1, 2, 3]);

        match rx.try_recv().unwrap() {
            CameraEvent::CaptureComplete { generation, data } => {
                assert_eq!(generation, 7);
                assert_eq!(data, vec![1, 2, 3]);
            }
        }
    }

    #[test]
    fn test_send_after_receiver_dropped_is_silent() {
        let (tx, rx) = channel();
        drop(rx);
        EventSender::new(tx, 1).capture_complete(vec![0]);
    }
}
