//! Camera hardware abstraction.
//!
//! This module defines the seam between the lifecycle controller and the
//! platform camera subsystem: an exclusive device handle, a provider that
//! opens one, and the event channel devices use to deliver asynchronous
//! capture completions back to their owner.

mod camera;
mod event;
mod facing;
mod mock;
mod resolution;

pub use camera::{CameraDevice, CameraError, CameraProvider};
pub use event::{CameraEvent, EventSender};
pub use facing::Facing;
pub use mock::{MockCamera, MockCameraState, MockProvider};
pub use resolution::Resolution;
