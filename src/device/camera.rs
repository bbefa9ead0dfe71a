//! Camera device abstraction.
//!
//! This module provides trait-based abstractions over camera hardware,
//! allowing for both real platform backends and mock implementations for
//! testing. A [`CameraDevice`] is an exclusive handle to one open camera;
//! dropping it releases the hardware. A [`CameraProvider`] opens devices
//! for a requested facing.

use super::{EventSender, Facing, Resolution};
use crate::preview::SurfaceHandle;
use thiserror::Error;

/// Errors that can occur during camera operations.
#[derive(Debug, Error)]
pub enum CameraError {
    #[error("no camera with facing {0}")]
    FacingUnavailable(Facing),
    #[error("failed to open camera: {0}")]
    OpenFailed(String),
    #[error("camera device busy")]
    DeviceBusy,
    #[error("failed to apply camera parameters: {0}")]
    ParameterFailed(String),
    #[error("failed to bind preview surface: {0}")]
    SurfaceBindFailed(String),
    #[error("preview streaming error: {0}")]
    Stream(String),
    #[error("capture request failed: {0}")]
    CaptureFailed(String),
}

/// An exclusive handle to one open hardware camera.
///
/// At most one device is open per controller at any time; release always
/// precedes the next open. Releasing is dropping the handle, which stops
/// any in-flight streaming on the platform side. There is no cancellation
/// of an in-flight capture request; its completion is delivered through
/// the [`EventSender`] the device received at open time and may arrive
/// after the handle is gone.
pub trait CameraDevice {
    /// The facing this device was opened for.
    fn facing(&self) -> Facing;

    /// Capture resolutions the device supports, in device order.
    ///
    /// Callers query this fresh on every geometry change; the list is
    /// never cached across handles.
    fn supported_preview_sizes(&self) -> Vec<Resolution>;

    /// Applies a preview resolution.
    fn set_preview_size(&mut self, size: Resolution) -> Result<(), CameraError>;

    /// Binds the device's preview output to a rendering surface.
    fn bind_surface(&mut self, surface: &SurfaceHandle) -> Result<(), CameraError>;

    /// Starts continuous preview streaming to the bound surface.
    fn start_preview(&mut self) -> Result<(), CameraError>;

    /// Stops preview streaming.
    fn stop_preview(&mut self) -> Result<(), CameraError>;

    /// Whether the device has a flash unit usable as a torch.
    fn has_flash(&self) -> bool;

    /// Turns torch mode on or off.
    fn set_torch(&mut self, on: bool) -> Result<(), CameraError>;

    /// Issues a single asynchronous capture request.
    ///
    /// The encoded image arrives later as a
    /// [`CameraEvent::CaptureComplete`](super::CameraEvent) on the event
    /// channel, possibly from another thread.
    fn take_picture(&mut self) -> Result<(), CameraError>;
}

/// Opens camera devices.
pub trait CameraProvider {
    /// The device type this provider opens.
    type Device: CameraDevice;

    /// Opens the camera with the given facing.
    ///
    /// The device keeps `events` for delivering capture completions.
    fn open(&mut self, facing: Facing, events: EventSender) -> Result<Self::Device, CameraError>;
}
