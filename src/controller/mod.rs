//! Display surface lifecycle controller.
//!
//! [`ViewfinderController`] owns the single active camera handle and reacts
//! to surface lifecycle callbacks and user actions. Release always precedes
//! open, so no two handles ever exist concurrently. Capture completions
//! arrive over the device event channel and are handled on the owning
//! thread by [`ViewfinderController::process_events`]; completions from a
//! handle that has since been released are discarded.
//!
//! Every operation returns its outcome. Failures are non-fatal: the caller
//! decides whether to log and continue, and the controller keeps the
//! device in whatever state the platform left it (best-effort, no retry).

mod state;

pub use state::{PreviewState, TorchState};

use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};

use thiserror::Error;

use crate::config::CameraSettings;
use crate::device::{
    CameraDevice, CameraError, CameraEvent, CameraProvider, EventSender, Facing, Resolution,
};
use crate::notify::{CaptureNotifier, LogNotifier};
use crate::preview::{nearest_aspect, SurfaceHandle};
use crate::storage::{LogMediaIndex, MediaIndex, PhotoWriter, StorageError};

/// Errors surfaced by controller operations.
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("no active camera")]
    NoActiveCamera,
    #[error("camera operation failed: {0}")]
    Camera(#[from] CameraError),
    #[error("image save failed: {0}")]
    Storage(#[from] StorageError),
}

/// A successfully persisted capture.
#[derive(Debug, Clone)]
pub struct SavedPhoto {
    /// Where the image was written.
    pub path: PathBuf,
    /// Size of the image buffer in bytes.
    pub bytes: usize,
}

/// Owns the camera handle and drives it through the surface lifecycle.
pub struct ViewfinderController<P: CameraProvider> {
    provider: P,
    camera: Option<P::Device>,
    surface: Option<SurfaceHandle>,
    facing: Facing,
    torch: TorchState,
    state: PreviewState,
    /// Incremented on every open; tags capture completions so stale ones
    /// can be told apart from live ones.
    generation: u64,
    fallback_resolution: Resolution,
    events_tx: Sender<CameraEvent>,
    events_rx: Receiver<CameraEvent>,
    writer: PhotoWriter,
    media_index: Box<dyn MediaIndex>,
    notifier: Box<dyn CaptureNotifier>,
}

impl<P: CameraProvider> ViewfinderController<P> {
    /// Creates a controller with log-only media index and notifier.
    pub fn new(provider: P, settings: CameraSettings, writer: PhotoWriter) -> Self {
        let (events_tx, events_rx) = channel();
        Self {
            provider,
            camera: None,
            surface: None,
            facing: settings.initial_facing,
            torch: TorchState::Off,
            state: PreviewState::Closed,
            generation: 0,
            fallback_resolution: settings.fallback_resolution,
            events_tx,
            events_rx,
            writer,
            media_index: Box::new(LogMediaIndex),
            notifier: Box::new(LogNotifier),
        }
    }

    /// Replaces the media index collaborator.
    pub fn with_media_index(mut self, media_index: Box<dyn MediaIndex>) -> Self {
        self.media_index = media_index;
        self
    }

    /// Replaces the capture notifier collaborator.
    pub fn with_notifier(mut self, notifier: Box<dyn CaptureNotifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Current preview pipeline state.
    pub fn state(&self) -> PreviewState {
        self.state
    }

    /// Currently selected facing.
    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Current torch state.
    pub fn torch(&self) -> TorchState {
        self.torch
    }

    /// True while a camera handle is open.
    pub fn has_camera(&self) -> bool {
        self.camera.is_some()
    }

    /// The camera provider, for capability inspection.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The hosting UI created the rendering surface.
    ///
    /// Opens a device for the current facing, binds the surface, and starts
    /// streaming. On open failure no handle is kept; on bind/start failure
    /// the handle stays open in the `Stopped` state.
    pub fn surface_created(&mut self, surface: SurfaceHandle) -> Result<(), ControllerError> {
        tracing::info!(token = surface.token(), size = %surface.resolution(), "surface created");
        self.surface = Some(surface.clone());
        self.close_camera();
        self.open_camera(surface)
    }

    /// The surface geometry changed.
    ///
    /// Without an open handle this is a no-op. Otherwise streaming stops,
    /// the supported size list is queried fresh, the nearest-aspect size
    /// (or the configured fallback) is applied, the surface is rebound,
    /// and streaming restarts.
    pub fn surface_changed(&mut self, width: u32, height: u32) -> Result<(), ControllerError> {
        let Some(surface) = self.surface.as_mut() else {
            tracing::debug!("geometry change without a surface, ignoring");
            return Ok(());
        };
        surface.set_geometry(width, height);
        let surface = surface.clone();
        let fallback = self.fallback_resolution;

        let Some(camera) = self.camera.as_mut() else {
            tracing::debug!("geometry change without an open camera, ignoring");
            return Ok(());
        };

        // A failed stop is tolerated so reconfiguration can still proceed.
        if let Err(e) = camera.stop_preview() {
            tracing::warn!(error = %e, "stop preview before reconfigure failed");
        }

        let sizes = camera.supported_preview_sizes();
        let chosen = nearest_aspect(width, height, &sizes).unwrap_or(fallback);
        tracing::debug!(candidates = sizes.len(), size = %chosen, "preview size selected");

        let restarted = camera
            .set_preview_size(chosen)
            .and_then(|()| camera.bind_surface(&surface))
            .and_then(|()| camera.start_preview());

        match restarted {
            Ok(()) => {
                self.set_state(PreviewState::Streaming);
                Ok(())
            }
            Err(e) => {
                self.set_state(PreviewState::Stopped);
                Err(e.into())
            }
        }
    }

    /// The surface is going away. Stops streaming and releases the handle
    /// unconditionally.
    pub fn surface_destroyed(&mut self) {
        tracing::info!("surface destroyed");
        self.close_camera();
        self.surface = None;
    }

    /// Flips the facing selection and reopens the camera.
    ///
    /// The new handle starts at its default resolution until the next
    /// geometry callback. Without a surface only the selection flips; the
    /// next surface-created callback opens the new facing.
    pub fn switch_facing(&mut self) -> Result<Facing, ControllerError> {
        self.facing = self.facing.toggled();
        tracing::info!(facing = %self.facing, "switching camera facing");
        if let Some(surface) = self.surface.clone() {
            self.close_camera();
            self.open_camera(surface)?;
        }
        Ok(self.facing)
    }

    /// Toggles torch mode on the open handle.
    ///
    /// A no-op (unchanged state, `Ok`) without a handle or without flash
    /// capability. Turning the torch on restarts streaming; turning it off
    /// stops streaming, both to apply the parameter change.
    pub fn toggle_torch(&mut self) -> Result<TorchState, ControllerError> {
        let turning_on = !self.torch.is_on();

        let Some(camera) = self.camera.as_mut() else {
            tracing::debug!("torch toggle without an open camera, ignoring");
            return Ok(self.torch);
        };
        if !camera.has_flash() {
            tracing::debug!("torch toggle without flash capability, ignoring");
            return Ok(self.torch);
        }

        if turning_on {
            camera.set_torch(true)?;
            camera.start_preview()?;
            self.torch = TorchState::On;
            self.set_state(PreviewState::Streaming);
        } else {
            camera.set_torch(false)?;
            camera.stop_preview()?;
            self.torch = TorchState::Off;
            self.set_state(PreviewState::Stopped);
        }

        tracing::info!(torch = %self.torch, "torch toggled");
        Ok(self.torch)
    }

    /// Issues a single asynchronous capture request.
    ///
    /// The completion arrives on the event channel and is handled by
    /// [`process_events`](Self::process_events).
    pub fn capture(&mut self) -> Result<(), ControllerError> {
        let Some(camera) = self.camera.as_mut() else {
            return Err(ControllerError::NoActiveCamera);
        };
        camera.take_picture()?;
        // The platform halts streaming for a still capture; streaming
        // resumes when the completion handler restarts it.
        self.set_state(PreviewState::Stopped);
        tracing::info!("capture requested");
        Ok(())
    }

    /// Drains pending device events on the owning thread.
    ///
    /// Each live capture completion is saved, registered with the media
    /// index, announced, and preview streaming is restarted. Completions
    /// whose handle was released or replaced since the request are
    /// discarded: destroying the surface or switching cameras cancels the
    /// pending save. A save failure is returned in the batch and skips the
    /// preview restart.
    pub fn process_events(&mut self) -> Vec<Result<SavedPhoto, ControllerError>> {
        let mut results = Vec::new();
        while let Ok(event) = self.events_rx.try_recv() {
            match event {
                CameraEvent::CaptureComplete { generation, data } => {
                    if generation != self.generation || self.camera.is_none() {
                        tracing::info!(
                            generation,
                            current = self.generation,
                            "discarding capture completion for a released camera"
                        );
                        continue;
                    }
                    results.push(self.finish_capture(data));
                }
            }
        }
        results
    }

    fn finish_capture(&mut self, data: Vec<u8>) -> Result<SavedPhoto, ControllerError> {
        let bytes = data.len();
        let path = self.writer.save(&data)?;

        self.media_index.register(&path);

        let mut restarted = false;
        if let Some(camera) = self.camera.as_mut() {
            // Restart is best-effort; the save already succeeded.
            if let Err(e) = camera.start_preview() {
                tracing::warn!(error = %e, "preview restart after capture failed");
            } else {
                restarted = true;
            }
        }
        if restarted {
            self.set_state(PreviewState::Streaming);
        }

        self.notifier.photo_saved(&path);
        Ok(SavedPhoto { path, bytes })
    }

    fn open_camera(&mut self, surface: SurfaceHandle) -> Result<(), ControllerError> {
        self.set_state(PreviewState::Opening);
        self.generation += 1;
        let events = EventSender::new(self.events_tx.clone(), self.generation);

        let mut camera = match self.provider.open(self.facing, events) {
            Ok(camera) => camera,
            Err(e) => {
                tracing::warn!(facing = %self.facing, error = %e, "camera open failed");
                self.set_state(PreviewState::Closed);
                return Err(e.into());
            }
        };

        let started = camera
            .bind_surface(&surface)
            .and_then(|()| camera.start_preview());
        // The handle is kept either way; a failed bind/start leaves it in
        // whatever state the platform put it.
        self.camera = Some(camera);

        match started {
            Ok(()) => {
                tracing::info!(facing = %self.facing, "camera opened, preview streaming");
                self.set_state(PreviewState::Streaming);
                Ok(())
            }
            Err(e) => {
                self.set_state(PreviewState::Stopped);
                Err(e.into())
            }
        }
    }

    fn close_camera(&mut self) {
        if let Some(mut camera) = self.camera.take() {
            if let Err(e) = camera.stop_preview() {
                tracing::warn!(error = %e, "stop preview during release failed");
            }
            // Dropping the handle releases the hardware.
        }
        self.torch = TorchState::Off;
        self.set_state(PreviewState::Closed);
    }

    fn set_state(&mut self, next: PreviewState) {
        if self.state != next {
            tracing::debug!(from = %self.state, to = %next, "preview state transition");
            self.state = next;
        }
    }
}
