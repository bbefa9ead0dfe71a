//! Mock camera for testing and demonstration.
//!
//! The mock behaves like a cooperative platform device: it tracks preview
//! and torch state, honors the configured capability set, and delivers
//! capture completions through the event channel exactly like a hardware
//! backend would (real platforms deliver them from their own thread; the
//! channel makes the difference invisible to the controller).

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use super::{CameraDevice, CameraError, CameraProvider, EventSender, Facing, Resolution};
use crate::preview::SurfaceHandle;

/// Observable state of an open [`MockCamera`].
#[derive(Debug, Clone, Default)]
pub struct MockCameraState {
    /// Whether preview streaming is running.
    pub preview_running: bool,
    /// Whether torch mode is applied.
    pub torch_on: bool,
    /// Last preview resolution applied via `set_preview_size`.
    pub preview_size: Option<Resolution>,
    /// Last surface bound to the device.
    pub bound_surface: Option<SurfaceHandle>,
    /// Number of capture requests issued on this handle.
    pub pictures_taken: u32,
}

/// Mock camera device.
pub struct MockCamera {
    facing: Facing,
    sizes: Vec<Resolution>,
    has_flash: bool,
    payload: Vec<u8>,
    events: EventSender,
    state: Arc<Mutex<MockCameraState>>,
    live: Arc<AtomicUsize>,
}

impl MockCamera {
    fn state(&self) -> MutexGuard<'_, MockCameraState> {
        self.state.lock().expect("mock camera state lock")
    }
}

impl CameraDevice for MockCamera {
    fn facing(&self) -> Facing {
        self.facing
    }

    fn supported_preview_sizes(&self) -> Vec<Resolution> {
        self.sizes.clone()
    }

    fn set_preview_size(&mut self, size: Resolution) -> Result<(), CameraError> {
        self.state().preview_size = Some(size);
        Ok(())
    }

    fn bind_surface(&mut self, surface: &SurfaceHandle) -> Result<(), CameraError> {
        self.state().bound_surface = Some(surface.clone());
        Ok(())
    }

    fn start_preview(&mut self) -> Result<(), CameraError> {
        self.state().preview_running = true;
        Ok(())
    }

    fn stop_preview(&mut self) -> Result<(), CameraError> {
        self.state().preview_running = false;
        Ok(())
    }

    fn has_flash(&self) -> bool {
        self.has_flash
    }

    fn set_torch(&mut self, on: bool) -> Result<(), CameraError> {
        if !self.has_flash {
            return Err(CameraError::ParameterFailed("no flash unit".into()));
        }
        self.state().torch_on = on;
        Ok(())
    }

    fn take_picture(&mut self) -> Result<(), CameraError> {
        {
            let mut state = self.state();
            state.pictures_taken += 1;
            // Still capture halts streaming until the owner restarts it,
            // matching platform behavior.
            state.preview_running = false;
        }
        self.events.capture_complete(self.payload.clone());
        Ok(())
    }
}

impl Drop for MockCamera {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
        tracing::debug!(facing = %self.facing, "mock camera released");
    }
}

/// Mock camera provider with configurable capabilities and failure injection.
pub struct MockProvider {
    supported_sizes: Vec<Resolution>,
    has_flash: bool,
    capture_payload: Vec<u8>,
    missing_facings: Vec<Facing>,
    fail_next_open: bool,
    open_count: usize,
    live: Arc<AtomicUsize>,
    last_state: Option<Arc<Mutex<MockCameraState>>>,
}

impl MockProvider {
    /// Creates a provider whose cameras support common 4:3 and 16:9 sizes
    /// and carry a flash unit.
    pub fn new() -> Self {
        Self {
            supported_sizes: vec![
                Resolution::new(640, 480),
                Resolution::new(1920, 1080),
                Resolution::new(800, 600),
            ],
            has_flash: true,
            capture_payload: vec![0xFF, 0xD8, 0xFF, 0xD9], // minimal JPEG marker pair
            missing_facings: Vec::new(),
            fail_next_open: false,
            open_count: 0,
            live: Arc::new(AtomicUsize::new(0)),
            last_state: None,
        }
    }

    /// Replaces the supported preview size list.
    pub fn with_supported_sizes(mut self, sizes: Vec<Resolution>) -> Self {
        self.supported_sizes = sizes;
        self
    }

    /// Sets flash availability.
    pub fn with_flash(mut self, has_flash: bool) -> Self {
        self.has_flash = has_flash;
        self
    }

    /// Marks a facing as absent; opening it fails.
    pub fn without_facing(mut self, facing: Facing) -> Self {
        self.missing_facings.push(facing);
        self
    }

    /// Sets the bytes delivered for each capture completion.
    pub fn with_capture_payload(mut self, payload: Vec<u8>) -> Self {
        self.capture_payload = payload;
        self
    }

    /// Makes the next open fail with a busy error.
    pub fn fail_next_open(&mut self) {
        self.fail_next_open = true;
    }

    /// Total successful opens so far.
    pub fn open_count(&self) -> usize {
        self.open_count
    }

    /// Number of handles currently alive (not yet dropped).
    pub fn live_handles(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }

    /// Snapshot of the most recently opened camera's state.
    pub fn state_snapshot(&self) -> Option<MockCameraState> {
        self.last_state
            .as_ref()
            .map(|s| s.lock().expect("mock camera state lock").clone())
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraProvider for MockProvider {
    type Device = MockCamera;

    fn open(&mut self, facing: Facing, events: EventSender) -> Result<MockCamera, CameraError> {
        if self.fail_next_open {
            self.fail_next_open = false;
            return Err(CameraError::DeviceBusy);
        }
        if self.missing_facings.contains(&facing) {
            return Err(CameraError::FacingUnavailable(facing));
        }

        let state = Arc::new(Mutex::new(MockCameraState::default()));
        self.last_state = Some(Arc::clone(&state));
        self.open_count += 1;
        self.live.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(%facing, "mock camera opened");

        Ok(MockCamera {
            facing,
            sizes: self.supported_sizes.clone(),
            has_flash: self.has_flash,
            payload: self.capture_payload.clone(),
            events,
            state,
            live: Arc::clone(&self.live),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::CameraEvent;
    use std::sync::mpsc::channel;

    fn open_default(provider: &mut MockProvider) -> (MockCamera, std::sync::mpsc::Receiver<CameraEvent>) {
        let (tx, rx) = channel();
        let camera = provider.open(Facing::Back, EventSender::new(tx, 1)).unwrap();
        (camera, rx)
    }

    #[test]
    fn test_open_and_release_tracks_live_handles() {
        let mut provider = MockProvider::new();
        assert_eq!(provider.live_handles(), 0);

        let (camera, _rx) = open_default(&mut provider);
        assert_eq!(provider.live_handles(), 1);
        assert_eq!(provider.open_count(), 1);

        drop(camera);
        assert_eq!(provider.live_handles(), 0);
    }

    #[test]
    fn test_missing_facing_fails_to_open() {
        let mut provider = MockProvider::new().without_facing(Facing::Front);
        let (tx, _rx) = channel();
        assert!(matches!(
            provider.open(Facing::Front, EventSender::new(tx, 1)),
            Err(CameraError::FacingUnavailable(Facing::Front))
        ));
        assert_eq!(provider.live_handles(), 0);
    }

    #[test]
    fn test_take_picture_delivers_completion_and_stops_preview() {
        let mut provider = MockProvider::new().with_capture_payload(vec![9, 9]);
        let (mut camera, rx) = open_default(&mut provider);

        camera.start_preview().unwrap();
        camera.take_picture().unwrap();

        let snapshot = provider.state_snapshot().unwrap();
        assert!(!snapshot.preview_running);
        assert_eq!(snapshot.pictures_taken, 1);

        match rx.try_recv().unwrap() {
            CameraEvent::CaptureComplete { generation, data } => {
                assert_eq!(generation, 1);
                assert_eq!(data, vec![9, 9]);
            }
        }
    }

    #[test]
    fn test_injected_busy_failure_applies_once() {
        let mut provider = MockProvider::new();
        provider.fail_next_open();

        let (tx, _rx) = channel();
        assert!(matches!(
            provider.open(Facing::Back, EventSender::new(tx.clone(), 1)),
            Err(CameraError::DeviceBusy)
        ));
        assert!(provider.open(Facing::Back, EventSender::new(tx, 2)).is_ok());
    }

    #[test]
    fn test_torch_requires_flash() {
        let mut provider = MockProvider::new().with_flash(false);
        let (mut camera, _rx) = open_default(&mut provider);
        assert!(!camera.has_flash());
        assert!(camera.set_torch(true).is_err());
    }
}
