//! Camera Viewfinder Controller Library
//!
//! A lifecycle controller for a camera preview screen: it owns the single
//! active camera handle, follows the display surface through creation,
//! geometry changes, and destruction, and services the user actions of a
//! viewfinder (switch facing, toggle torch, capture a still photo).
//!
//! # Architecture
//!
//! ```text
//! surface lifecycle + user actions
//!            |
//!            v
//!      controller  --selects-->  preview (surface, nearest-aspect sizes)
//!        |      ^
//!   opens|      | capture completions (event channel)
//!        v      |
//!          device  (CameraDevice / CameraProvider)
//!            |
//!            v
//!         storage  (timestamped file + media index) --> notify
//! ```
//!
//! # Design Principles
//!
//! - **One handle**: release always precedes open; two camera handles
//!   never exist concurrently
//! - **Single-threaded side effects**: capture completions cross threads
//!   as messages and are handled only on the owning thread; completions
//!   for a released handle are discarded
//! - **Observable failures**: every operation returns its outcome; no
//!   failure is fatal and none is silently swallowed
//! - **Platform as collaborator**: camera hardware, media index, and user
//!   notification sit behind traits with mock/log implementations in-tree
//!
//! # Example
//!
//! ```no_run
//! use viewfinder::{
//!     config::CameraSettings,
//!     controller::ViewfinderController,
//!     device::MockProvider,
//!     preview::SurfaceHandle,
//!     storage::PhotoWriter,
//! };
//!
//! let writer = PhotoWriter::new("pictures", "IMG");
//! let mut controller =
//!     ViewfinderController::new(MockProvider::new(), CameraSettings::default(), writer);
//!
//! // The hosting UI drives the surface lifecycle.
//! controller.surface_created(SurfaceHandle::new(1, 1280, 720)).unwrap();
//! controller.surface_changed(1280, 720).unwrap();
//!
//! // User actions operate on the one open handle.
//! controller.capture().unwrap();
//! for result in controller.process_events() {
//!     match result {
//!         Ok(saved) => println!("saved {} ({} bytes)", saved.path.display(), saved.bytes),
//!         Err(e) => eprintln!("capture failed: {e}"),
//!     }
//! }
//!
//! controller.surface_destroyed();
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod device;
pub mod notify;
pub mod preview;
pub mod storage;

// Re-export commonly used types at crate root
pub use config::{CameraSettings, FileConfig, StorageSettings};
pub use controller::{ControllerError, PreviewState, SavedPhoto, TorchState, ViewfinderController};
pub use device::{CameraDevice, CameraError, CameraProvider, Facing, MockProvider, Resolution};
pub use notify::CaptureNotifier;
pub use preview::{nearest_aspect, SurfaceHandle, FALLBACK_RESOLUTION};
pub use storage::{MediaIndex, PhotoWriter};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
