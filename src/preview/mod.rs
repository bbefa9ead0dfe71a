//! Preview surface description and resolution selection.

mod selector;
mod surface;

pub use selector::{nearest_aspect, FALLBACK_RESOLUTION};
pub use surface::SurfaceHandle;
