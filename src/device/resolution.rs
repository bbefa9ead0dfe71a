//! Pixel dimensions reported by camera devices and surfaces.

use serde::{Deserialize, Serialize};

/// A width/height pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Resolution {
    /// Creates a new resolution.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width-to-height ratio.
    ///
    /// A zero height yields an infinite ratio rather than a panic; such
    /// resolutions never survive config validation.
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    /// Total pixel count (width * height).
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_ratio() {
        let r = Resolution::new(1920, 1080);
        assert!((r.aspect_ratio() - 16.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_display_format() {
        assert_eq!(Resolution::new(640, 480).to_string(), "640x480");
    }
}
