//! Preview resolution selection.
//!
//! The device reports a short list of supported capture resolutions; the
//! surface has a pixel geometry. The selector picks the supported
//! resolution whose aspect ratio is closest to the surface's, so preview
//! frames fill the surface with minimal distortion.

use crate::device::Resolution;

/// Resolution applied when the device reports no usable size list.
pub const FALLBACK_RESOLUTION: Resolution = Resolution::new(640, 480);

/// Picks the candidate whose aspect ratio is nearest the target's.
///
/// Pure linear scan over `candidates`. Ties resolve to the first-seen
/// candidate (strict comparison, stable order, no secondary tie-break).
/// Returns `None` for an empty candidate list.
pub fn nearest_aspect(
    target_width: u32,
    target_height: u32,
    candidates: &[Resolution],
) -> Option<Resolution> {
    let target_ratio = f64::from(target_width) / f64::from(target_height);

    let mut best: Option<Resolution> = None;
    let mut min_diff = f64::MAX;

    for &candidate in candidates {
        let diff = (candidate.aspect_ratio() - target_ratio).abs();
        if diff < min_diff {
            best = Some(candidate);
            min_diff = diff;
        }
    }

    best
}
