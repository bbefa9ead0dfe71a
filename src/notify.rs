//! User-visible capture confirmation.

use std::path::Path;

/// Surfaces a short confirmation to the user after a successful capture.
///
/// This is the seam the hosting UI fills with its toast/snackbar facility;
/// only the success path is announced.
pub trait CaptureNotifier {
    /// Announces that a photo was saved at `path`.
    fn photo_saved(&self, path: &Path);
}

/// Default notifier that writes the confirmation to the log.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl CaptureNotifier for LogNotifier {
    fn photo_saved(&self, path: &Path) {
        tracing::info!(path = %path.display(), "image saved");
    }
}
