//! Media index registration.

use std::path::Path;

/// Notifies the platform's media index of a newly saved file so it shows
/// up in galleries.
///
/// Registration is fire-and-forget: there is no completion handling and no
/// result. Implementations absorb their own failures.
pub trait MediaIndex {
    /// Registers one file path with the index.
    fn register(&self, path: &Path);
}

/// Default index that only records the registration in the log.
///
/// Stands in for the platform scanner in tests and on hosts without a
/// media database.
#[derive(Debug, Default)]
pub struct LogMediaIndex;

impl MediaIndex for LogMediaIndex {
    fn register(&self, path: &Path) {
        tracing::info!(path = %path.display(), "registered with media index");
    }
}
