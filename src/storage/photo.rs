//! Captured image persistence.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use thiserror::Error;

/// Errors that can occur while saving a captured image.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to create pictures directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write image {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Writes captured image buffers to timestamped files.
///
/// Filenames follow `<prefix>_<yyyyMMdd_HHmmss>.jpg` in local time.
/// Timestamp granularity is the only uniqueness guard: two captures within
/// the same second target the same path and the later one wins.
#[derive(Debug, Clone)]
pub struct PhotoWriter {
    dir: PathBuf,
    prefix: String,
}

impl PhotoWriter {
    /// Creates a writer targeting the given pictures directory.
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
        }
    }

    /// Directory the writer saves into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes one image buffer and returns the file path.
    ///
    /// The pictures directory is created on demand. The buffer is treated
    /// as opaque, already-encoded bytes.
    pub fn save(&self, data: &[u8]) -> Result<PathBuf, StorageError> {
        fs::create_dir_all(&self.dir).map_err(|source| StorageError::CreateDir {
            path: self.dir.clone(),
            source,
        })?;

        let stamp = Local::now().format("%Y%m%d_%H%M%S");
        let path = self.dir.join(format!("{}_{}.jpg", self.prefix, stamp));

        fs::write(&path, data).map_err(|source| StorageError::Write {
            path: path.clone(),
            source,
        })?;

        tracing::info!(path = %path.display(), bytes = data.len(), "image saved");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    static DIR_SEQ: AtomicU32 = AtomicU32::new(0);

    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!(
            "viewfinder-photo-test-{}-{}",
            std::process::id(),
            DIR_SEQ.fetch_add(1, Ordering::SeqCst)
        ))
    }

    #[test]
    fn test_save_creates_dir_and_names_by_prefix() {
        let dir = scratch_dir();
        let writer = PhotoWriter::new(&dir, "IMG");

        let path = writer.save(&[1, 2, 3]).unwrap();

        assert!(path.starts_with(&dir));
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("IMG_"));
        assert!(name.ends_with(".jpg"));
        assert_eq!(fs::read(&path).unwrap(), vec![1, 2, 3]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_save_into_unwritable_dir_fails() {
        // A path that cannot be a directory because a file occupies it.
        let dir = scratch_dir();
        fs::create_dir_all(dir.parent().unwrap()).unwrap();
        fs::write(&dir, b"occupied").unwrap();

        let writer = PhotoWriter::new(&dir, "IMG");
        assert!(matches!(
            writer.save(&[0]),
            Err(StorageError::CreateDir { .. })
        ));

        fs::remove_file(&dir).unwrap();
    }
}
