//! Persistence of captured images and gallery registration.

mod media_index;
mod photo;

pub use media_index::{LogMediaIndex, MediaIndex};
pub use photo::{PhotoWriter, StorageError};
