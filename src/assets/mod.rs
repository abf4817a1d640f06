//! Animation data loading.
//!
//! Animations are addressed by name and stored as `<name>.json` under the
//! root of an [`AssetReader`].

pub mod data;
pub mod io;

pub use data::{AnimationData, CameraTrack, TriangleTrack};
pub use io::{AssetReader, FileAssetReader, MemoryAssetReader};

use crate::errors::{Result, TesseraError};

/// Resolves animation names to parsed [`AnimationData`].
pub struct AnimationLibrary<R: AssetReader> {
    reader: R,
}

impl<R: AssetReader> AnimationLibrary<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    #[must_use]
    pub fn reader(&self) -> &R {
        &self.reader
    }

    /// Loads `<name>.json`.
    pub fn load(&self, name: &str) -> Result<AnimationData> {
        if name.is_empty() || name.contains(['/', '\\']) || name.contains("..") {
            return Err(TesseraError::AnimationNotFound(name.to_string()));
        }

        let uri = format!("{name}.json");
        let bytes = self.reader.read_bytes(&uri).map_err(|err| match err {
            TesseraError::IoError(io) if io.kind() == std::io::ErrorKind::NotFound => {
                TesseraError::AnimationNotFound(name.to_string())
            }
            other => other,
        })?;

        let data = AnimationData::from_slice(&bytes)?;
        log::info!(
            "Loaded animation '{name}': {} camera keyframes, {} triangles",
            data.camera.frame_data.len(),
            data.triangles.len()
        );
        Ok(data)
    }
}
