use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::errors::Result;

/// Asset reader trait.
/// Reads raw bytes for a URI relative to the reader's root.
pub trait AssetReader {
    fn read_bytes(&self, uri: &str) -> Result<Vec<u8>>;
}

/// Local file reader.
pub struct FileAssetReader {
    root_path: PathBuf,
}

impl FileAssetReader {
    /// `path` may be a directory or a file inside the root directory.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let root_path = if path.is_file() {
            path.parent().unwrap_or(Path::new(".")).to_path_buf()
        } else {
            path.to_path_buf()
        };
        Self { root_path }
    }

    #[inline]
    #[must_use]
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }
}

impl AssetReader for FileAssetReader {
    fn read_bytes(&self, uri: &str) -> Result<Vec<u8>> {
        let path = self.root_path.join(uri);
        log::debug!("Reading {}", path.display());
        Ok(std::fs::read(&path)?)
    }
}

/// In-memory reader, for data bundled into the binary or fetched by the host.
#[derive(Default)]
pub struct MemoryAssetReader {
    files: HashMap<String, Vec<u8>>,
}

impl MemoryAssetReader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, uri: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.files.insert(uri.into(), bytes.into());
    }

    #[must_use]
    pub fn with(mut self, uri: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(uri, bytes);
        self
    }
}

impl AssetReader for MemoryAssetReader {
    fn read_bytes(&self, uri: &str) -> Result<Vec<u8>> {
        self.files.get(uri).cloned().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, format!("{uri} not found")).into()
        })
    }
}
