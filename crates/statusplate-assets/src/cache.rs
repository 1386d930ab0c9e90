//! On-disk font cache.

use std::path::{Path, PathBuf};

use crate::error::{FontError, FontResult};
use crate::name::FontName;

/// Directory of downloaded fonts, one file per normalised font name.
///
/// Files are never evicted. Writes go through a temporary sibling file and a
/// rename, so a file that exists under its final name is always complete.
#[derive(Debug, Clone)]
pub struct FontCache {
    /// Directory holding the font files.
    base_path: PathBuf,
}

impl FontCache {
    /// Create a cache rooted at `base_path`. The directory is created lazily on
    /// the first store.
    pub fn new(base_path: impl AsRef<Path>) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Location a font with this name has (or would have) in the cache.
    pub fn path_for(&self, name: &FontName) -> PathBuf {
        self.base_path.join(name.as_str())
    }

    /// Check whether the font is present. The contents are not validated.
    pub fn contains(&self, name: &FontName) -> bool {
        self.path_for(name).is_file()
    }

    /// Persist font bytes under `name` and return the final path.
    pub fn store(&self, name: &FontName, bytes: &[u8]) -> FontResult<PathBuf> {
        std::fs::create_dir_all(&self.base_path).map_err(|e| FontError::IoError {
            path: self.base_path.clone(),
            source: e,
        })?;

        let final_path = self.path_for(name);
        let partial_path = self
            .base_path
            .join(format!("{}.{}.part", name, std::process::id()));

        std::fs::write(&partial_path, bytes).map_err(|e| FontError::IoError {
            path: partial_path.clone(),
            source: e,
        })?;

        if let Err(e) = std::fs::rename(&partial_path, &final_path) {
            let _ = std::fs::remove_file(&partial_path);
            return Err(FontError::IoError {
                path: final_path,
                source: e,
            });
        }

        Ok(final_path)
    }
}
