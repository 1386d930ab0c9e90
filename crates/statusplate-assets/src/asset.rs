use std::path::{Path, PathBuf};

/// Where a resolved font came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontOrigin {
    /// Already present in the font cache.
    Cached,
    /// Downloaded from the repository during this resolution.
    Downloaded,
}

/// A font available on local disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontAsset {
    local_path: PathBuf,
    /// Repository path for downloads, the cache file name for cache hits.
    source_name: String,
    origin: FontOrigin,
}

impl FontAsset {
    pub fn cached(local_path: impl Into<PathBuf>, source_name: impl Into<String>) -> Self {
        Self {
            local_path: local_path.into(),
            source_name: source_name.into(),
            origin: FontOrigin::Cached,
        }
    }

    pub fn downloaded(local_path: impl Into<PathBuf>, repository_path: impl Into<String>) -> Self {
        Self {
            local_path: local_path.into(),
            source_name: repository_path.into(),
            origin: FontOrigin::Downloaded,
        }
    }

    pub fn local_path(&self) -> &Path {
        &self.local_path
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn origin(&self) -> &FontOrigin {
        &self.origin
    }
}
