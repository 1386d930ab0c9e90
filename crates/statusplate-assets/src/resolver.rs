//! Font resolution: local cache first, remote repository on a miss.

use std::sync::Arc;

use parking_lot::Mutex;
use statusplate_core::alloc::HashMap;
use statusplate_core::profiling::profile_function;

use crate::asset::FontAsset;
use crate::cache::FontCache;
use crate::error::{FontError, FontResult};
use crate::name::FontName;
use crate::repository::{FontRepository, select_entry};

/// Turns font names into font files on local disk.
///
/// Safe to share between request threads. Downloads of the same font name
/// are serialised, so concurrent first requests for an uncached font fetch it
/// once; different names download in parallel.
pub struct FontResolver {
    cache: FontCache,
    repository: Box<dyn FontRepository>,
    /// One lock per font name currently being resolved remotely.
    downloads: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl FontResolver {
    pub fn new(cache: FontCache, repository: impl FontRepository + 'static) -> Self {
        Self {
            cache,
            repository: Box::new(repository),
            downloads: Mutex::new(HashMap::new()),
        }
    }

    pub fn cache(&self) -> &FontCache {
        &self.cache
    }

    /// Resolve a requested font name (extension optional).
    pub fn resolve(&self, requested: &str) -> FontResult<FontAsset> {
        let name = FontName::new(requested)?;
        self.resolve_name(&name)
    }

    /// Resolve an already normalised font name.
    ///
    /// A cache hit never touches the repository. On a miss the index is
    /// fetched once and the selected file downloaded once; failures are not
    /// retried.
    pub fn resolve_name(&self, name: &FontName) -> FontResult<FontAsset> {
        profile_function!();

        if let Some(asset) = self.cached(name) {
            tracing::debug!("Font cache hit: {}", name);
            return Ok(asset);
        }

        let lock = self.download_lock(name);
        let result = {
            let _guard = lock.lock();
            match self.cached(name) {
                Some(asset) => {
                    tracing::debug!("Font {} was downloaded by another request", name);
                    Ok(asset)
                }
                None => self.download(name),
            }
        };
        self.release_download_lock(name, lock);

        result
    }

    fn cached(&self, name: &FontName) -> Option<FontAsset> {
        self.cache
            .contains(name)
            .then(|| FontAsset::cached(self.cache.path_for(name), name.as_str()))
    }

    fn download(&self, name: &FontName) -> FontResult<FontAsset> {
        let entries = self.repository.list_entries().inspect_err(|e| {
            tracing::error!("Can't list font repository: {}", e);
        })?;

        let Some(entry) = select_entry(&entries, name) else {
            tracing::error!("Can't find font {} in the repository", name);
            return Err(FontError::NotFound {
                name: name.to_string(),
            });
        };

        tracing::info!("Downloading font {} from {}", name, entry.path);
        let bytes = self.repository.fetch(&entry.path).inspect_err(|e| {
            tracing::error!("Can't download font: {}", e);
        })?;

        let local_path = self.cache.store(name, &bytes).inspect_err(|e| {
            tracing::error!("Can't store font: {}", e);
        })?;

        tracing::info!(
            "Stored font {} ({} bytes) at {}",
            name,
            bytes.len(),
            local_path.display()
        );
        Ok(FontAsset::downloaded(local_path, entry.path.clone()))
    }

    fn download_lock(&self, name: &FontName) -> Arc<Mutex<()>> {
        self.downloads
            .lock()
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Drop the map entry once no other request is waiting on it.
    fn release_download_lock(&self, name: &FontName, lock: Arc<Mutex<()>>) {
        let mut downloads = self.downloads.lock();
        if Arc::strong_count(&lock) == 2 {
            downloads.remove(name.as_str());
        }
    }
}
