//! Mock implementation of FontRepository for testing.
//!
//! Serves fonts from memory and records every call, so tests can assert on
//! network traffic without a network.

use std::time::Duration;

use parking_lot::Mutex;
use statusplate_assets::{FontError, FontRepository, FontResult, RepositoryEntry};
use statusplate_core::alloc::HashMap;

/// Records a repository call for verification in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryCall {
    ListEntries,
    Fetch { path: String },
}

/// In-memory font repository.
///
/// Methods take `&self` and record calls through a `parking_lot::Mutex`, so
/// the mock can be shared behind an `Arc` with the resolver under test.
pub struct MockFontRepository {
    /// Recorded calls for verification
    calls: Mutex<Vec<RepositoryCall>>,

    /// Listed paths in index order
    entries: Mutex<Vec<RepositoryEntry>>,

    /// File contents keyed by path
    files: Mutex<HashMap<String, Vec<u8>>>,

    /// When set, listing the index fails with this message
    index_failure: Mutex<Option<String>>,

    /// Artificial latency added to every fetch
    fetch_delay: Mutex<Option<Duration>>,
}

impl MockFontRepository {
    /// Create an empty mock repository.
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            entries: Mutex::new(Vec::new()),
            files: Mutex::new(HashMap::new()),
            index_failure: Mutex::new(None),
            fetch_delay: Mutex::new(None),
        }
    }

    /// List `path` in the index and serve `bytes` for it.
    pub fn add_font(&self, path: impl Into<String>, bytes: Vec<u8>) {
        let path = path.into();
        self.entries.lock().push(RepositoryEntry::blob(path.clone()));
        self.files.lock().insert(path, bytes);
    }

    /// List `path` in the index without any downloadable content.
    pub fn add_broken_entry(&self, path: impl Into<String>) {
        self.entries.lock().push(RepositoryEntry::blob(path));
    }

    /// Add an arbitrary index entry (e.g. a directory).
    pub fn add_entry(&self, entry: RepositoryEntry) {
        self.entries.lock().push(entry);
    }

    /// Make every index listing fail.
    pub fn fail_index(&self, message: impl Into<String>) {
        *self.index_failure.lock() = Some(message.into());
    }

    /// Delay every fetch, to widen race windows in concurrency tests.
    pub fn set_fetch_delay(&self, delay: Duration) {
        *self.fetch_delay.lock() = Some(delay);
    }

    /// Get a copy of all recorded calls (for test assertions).
    pub fn calls(&self) -> Vec<RepositoryCall> {
        self.calls.lock().clone()
    }

    /// Count index listings.
    pub fn count_listings(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, RepositoryCall::ListEntries))
            .count()
    }

    /// Count file fetches.
    pub fn count_fetches(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, RepositoryCall::Fetch { .. }))
            .count()
    }

    /// Get total number of recorded calls.
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Clear recorded calls (useful between test steps).
    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }
}

impl Default for MockFontRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl FontRepository for MockFontRepository {
    fn list_entries(&self) -> FontResult<Vec<RepositoryEntry>> {
        self.calls.lock().push(RepositoryCall::ListEntries);

        if let Some(message) = self.index_failure.lock().clone() {
            return Err(FontError::Index {
                url: String::from("mock://index"),
                message,
            });
        }
        Ok(self.entries.lock().clone())
    }

    fn fetch(&self, path: &str) -> FontResult<Vec<u8>> {
        self.calls.lock().push(RepositoryCall::Fetch {
            path: path.to_string(),
        });

        let delay = *self.fetch_delay.lock();
        if let Some(delay) = delay {
            std::thread::sleep(delay);
        }

        self.files
            .lock()
            .get(path)
            .cloned()
            .ok_or_else(|| FontError::Download {
                path: path.to_string(),
                message: String::from("404 Not Found"),
            })
    }
}
