//! Remote font repositories - where uncached fonts come from.

use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{FontError, FontResult};
use crate::name::FontName;

/// Tree listing of the Google Fonts repository.
pub const GOOGLE_FONTS_INDEX_URL: &str =
    "https://api.github.com/repos/google/fonts/git/trees/main?recursive=1";

/// Raw-content mirror of the Google Fonts repository.
pub const GOOGLE_FONTS_RAW_URL: &str = "https://raw.githubusercontent.com/google/fonts/main/";

pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Upper bound for the index document and for a single font file.
const MAX_BODY_SIZE: u64 = 128 * 1024 * 1024;

const USER_AGENT: &str = concat!("statusplate/", env!("CARGO_PKG_VERSION"));

/// Kind of an entry in a repository tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Blob,
    Tree,
    #[serde(other)]
    Other,
}

/// One path listed by a repository index.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepositoryEntry {
    pub path: String,
    #[serde(rename = "type", default = "RepositoryEntry::default_kind")]
    pub kind: EntryKind,
}

impl RepositoryEntry {
    /// Create a file entry.
    pub fn blob(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Blob,
        }
    }

    fn default_kind() -> EntryKind {
        EntryKind::Blob
    }

    /// Last path component.
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

#[derive(Deserialize)]
struct TreeListing {
    tree: Vec<RepositoryEntry>,
    #[serde(default)]
    truncated: bool,
}

/// Parse a git tree listing (`{"tree": [{"path", "type"}, ...]}`).
pub fn parse_tree_listing(url: &str, json: &[u8]) -> FontResult<Vec<RepositoryEntry>> {
    let listing: TreeListing = serde_json::from_slice(json).map_err(|e| FontError::Index {
        url: url.to_string(),
        message: format!("Invalid tree listing: {}", e),
    })?;

    if listing.truncated {
        tracing::warn!(
            "Font index from '{}' is truncated, some fonts will not be found",
            url
        );
    }

    Ok(listing.tree)
}

/// Pick the repository entry that best matches `name`.
///
/// An entry whose file name equals `name` wins, first one in index order.
/// Otherwise any file path containing `name` matches and the shortest path
/// wins, ties broken lexicographically, so the result does not depend on
/// the order of the upstream index.
pub fn select_entry<'a>(
    entries: &'a [RepositoryEntry],
    name: &FontName,
) -> Option<&'a RepositoryEntry> {
    let blobs = entries.iter().filter(|entry| entry.kind == EntryKind::Blob);

    if let Some(exact) = blobs.clone().find(|entry| entry.file_name() == name.as_str()) {
        return Some(exact);
    }

    blobs
        .filter(|entry| entry.path.contains(name.as_str()))
        .min_by(|a, b| a.path.len().cmp(&b.path.len()).then_with(|| a.path.cmp(&b.path)))
}

/// A remote catalogue of font files.
pub trait FontRepository: Send + Sync {
    /// List every path in the repository.
    fn list_entries(&self) -> FontResult<Vec<RepositoryEntry>>;

    /// Download the raw bytes at `path`.
    fn fetch(&self, path: &str) -> FontResult<Vec<u8>>;
}

impl<T: FontRepository + ?Sized> FontRepository for Arc<T> {
    fn list_entries(&self) -> FontResult<Vec<RepositoryEntry>> {
        (**self).list_entries()
    }

    fn fetch(&self, path: &str) -> FontResult<Vec<u8>> {
        (**self).fetch(path)
    }
}

/// Repository backed by a git tree listing and a raw-content mirror.
pub struct HttpFontRepository {
    agent: ureq::Agent,
    index_url: String,
    /// Always ends with a slash.
    raw_base_url: String,
}

impl HttpFontRepository {
    pub fn new(
        index_url: impl Into<String>,
        raw_base_url: impl AsRef<str>,
        timeout: Duration,
    ) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build();
        let agent: ureq::Agent = config.into();

        let mut raw_base_url = raw_base_url.as_ref().to_string();
        if !raw_base_url.ends_with('/') {
            raw_base_url.push('/');
        }

        Self {
            agent,
            index_url: index_url.into(),
            raw_base_url,
        }
    }

    /// The Google Fonts repository on GitHub.
    pub fn google_fonts(timeout: Duration) -> Self {
        Self::new(GOOGLE_FONTS_INDEX_URL, GOOGLE_FONTS_RAW_URL, timeout)
    }

    pub fn index_url(&self) -> &str {
        &self.index_url
    }

    /// Full mirror URL of a repository path.
    pub fn raw_url(&self, path: &str) -> String {
        format!("{}{}", self.raw_base_url, path.trim_start_matches('/'))
    }

    fn get_bytes(&self, url: &str) -> Result<Vec<u8>, ureq::Error> {
        let mut response = self
            .agent
            .get(url)
            .header("User-Agent", USER_AGENT)
            .call()?;
        response
            .body_mut()
            .with_config()
            .limit(MAX_BODY_SIZE)
            .read_to_vec()
    }
}

impl FontRepository for HttpFontRepository {
    fn list_entries(&self) -> FontResult<Vec<RepositoryEntry>> {
        tracing::debug!("Fetching font index from {}", self.index_url);
        let body = self.get_bytes(&self.index_url).map_err(|e| FontError::Index {
            url: self.index_url.clone(),
            message: e.to_string(),
        })?;
        parse_tree_listing(&self.index_url, &body)
    }

    fn fetch(&self, path: &str) -> FontResult<Vec<u8>> {
        let url = self.raw_url(path);
        tracing::debug!("Fetching font file {}", url);
        self.get_bytes(&url).map_err(|e| FontError::Download {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}
