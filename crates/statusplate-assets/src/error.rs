//! Error types for font resolution.

use std::fmt;
use std::path::PathBuf;

/// Errors that can occur while resolving a font.
#[derive(Debug)]
pub enum FontError {
    /// The requested name cannot be used as a cache file name.
    InvalidName {
        /// The name as requested.
        name: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// Neither the cache nor the repository has a matching font.
    NotFound {
        /// The normalised font file name.
        name: String,
    },

    /// The repository index could not be fetched or parsed.
    Index {
        /// The index location.
        url: String,
        /// Description of the error.
        message: String,
    },

    /// A matched font could not be downloaded.
    Download {
        /// The repository path that was being downloaded.
        path: String,
        /// Description of the error.
        message: String,
    },

    /// Reading from or writing to the font cache failed.
    IoError {
        /// The path that failed.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },
}

impl FontError {
    /// Whether the failure came from talking to the remote repository.
    pub fn is_remote(&self) -> bool {
        matches!(self, FontError::Index { .. } | FontError::Download { .. })
    }
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontError::InvalidName { name, reason } => {
                write!(f, "Invalid font name '{}': {}", name, reason)
            }
            FontError::NotFound { name } => write!(f, "Font not found: {}", name),
            FontError::Index { url, message } => {
                write!(f, "Failed to fetch font index from '{}': {}", url, message)
            }
            FontError::Download { path, message } => {
                write!(f, "Failed to download font '{}': {}", path, message)
            }
            FontError::IoError { path, source } => {
                write!(f, "IO error on '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for FontError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FontError::IoError { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type alias for font resolution.
pub type FontResult<T> = Result<T, FontError>;
