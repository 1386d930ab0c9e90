use std::fmt;

use crate::error::{FontError, FontResult};

/// A validated font file name, always ending in [`FontName::EXTENSION`].
///
/// The name doubles as the file name inside the font cache, so anything that
/// could escape the cache directory is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontName(String);

impl FontName {
    pub const EXTENSION: &'static str = ".ttf";

    /// Normalise a requested font name, appending `.ttf` when missing.
    pub fn new(requested: &str) -> FontResult<Self> {
        let trimmed = requested.trim();
        let invalid = |reason| FontError::InvalidName {
            name: requested.to_string(),
            reason,
        };

        if trimmed.is_empty() {
            return Err(invalid("name is empty"));
        }
        if trimmed.contains(['/', '\\', '\0']) {
            return Err(invalid("name contains a path separator"));
        }
        if trimmed.contains("..") {
            return Err(invalid("name contains '..'"));
        }

        let mut name = trimmed.to_string();
        if !name.ends_with(Self::EXTENSION) {
            name.push_str(Self::EXTENSION);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FontName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FontName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
