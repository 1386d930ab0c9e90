use std::path::{Path, PathBuf};
use std::sync::Arc;

use cosmic_text::fontdb;

use crate::error::{RenderError, RenderResult};
use crate::format::FontFormat;

/// A single font file loaded into its own cosmic-text font system.
///
/// Only this font is in the database, so shaping never silently falls back
/// to a system font. Not shared between requests.
pub struct LoadedFont {
    family: String,
    format: FontFormat,
    font_system: cosmic_text::FontSystem,
}

impl LoadedFont {
    /// Load a font file from disk.
    pub fn load(path: impl AsRef<Path>) -> RenderResult<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|e| RenderError::InvalidFont {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_bytes(data, path)
    }

    /// Load a font from bytes. `origin` is only used for messages.
    pub fn from_bytes(data: Vec<u8>, origin: impl Into<PathBuf>) -> RenderResult<Self> {
        let origin = origin.into();
        let format = FontFormat::detect(&data);
        if format == FontFormat::Unknown && data.len() > 4 {
            tracing::warn!(
                "Font file '{}' has unrecognized format (magic: {:02x?}), loading anyway",
                origin.display(),
                &data[..4]
            );
        }

        let mut db = fontdb::Database::new();
        db.load_font_source(fontdb::Source::Binary(Arc::new(data)));

        let family = db
            .faces()
            .find_map(|face| face.families.first().map(|(family, _)| family.clone()))
            .ok_or_else(|| RenderError::InvalidFont {
                path: origin.clone(),
                message: format!("no usable font face ({:?})", format),
            })?;

        tracing::debug!("Loaded font family '{}' from {}", family, origin.display());

        let font_system = cosmic_text::FontSystem::new_with_locale_and_db(
            sys_locale::get_locale().unwrap_or_else(|| String::from("en-US")),
            db,
        );

        Ok(Self {
            family,
            format,
            font_system,
        })
    }

    /// The family name of the loaded face.
    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn format(&self) -> FontFormat {
        self.format
    }

    /// Borrow the family name and the font system at the same time.
    pub(crate) fn parts(&mut self) -> (&str, &mut cosmic_text::FontSystem) {
        (&self.family, &mut self.font_system)
    }
}
