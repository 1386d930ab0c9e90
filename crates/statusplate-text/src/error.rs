use std::path::PathBuf;

use statusplate_assets::FontError;

/// Errors that can occur while rendering text to an image.
#[derive(Debug)]
pub enum RenderError {
    /// The font could not be resolved.
    Font(FontError),

    /// The font file exists but cannot be used for rendering.
    InvalidFont { path: PathBuf, message: String },

    /// A color was neither a known name nor a hex code.
    InvalidColor { value: String },

    /// A render parameter was out of range or malformed.
    InvalidParameter {
        name: &'static str,
        message: String,
    },

    /// The text does not fit the canvas even at the smallest font size.
    TextDoesNotFit {
        width: u32,
        height: u32,
        min_font_size: u32,
    },

    /// The requested output container is not supported.
    UnsupportedFormat { format: String },

    /// Encoding the raster failed.
    EncodeError(String),
}

impl RenderError {
    /// Whether the error was caused by the request rather than the server.
    pub fn is_client_error(&self) -> bool {
        match self {
            RenderError::Font(FontError::InvalidName { .. })
            | RenderError::InvalidColor { .. }
            | RenderError::InvalidParameter { .. }
            | RenderError::UnsupportedFormat { .. } => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Font(err) => write!(f, "{}", err),
            RenderError::InvalidFont { path, message } => {
                write!(f, "Invalid font file '{}': {}", path.display(), message)
            }
            RenderError::InvalidColor { value } => write!(f, "Invalid color: '{}'", value),
            RenderError::InvalidParameter { name, message } => {
                write!(f, "Invalid parameter '{}': {}", name, message)
            }
            RenderError::TextDoesNotFit {
                width,
                height,
                min_font_size,
            } => write!(
                f,
                "Text does not fit a {}x{} canvas even at font size {}",
                width, height, min_font_size
            ),
            RenderError::UnsupportedFormat { format } => {
                write!(f, "Unsupported image format: '{}'", format)
            }
            RenderError::EncodeError(msg) => write!(f, "Failed to encode image: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Font(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FontError> for RenderError {
    fn from(err: FontError) -> Self {
        RenderError::Font(err)
    }
}

impl From<image::ImageError> for RenderError {
    fn from(err: image::ImageError) -> Self {
        RenderError::EncodeError(err.to_string())
    }
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
