//! Serialising rendered canvases into image containers.

use std::io::Cursor;

use image::ImageFormat;
use statusplate_core::profiling::profile_function;

use crate::error::{RenderError, RenderResult};
use crate::spec::RenderedImage;

/// Supported output containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Jpeg,
    Gif,
    Bmp,
}

impl OutputFormat {
    /// Parse a format name such as `png` or `JPEG` (case-insensitive).
    pub fn parse(name: &str) -> RenderResult<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "jpeg" | "jpg" => Ok(OutputFormat::Jpeg),
            "gif" => Ok(OutputFormat::Gif),
            "bmp" => Ok(OutputFormat::Bmp),
            _ => Err(RenderError::UnsupportedFormat {
                format: name.to_string(),
            }),
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Png => "image/png",
            OutputFormat::Jpeg => "image/jpeg",
            OutputFormat::Gif => "image/gif",
            OutputFormat::Bmp => "image/bmp",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpg",
            OutputFormat::Gif => "gif",
            OutputFormat::Bmp => "bmp",
        }
    }

    fn to_image_format(self) -> ImageFormat {
        match self {
            OutputFormat::Png => ImageFormat::Png,
            OutputFormat::Jpeg => ImageFormat::Jpeg,
            OutputFormat::Gif => ImageFormat::Gif,
            OutputFormat::Bmp => ImageFormat::Bmp,
        }
    }
}

/// Encoded image bytes ready to be sent.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    pub bytes: Vec<u8>,
    pub format: OutputFormat,
}

impl EncodedImage {
    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }
}

/// Encode a rendered canvas.
pub fn encode(image: &RenderedImage, format: OutputFormat) -> RenderResult<EncodedImage> {
    profile_function!();

    let mut cursor = Cursor::new(Vec::new());
    image.pixels().write_to(&mut cursor, format.to_image_format())?;

    Ok(EncodedImage {
        bytes: cursor.into_inner(),
        format,
    })
}
