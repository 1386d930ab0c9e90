use image::RgbImage;
use statusplate_core::RenderDefaults;

use crate::error::{RenderError, RenderResult};
use crate::fit::MAX_FONT_SIZE;
use crate::text::TextAlign;

/// Longest accepted canvas side, in pixels.
pub const MAX_CANVAS_DIMENSION: u32 = 8192;

/// Largest accepted canvas area. 4096 x 4096 RGB is 48 MiB per request.
pub const MAX_CANVAS_PIXELS: u64 = 4096 * 4096;

/// Everything needed to render one image.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSpec {
    /// Text to draw. `\n` escapes are turned into line breaks when rendering.
    pub text: String,
    /// Font name, with or without the `.ttf` extension.
    pub font_name: String,
    pub width: u32,
    pub height: u32,
    pub color_text: String,
    pub color_background: String,
    /// Starting point of the fit search.
    pub max_font_size: u32,
    pub alignment: TextAlign,
    pub output_format: String,
}

impl RenderSpec {
    /// Create a spec with the built-in defaults.
    pub fn new(text: impl Into<String>) -> Self {
        Self::from_defaults(text, &RenderDefaults::default())
    }

    /// Create a spec from configured defaults.
    ///
    /// An unparsable default alignment falls back to centered.
    pub fn from_defaults(text: impl Into<String>, defaults: &RenderDefaults) -> Self {
        Self {
            text: text.into(),
            font_name: defaults.font.clone(),
            width: defaults.width,
            height: defaults.height,
            color_text: defaults.color_text.clone(),
            color_background: defaults.color_background.clone(),
            max_font_size: defaults.max_font_size,
            alignment: TextAlign::parse(&defaults.alignment).unwrap_or_default(),
            output_format: defaults.output_format.clone(),
        }
    }

    pub fn font(mut self, font_name: impl Into<String>) -> Self {
        self.font_name = font_name.into();
        self
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn colors(mut self, text: impl Into<String>, background: impl Into<String>) -> Self {
        self.color_text = text.into();
        self.color_background = background.into();
        self
    }

    pub fn max_font_size(mut self, max_font_size: u32) -> Self {
        self.max_font_size = max_font_size;
        self
    }

    pub fn align(mut self, alignment: TextAlign) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn format(mut self, output_format: impl Into<String>) -> Self {
        self.output_format = output_format.into();
        self
    }

    /// Check the numeric invariants: canvas and font size are positive and
    /// within [`MAX_CANVAS_DIMENSION`], [`MAX_CANVAS_PIXELS`] and
    /// [`MAX_FONT_SIZE`].
    pub fn validate(&self) -> RenderResult<()> {
        let in_range = |name: &'static str, value: u32, max: u32| {
            if value == 0 {
                Err(RenderError::InvalidParameter {
                    name,
                    message: String::from("must be greater than zero"),
                })
            } else if value > max {
                Err(RenderError::InvalidParameter {
                    name,
                    message: format!("must be at most {}", max),
                })
            } else {
                Ok(())
            }
        };
        in_range("width", self.width, MAX_CANVAS_DIMENSION)?;
        in_range("height", self.height, MAX_CANVAS_DIMENSION)?;
        in_range("font_size", self.max_font_size, MAX_FONT_SIZE)?;

        if u64::from(self.width) * u64::from(self.height) > MAX_CANVAS_PIXELS {
            return Err(RenderError::InvalidParameter {
                name: "width",
                message: format!(
                    "{}x{} canvas must be at most {} pixels in total",
                    self.width, self.height, MAX_CANVAS_PIXELS
                ),
            });
        }
        Ok(())
    }
}

/// A rendered canvas plus how the text was placed on it.
#[derive(Debug, Clone)]
pub struct RenderedImage {
    pixels: RgbImage,
    font_size: u32,
    text_block: (f32, f32),
    origin: (i32, i32),
}

impl RenderedImage {
    pub(crate) fn new(pixels: RgbImage, font_size: u32, text_block: (f32, f32), origin: (i32, i32)) -> Self {
        Self {
            pixels,
            font_size,
            text_block,
            origin,
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbImage {
        &self.pixels
    }

    /// Font size chosen by the fit search.
    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    /// (width, height) of the area the glyphs cover.
    pub fn text_block(&self) -> (f32, f32) {
        self.text_block
    }

    /// Top-left corner of that area on the canvas.
    pub fn origin(&self) -> (i32, i32) {
        self.origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let spec = RenderSpec::new("hello");
        assert_eq!(spec.font_name, "FrederickatheGreat-Regular");
        assert_eq!((spec.width, spec.height), (1024, 600));
        assert_eq!(spec.max_font_size, 200);
        assert_eq!(spec.alignment, TextAlign::Center);
        assert_eq!(spec.output_format, "png");
    }

    #[test]
    fn test_validate_rejects_zero() {
        assert!(RenderSpec::new("x").size(0, 10).validate().is_err());
        assert!(RenderSpec::new("x").size(10, 0).validate().is_err());
        assert!(RenderSpec::new("x").max_font_size(0).validate().is_err());
        assert!(RenderSpec::new("x").size(1, 1).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_oversized_canvas() {
        let huge = RenderSpec::new("x").size(u32::MAX, u32::MAX);
        assert!(matches!(huge.validate(), Err(RenderError::InvalidParameter { .. })));

        let too_wide = RenderSpec::new("x").size(MAX_CANVAS_DIMENSION + 1, 1);
        assert!(too_wide.validate().is_err());

        // Both sides in range, area over the limit.
        let too_large = RenderSpec::new("x").size(MAX_CANVAS_DIMENSION, MAX_CANVAS_DIMENSION);
        assert!(too_large.validate().is_err());

        assert!(RenderSpec::new("x").size(4096, 4096).validate().is_ok());
        assert!(RenderSpec::new("x").size(MAX_CANVAS_DIMENSION, 2048).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_oversized_font() {
        assert!(RenderSpec::new("x").max_font_size(MAX_FONT_SIZE).validate().is_ok());
        let err = RenderSpec::new("x").max_font_size(MAX_FONT_SIZE + 1).validate();
        assert!(matches!(err, Err(RenderError::InvalidParameter { name: "font_size", .. })));
    }
}
