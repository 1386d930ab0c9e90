//! CPU canvas the text is drawn onto.

use image::{Rgb, RgbImage};

use crate::color::Color;

/// A fixed-size RGB pixel buffer.
pub struct Canvas {
    pixels: RgbImage,
}

impl Canvas {
    /// Create a canvas filled with `background`. Background alpha is ignored.
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            pixels: RgbImage::from_pixel(width, height, Rgb(background.to_rgb_u8())),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Blend `color` over a rectangle, using its alpha as coverage.
    /// Parts outside the canvas are clipped.
    pub fn blend_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: cosmic_text::Color) {
        let alpha = color.a() as u32;
        if alpha == 0 {
            return;
        }

        let x0 = x.max(0) as i64;
        let y0 = y.max(0) as i64;
        let x1 = (x as i64 + w as i64).min(self.width() as i64);
        let y1 = (y as i64 + h as i64).min(self.height() as i64);

        let src = [color.r() as u32, color.g() as u32, color.b() as u32];
        for py in y0..y1 {
            for px in x0..x1 {
                let pixel = self.pixels.get_pixel_mut(px as u32, py as u32);
                for (dst, src) in pixel.0.iter_mut().zip(src) {
                    *dst = ((src * alpha + *dst as u32 * (255 - alpha) + 127) / 255) as u8;
                }
            }
        }
    }

    pub fn into_image(self) -> RgbImage {
        self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_fill() {
        let canvas = Canvas::new(4, 3, Color::from_hex(0x102030)).into_image();
        assert_eq!(canvas.dimensions(), (4, 3));
        assert!(canvas.pixels().all(|p| p.0 == [0x10, 0x20, 0x30]));
    }

    #[test]
    fn test_opaque_blend_replaces() {
        let mut canvas = Canvas::new(4, 4, Color::WHITE);
        canvas.blend_rect(1, 1, 2, 2, cosmic_text::Color::rgba(0, 0, 255, 255));
        let image = canvas.into_image();

        assert_eq!(image.get_pixel(1, 1).0, [0, 0, 255]);
        assert_eq!(image.get_pixel(2, 2).0, [0, 0, 255]);
        assert_eq!(image.get_pixel(0, 0).0, [255, 255, 255]);
        assert_eq!(image.get_pixel(3, 3).0, [255, 255, 255]);
    }

    #[test]
    fn test_partial_coverage_mixes() {
        let mut canvas = Canvas::new(1, 1, Color::WHITE);
        canvas.blend_rect(0, 0, 1, 1, cosmic_text::Color::rgba(0, 0, 0, 128));
        let [r, g, b] = canvas.into_image().get_pixel(0, 0).0;

        assert_eq!(r, g);
        assert_eq!(g, b);
        assert!((126..=128).contains(&r));
    }

    #[test]
    fn test_clipping() {
        let mut canvas = Canvas::new(2, 2, Color::WHITE);
        canvas.blend_rect(-5, -5, 6, 6, cosmic_text::Color::rgba(255, 0, 0, 255));
        canvas.blend_rect(1, 1, 100, 100, cosmic_text::Color::rgba(0, 255, 0, 255));
        let image = canvas.into_image();

        assert_eq!(image.get_pixel(0, 0).0, [255, 0, 0]);
        assert_eq!(image.get_pixel(1, 1).0, [0, 255, 0]);
        assert_eq!(image.get_pixel(1, 0).0, [255, 255, 255]);
    }
}
