//! Text layout and measurement with cosmic-text.

use cosmic_text::{Attrs, Buffer, Family, Metrics, Shaping, SwashCache, Wrap};
use statusplate_core::profiling::profile_function;

use crate::color::Color;
use crate::font::LoadedFont;
use crate::text::TextAlign;

/// Line height as a multiple of the font size.
pub const LINE_HEIGHT: f32 = 1.2;

/// Pixel rectangle covered by a layout, relative to the layout's top-left.
///
/// `left` and `top` go negative when glyphs overhang the layout box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextExtent {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl TextExtent {
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width(), self.height())
    }

    fn include(&mut self, left: f32, top: f32, right: f32, bottom: f32) {
        self.left = self.left.min(left);
        self.top = self.top.min(top);
        self.right = self.right.max(right);
        self.bottom = self.bottom.max(bottom);
    }
}

/// A shaped, unwrapped block of text at a fixed font size.
pub struct TextLayout {
    buffer: Buffer,
}

impl TextLayout {
    /// Shape `text` with `font` at `font_size`. Lines break only at `\n`.
    ///
    /// The block is as wide as its widest line, and narrower lines are
    /// aligned within it.
    pub fn new(font: &mut LoadedFont, text: &str, font_size: u32, align: TextAlign) -> Self {
        profile_function!();

        let (family, font_system) = font.parts();
        let size = font_size as f32;
        let mut buffer = Buffer::new(font_system, Metrics::new(size, size * LINE_HEIGHT));
        buffer.set_wrap(font_system, Wrap::None);
        buffer.set_size(font_system, None, None);

        let attrs = Attrs::new().family(Family::Name(family));
        buffer.set_text(font_system, text, attrs, Shaping::Advanced);

        let align = Some(align.to_cosmic());
        for line in &mut buffer.lines {
            line.set_align(align);
        }
        buffer.shape_until_scroll(font_system, false);

        // Unsized lines are each as wide as themselves; alignment needs the
        // shared block width.
        let block_width = buffer.layout_runs().fold(0.0f32, |w, run| w.max(run.line_w));
        if block_width > 0.0 {
            buffer.set_size(font_system, Some(block_width), None);
            buffer.shape_until_scroll(font_system, false);
        }

        Self { buffer }
    }

    /// Layout box: widest line by bottom of the last line.
    pub fn bounds(&self) -> (f32, f32) {
        let mut width: f32 = 0.0;
        let mut height: f32 = 0.0;

        for run in self.buffer.layout_runs() {
            width = width.max(run.line_w);
            height = height.max(run.line_top + run.line_height);
        }

        (width, height)
    }

    /// Everything [`TextLayout::draw`] can touch: the layout box joined with
    /// the rasterised image of every glyph.
    pub fn extent(&self, font: &mut LoadedFont, cache: &mut SwashCache) -> TextExtent {
        profile_function!();

        let (width, height) = self.bounds();
        let mut extent = TextExtent {
            left: 0.0,
            top: 0.0,
            right: width,
            bottom: height,
        };

        let (_, font_system) = font.parts();
        for run in self.buffer.layout_runs() {
            for glyph in run.glyphs.iter() {
                let physical = glyph.physical((0.0, 0.0), 1.0);
                let Some(image) = cache.get_image(font_system, physical.cache_key) else {
                    continue;
                };
                let placement = image.placement;
                if placement.width == 0 || placement.height == 0 {
                    continue;
                }

                let left = physical.x + placement.left;
                let top = run.line_y as i32 + physical.y - placement.top;
                extent.include(
                    left as f32,
                    top as f32,
                    (left + placement.width as i32) as f32,
                    (top + placement.height as i32) as f32,
                );
            }
        }

        extent
    }

    /// Number of visual lines.
    pub fn line_count(&self) -> usize {
        self.buffer.layout_runs().count()
    }

    /// Rasterise the block, calling `f(x, y, w, h, color)` for every covered
    /// rectangle in block coordinates. The color's alpha carries coverage.
    pub fn draw<F>(&self, font: &mut LoadedFont, cache: &mut SwashCache, color: Color, f: F)
    where
        F: FnMut(i32, i32, u32, u32, cosmic_text::Color),
    {
        profile_function!();
        let (_, font_system) = font.parts();
        self.buffer.draw(font_system, cache, color.to_cosmic(), f);
    }
}
