use std::sync::Arc;

use cosmic_text::SwashCache;
use statusplate_assets::FontResolver;
use statusplate_core::profiling::profile_function;

use crate::color::Color;
use crate::encode::{EncodedImage, OutputFormat, encode};
use crate::error::RenderResult;
use crate::fit::{centered_origin, fit_font_size};
use crate::font::LoadedFont;
use crate::raster::Canvas;
use crate::shaping::TextLayout;
use crate::spec::{RenderSpec, RenderedImage};
use crate::text::normalize_newlines;

/// Renders text specs into images, resolving fonts through a shared
/// [`FontResolver`].
///
/// Every call works on its own font system and canvas; only the resolver
/// (and with it the font cache) is shared.
pub struct TextFitRenderer {
    resolver: Arc<FontResolver>,
}

impl TextFitRenderer {
    pub fn new(resolver: Arc<FontResolver>) -> Self {
        Self { resolver }
    }

    /// Render `spec` into a raster.
    ///
    /// Parameters are validated before the font is resolved, so a bad request
    /// never causes a download.
    pub fn render(&self, spec: &RenderSpec) -> RenderResult<RenderedImage> {
        profile_function!();

        spec.validate()?;
        let text_color = Color::parse(&spec.color_text)?;
        let background = Color::parse(&spec.color_background)?;

        let asset = self.resolver.resolve(&spec.font_name)?;
        let mut font = LoadedFont::load(asset.local_path())?;

        render_with_font(&mut font, spec, text_color, background)
    }

    /// Render `spec` and encode it in the requested output format.
    pub fn render_to_bytes(&self, spec: &RenderSpec) -> RenderResult<EncodedImage> {
        let format = OutputFormat::parse(&spec.output_format)?;
        let image = self.render(spec)?;
        encode(&image, format)
    }
}

/// Fit, center and draw `spec.text` with an already loaded font.
///
/// Both the fit and the centering use the pixels the glyphs actually cover,
/// so overhanging glyphs are never clipped by the canvas edge.
pub fn render_with_font(
    font: &mut LoadedFont,
    spec: &RenderSpec,
    text_color: Color,
    background: Color,
) -> RenderResult<RenderedImage> {
    spec.validate()?;

    let text = normalize_newlines(&spec.text);
    let canvas_size = (spec.width, spec.height);

    // One glyph cache serves every attempt; entries are keyed by size.
    let mut swash_cache = SwashCache::new();
    let fit = fit_font_size(spec.max_font_size, canvas_size, |size| {
        TextLayout::new(font, &text, size, spec.alignment)
            .extent(font, &mut swash_cache)
            .size()
    })?;

    let layout = TextLayout::new(font, &text, fit.font_size, spec.alignment);
    let extent = layout.extent(font, &mut swash_cache);

    // `origin` is where the top-left of the drawn pixels lands.
    let origin = centered_origin(canvas_size, extent.size());
    let offset = (origin.0 - extent.left as i32, origin.1 - extent.top as i32);
    let mut canvas = Canvas::new(spec.width, spec.height, background);
    layout.draw(font, &mut swash_cache, text_color, |x, y, w, h, color| {
        canvas.blend_rect(offset.0 + x, offset.1 + y, w, h, color);
    });

    tracing::debug!(
        "Rendered {} line(s) at size {} into {}x{} at ({}, {})",
        layout.line_count(),
        fit.font_size,
        spec.width,
        spec.height,
        origin.0,
        origin.1
    );

    Ok(RenderedImage::new(
        canvas.into_image(),
        fit.font_size,
        extent.size(),
        origin,
    ))
}
