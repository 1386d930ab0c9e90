//! Statusplate Text - text-fit rendering with cosmic-text
//!
//! This crate turns a [`RenderSpec`] into an encoded image:
//! - Font files are resolved through `statusplate-assets` and loaded into a
//!   private cosmic-text font system
//! - The font size shrinks from the requested maximum until the text block
//!   fits inside the canvas, then the block is centered
//! - Glyphs are rasterised on the CPU and the canvas is encoded with `image`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use statusplate_assets::{FontCache, FontResolver, HttpFontRepository, DEFAULT_FETCH_TIMEOUT};
//! use statusplate_text::{RenderSpec, TextAlign, TextFitRenderer};
//!
//! let resolver = FontResolver::new(
//!     FontCache::new("fonts"),
//!     HttpFontRepository::google_fonts(DEFAULT_FETCH_TIMEOUT),
//! );
//! let renderer = TextFitRenderer::new(Arc::new(resolver));
//!
//! let spec = RenderSpec::new("Line 1\\nLine 2")
//!     .font("Roboto-Regular")
//!     .size(800, 480)
//!     .colors("white", "black")
//!     .align(TextAlign::Left);
//!
//! let png = renderer.render_to_bytes(&spec).unwrap();
//! std::fs::write("status.png", &png.bytes).unwrap();
//! ```

pub mod color;
pub mod encode;
pub mod error;
pub mod fit;
pub mod font;
pub mod format;
pub mod raster;
pub mod renderer;
pub mod shaping;
pub mod spec;
pub mod text;

pub use color::Color;
pub use encode::{EncodedImage, OutputFormat, encode};
pub use error::{RenderError, RenderResult};
pub use fit::{FitResult, MAX_FONT_SIZE, MIN_FONT_SIZE, SHRINK_STEP, centered_origin, fit_font_size};
pub use font::LoadedFont;
pub use format::FontFormat;
pub use raster::Canvas;
pub use renderer::{TextFitRenderer, render_with_font};
pub use shaping::{LINE_HEIGHT, TextExtent, TextLayout};
pub use spec::{MAX_CANVAS_DIMENSION, MAX_CANVAS_PIXELS, RenderSpec, RenderedImage};
pub use text::{TextAlign, normalize_newlines};
