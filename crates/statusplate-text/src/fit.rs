//! The font-size search that keeps text inside the canvas.

use statusplate_core::profiling::profile_function;

use crate::error::{RenderError, RenderResult};

/// Amount the font size shrinks by on every failed attempt.
pub const SHRINK_STEP: u32 = 15;

/// Smallest font size the search will try.
pub const MIN_FONT_SIZE: u32 = 1;

/// Largest starting size accepted. Bounds the search to at most
/// `MAX_FONT_SIZE / SHRINK_STEP + 2` measurements.
pub const MAX_FONT_SIZE: u32 = 2000;

/// Outcome of a successful fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitResult {
    /// The chosen font size.
    pub font_size: u32,
    /// Measured (width, height) of the text block at that size.
    pub block: (f32, f32),
    /// Number of sizes measured.
    pub attempts: u32,
}

/// Find the largest size in `max, max - 15, max - 30, ...` whose measured
/// block is strictly smaller than the canvas on both axes.
///
/// When the next step would drop below [`MIN_FONT_SIZE`] that size is tried
/// once more; if the text still does not fit the search fails with
/// [`RenderError::TextDoesNotFit`]. The size never increases.
pub fn fit_font_size<F>(max_font_size: u32, canvas: (u32, u32), mut measure: F) -> RenderResult<FitResult>
where
    F: FnMut(u32) -> (f32, f32),
{
    profile_function!();

    if max_font_size < MIN_FONT_SIZE {
        return Err(RenderError::InvalidParameter {
            name: "font_size",
            message: format!("must be at least {}", MIN_FONT_SIZE),
        });
    }
    if max_font_size > MAX_FONT_SIZE {
        return Err(RenderError::InvalidParameter {
            name: "font_size",
            message: format!("must be at most {}", MAX_FONT_SIZE),
        });
    }

    let (canvas_width, canvas_height) = (canvas.0 as f32, canvas.1 as f32);
    let mut font_size = max_font_size;
    let mut attempts = 0;

    loop {
        let block = measure(font_size);
        attempts += 1;

        if block.0 < canvas_width && block.1 < canvas_height {
            tracing::debug!(
                "Fit font size {} ({:.1}x{:.1}) after {} attempts",
                font_size,
                block.0,
                block.1,
                attempts
            );
            return Ok(FitResult {
                font_size,
                block,
                attempts,
            });
        }

        if font_size == MIN_FONT_SIZE {
            return Err(RenderError::TextDoesNotFit {
                width: canvas.0,
                height: canvas.1,
                min_font_size: MIN_FONT_SIZE,
            });
        }

        font_size = font_size.saturating_sub(SHRINK_STEP).max(MIN_FONT_SIZE);
    }
}

/// Top-left point that centers a block of `block` size on the canvas,
/// truncated towards zero to whole pixels.
pub fn centered_origin(canvas: (u32, u32), block: (f32, f32)) -> (i32, i32) {
    let x = (canvas.0 as f32 - block.0) / 2.0;
    let y = (canvas.1 as f32 - block.1) / 2.0;
    (x as i32, y as i32)
}
