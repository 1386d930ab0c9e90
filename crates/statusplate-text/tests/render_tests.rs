//! Integration tests for text-fit rendering.
//!
//! The bundled test font is copied into a temporary font cache under a
//! repository-style name.

use std::sync::Arc;

use statusplate_assets::{FontCache, FontError, FontResolver};
use cosmic_text::SwashCache;
use statusplate_test_utils::{MockFontRepository, test_font_path};
use statusplate_text::*;

const TEST_FONT: &str = "TestFont-Regular";

struct Fixture {
    _dir: tempfile::TempDir,
    renderer: TextFitRenderer,
    repo: Arc<MockFontRepository>,
}

fn fixture() -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    std::fs::copy(test_font_path(), dir.path().join(format!("{TEST_FONT}.ttf"))).unwrap();

    let repo = Arc::new(MockFontRepository::new());
    let resolver = FontResolver::new(FontCache::new(dir.path()), repo.clone());
    Fixture {
        _dir: dir,
        renderer: TextFitRenderer::new(Arc::new(resolver)),
        repo,
    }
}

fn spec(text: &str) -> RenderSpec {
    RenderSpec::new(text).font(TEST_FONT)
}

fn count_pixels(image: &RenderedImage, rgb: [u8; 3]) -> usize {
    image.pixels().pixels().filter(|p| p.0 == rgb).count()
}

// ============================================================================
// Fit Tests
// ============================================================================

#[test]
fn test_single_letter_fits_above_minimum() {
    let fx = fixture();

    let image = fx.renderer.render(&spec("A").size(1024, 600)).unwrap();

    assert!(image.font_size() > MIN_FONT_SIZE);
    assert!(image.font_size() <= 200);
    assert_eq!((image.width(), image.height()), (1024, 600));
}

#[test]
fn test_text_block_always_inside_canvas() {
    let fx = fixture();

    let texts = [
        "A",
        "Busy",
        "Call in progress",
        "Queue: 12 callers\\nLongest wait 03:15",
        "The quick brown fox jumps over the lazy dog",
    ];
    let canvases = [(1024, 600), (320, 240), (64, 64), (1200, 80)];

    for text in texts {
        for (width, height) in canvases {
            let image = fx.renderer.render(&spec(text).size(width, height)).unwrap();
            let (block_w, block_h) = image.text_block();
            assert!(block_w < width as f32, "{text:?} in {width}x{height}: width {block_w}");
            assert!(block_h < height as f32, "{text:?} in {width}x{height}: height {block_h}");
            assert!(image.font_size() <= 200);
        }
    }
}

#[test]
fn test_font_size_follows_shrink_steps() {
    let fx = fixture();

    let image = fx
        .renderer
        .render(&spec("A long status line that must shrink").size(400, 300))
        .unwrap();

    assert!(image.font_size() < 200);
    assert_eq!((200 - image.font_size()) % SHRINK_STEP, 0);
}

#[test]
fn test_unfittable_text_errors() {
    let fx = fixture();

    let result = fx
        .renderer
        .render(&spec("WWWWWWWWWWWWWWWWWWWWWWWWWWWWWW").size(2, 2));

    assert!(matches!(result, Err(RenderError::TextDoesNotFit { .. })));
}

// ============================================================================
// Layout Tests
// ============================================================================

#[test]
fn test_escaped_newline_renders_two_lines() {
    let fx = fixture();

    let one_line = fx
        .renderer
        .render(&spec("Hello").size(1024, 600).max_font_size(40))
        .unwrap();
    let two_lines = fx
        .renderer
        .render(&spec("Hello\\nHello").size(1024, 600).max_font_size(40))
        .unwrap();

    assert_eq!(one_line.font_size(), 40);
    assert_eq!(two_lines.font_size(), 40);
    assert!((two_lines.text_block().0 - one_line.text_block().0).abs() < 0.5);
    assert!(two_lines.text_block().1 > one_line.text_block().1 * 1.9);
}

#[test]
fn test_block_is_centered() {
    let fx = fixture();

    let image = fx.renderer.render(&spec("Centered").size(1024, 600)).unwrap();
    assert_eq!(image.origin(), centered_origin((1024, 600), image.text_block()));
}

#[test]
fn test_alignment_changes_short_lines() {
    let fx = fixture();

    let text = "I\\nWWWWWWWW";
    let left = fx
        .renderer
        .render(&spec(text).colors("black", "white").align(TextAlign::Left))
        .unwrap();
    let right = fx
        .renderer
        .render(&spec(text).colors("black", "white").align(TextAlign::Right))
        .unwrap();

    assert!((left.text_block().0 - right.text_block().0).abs() <= 2.0);
    assert_eq!(left.text_block().1, right.text_block().1);
    assert_ne!(left.pixels().as_raw(), right.pixels().as_raw());
}

// ============================================================================
// Pixel Tests
// ============================================================================

#[test]
fn test_colors_are_applied() {
    let fx = fixture();

    let image = fx
        .renderer
        .render(&spec("Ready").size(400, 200).colors("FF0000", "black"))
        .unwrap();

    assert_eq!(image.pixels().get_pixel(0, 0).0, [0, 0, 0]);
    assert_eq!(image.pixels().get_pixel(399, 199).0, [0, 0, 0]);
    assert!(count_pixels(&image, [255, 0, 0]) > 0);
}

#[test]
fn test_empty_text_is_plain_background() {
    let fx = fixture();

    let image = fx
        .renderer
        .render(&spec("").size(32, 16).colors("black", "navy"))
        .unwrap();

    assert_eq!(count_pixels(&image, [0, 0, 0x80]), 32 * 16);
}

#[test]
fn test_render_to_png_bytes() {
    let fx = fixture();

    let encoded = fx
        .renderer
        .render_to_bytes(&spec("On hold").size(300, 100))
        .unwrap();

    assert_eq!(encoded.mime_type(), "image/png");
    let decoded = image::load_from_memory(&encoded.bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (300, 100));
}

#[test]
fn test_overhanging_glyphs_are_not_clipped() {
    let mut font = LoadedFont::load(test_font_path()).unwrap();
    let mut cache = SwashCache::new();

    for (text, align) in [("(jÅg)", TextAlign::Center), ("fj\nƒ", TextAlign::Right), ("Wj", TextAlign::Left)] {
        let spec = RenderSpec::new(text).size(300, 150).align(align);
        let image = render_with_font(&mut font, &spec, Color::BLACK, Color::WHITE).unwrap();
        assert!(image.font_size() < 200, "{text:?} should have been shrunk");

        // Every pixel the layout covers at the chosen size must survive on
        // the canvas.
        let layout = TextLayout::new(&mut font, text, image.font_size(), align);
        let mut covered = std::collections::HashSet::new();
        layout.draw(&mut font, &mut cache, Color::BLACK, |x, y, _, _, color| {
            if color.a() > 0 {
                covered.insert((x, y));
            }
        });

        let inked = image.pixels().pixels().filter(|p| p.0 != [255, 255, 255]).count();
        assert_eq!(inked, covered.len(), "{text:?} lost pixels at the canvas edge");
    }
}

// ============================================================================
// Font Resolution Tests
// ============================================================================

#[test]
fn test_cached_font_makes_no_network_call() {
    let fx = fixture();

    fx.renderer.render(&spec("Cached").size(200, 100)).unwrap();
    fx.renderer
        .render(&spec("Cached").font(format!("{TEST_FONT}.ttf")).size(200, 100))
        .unwrap();

    assert_eq!(fx.repo.call_count(), 0);
}

#[test]
fn test_unknown_font_renders_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let repo = Arc::new(MockFontRepository::new());
    repo.add_font("ofl/roboto/Roboto-Regular.ttf", vec![0, 1, 0, 0]);
    let resolver = FontResolver::new(FontCache::new(dir.path()), repo.clone());
    let renderer = TextFitRenderer::new(Arc::new(resolver));

    let result = renderer.render(&RenderSpec::new("hello").font("DefinitelyNotARealFont12345"));

    assert!(matches!(result, Err(RenderError::Font(FontError::NotFound { .. }))));
    assert_eq!(repo.count_fetches(), 0);
}

#[test]
fn test_bad_parameters_never_resolve_fonts() {
    let dir = tempfile::tempdir().unwrap();
    let repo = Arc::new(MockFontRepository::new());
    let resolver = FontResolver::new(FontCache::new(dir.path()), repo.clone());
    let renderer = TextFitRenderer::new(Arc::new(resolver));

    let bad_color = renderer.render(&RenderSpec::new("x").colors("nope", "white"));
    let bad_size = renderer.render(&RenderSpec::new("x").size(0, 10));
    let bad_format = renderer.render_to_bytes(&RenderSpec::new("x").format("tiff"));

    assert!(matches!(bad_color, Err(RenderError::InvalidColor { .. })));
    assert!(matches!(bad_size, Err(RenderError::InvalidParameter { .. })));
    assert!(matches!(bad_format, Err(RenderError::UnsupportedFormat { .. })));
    assert_eq!(repo.call_count(), 0);
}

#[test]
fn test_corrupt_cached_font_is_render_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("Corrupt.ttf"), b"<html>rate limited</html>").unwrap();
    let resolver = FontResolver::new(FontCache::new(dir.path()), MockFontRepository::new());
    let renderer = TextFitRenderer::new(Arc::new(resolver));

    let result = renderer.render(&RenderSpec::new("x").font("Corrupt"));

    match result {
        Err(RenderError::InvalidFont { path, .. }) => {
            assert_eq!(path, dir.path().join("Corrupt.ttf"));
        }
        other => panic!("expected invalid font, got {:?}", other.map(|i| i.font_size())),
    }
}
