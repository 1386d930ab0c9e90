//! Request handling, independent of the HTTP transport.

use std::sync::Arc;

use statusplate_assets::{FontError, FontResolver};
use statusplate_core::RenderDefaults;
use statusplate_core::profiling::profile_function;
use statusplate_text::{RenderError, TextFitRenderer};
use tiny_http::Method;
use url::Url;

use crate::params::RenderParams;

/// Parameter documentation served when no text is given.
pub const USAGE: &str = "\
Converts text to an image with various customization options.

Query parameters:
    text: The text to be displayed on the image. A literal \\n starts a new line. (required)
    font: Name of the font file, with or without .ttf. (default: \"FrederickatheGreat-Regular\")
    width: Width of the image in pixels, at most 8192. (default: 1024)
    height: Height of the image in pixels, at most 8192. (default: 600)
        width x height may not exceed 16777216 pixels.
    color_text: Text color name or hex code. (default: \"1400FF\")
    color_bg: Background color name or hex code. (default: \"white\")
    font_size: Maximum font size, at most 2000. (default: 200)
    font_align: Horizontal alignment of the lines within the text block. (default: \"center\")
        Options: \"left\", \"center\", \"right\"
    img_format: Format of the generated image. (default: \"png\")
        Options: \"png\", \"jpeg\", \"gif\", \"bmp\"

Returns:
    The generated image, or a plain-text error with a 4xx/5xx status.
";

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// A fully formed response, ready to be written by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub content_type: String,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, content_type: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            status,
            content_type: content_type.into(),
            body,
        }
    }

    pub fn text(status: u16, message: impl Into<String>) -> Self {
        Self::new(status, TEXT_PLAIN, message.into().into_bytes())
    }

    pub fn from_error(err: &RenderError) -> Self {
        Self::text(status_code(err), format!("{}\n", err))
    }
}

/// HTTP status for a failed render.
pub fn status_code(err: &RenderError) -> u16 {
    if err.is_client_error() {
        return 400;
    }

    match err {
        RenderError::Font(FontError::NotFound { .. }) => 404,
        RenderError::Font(font_err) if font_err.is_remote() => 502,
        RenderError::TextDoesNotFit { .. } => 422,
        _ => 500,
    }
}

/// State shared by all workers.
pub struct AppState {
    renderer: TextFitRenderer,
    defaults: RenderDefaults,
}

impl AppState {
    pub fn new(resolver: Arc<FontResolver>, defaults: RenderDefaults) -> Self {
        Self {
            renderer: TextFitRenderer::new(resolver),
            defaults,
        }
    }

    /// Answer one request. `target` is the request target as sent by the
    /// client, usually origin-form such as `/?text=hi`.
    pub fn handle(&self, method: &Method, target: &str) -> HttpResponse {
        profile_function!();

        if !matches!(method, Method::Get | Method::Head) {
            return HttpResponse::text(405, "Only GET is supported\n");
        }

        let Some(url) = parse_target(target) else {
            return HttpResponse::text(400, "Malformed request target\n");
        };
        if !matches!(url.path(), "/" | "") {
            return HttpResponse::text(404, "Not found\n");
        }

        let params = RenderParams::from_query(url.query_pairs());
        let spec = match params.to_spec(&self.defaults) {
            Ok(Some(spec)) => spec,
            Ok(None) => return HttpResponse::text(200, USAGE),
            Err(err) => return self.failure(err),
        };

        match self.renderer.render_to_bytes(&spec) {
            Ok(encoded) => {
                tracing::debug!(
                    "Rendered {}x{} {} ({} bytes) with font '{}'",
                    spec.width,
                    spec.height,
                    encoded.format.extension(),
                    encoded.bytes.len(),
                    spec.font_name
                );
                HttpResponse::new(200, encoded.mime_type(), encoded.bytes)
            }
            Err(err) => self.failure(err),
        }
    }

    fn failure(&self, err: RenderError) -> HttpResponse {
        let response = HttpResponse::from_error(&err);
        if response.status >= 500 {
            tracing::error!("Render failed: {}", err);
        } else {
            tracing::warn!("Rejected request: {}", err);
        }
        response
    }
}

fn parse_target(target: &str) -> Option<Url> {
    let base = Url::parse("http://localhost/").ok()?;
    base.join(target).ok()
}
