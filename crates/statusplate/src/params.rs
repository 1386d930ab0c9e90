//! Query string parameters of the render endpoint.

use statusplate_core::RenderDefaults;
use statusplate_core::alloc::HashMap;
use statusplate_text::{RenderError, RenderResult, RenderSpec, TextAlign};

pub const TEXT: &str = "text";
pub const FONT: &str = "font";
pub const WIDTH: &str = "width";
pub const HEIGHT: &str = "height";
pub const COLOR_TEXT: &str = "color_text";
pub const COLOR_BG: &str = "color_bg";
pub const FONT_SIZE: &str = "font_size";
pub const FONT_ALIGN: &str = "font_align";
pub const IMG_FORMAT: &str = "img_format";

/// Decoded query parameters.
///
/// Blank values are dropped as if the key were absent, and a repeated key
/// keeps its last value.
#[derive(Debug, Clone, Default)]
pub struct RenderParams {
    values: HashMap<String, String>,
}

impl RenderParams {
    pub fn from_query<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut values = HashMap::new();
        for (key, value) in pairs {
            let value = value.as_ref();
            if value.trim().is_empty() {
                continue;
            }
            values.insert(key.as_ref().to_string(), value.to_string());
        }
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Whether a render was requested at all.
    pub fn has_text(&self) -> bool {
        self.values.contains_key(TEXT)
    }

    /// Build the render spec, filling omitted parameters from `defaults`.
    ///
    /// Returns `Ok(None)` when no text was given.
    pub fn to_spec(&self, defaults: &RenderDefaults) -> RenderResult<Option<RenderSpec>> {
        let Some(text) = self.get(TEXT) else {
            return Ok(None);
        };

        let mut spec = RenderSpec::from_defaults(text, defaults);
        if let Some(font) = self.get(FONT) {
            spec.font_name = font.to_string();
        }
        if let Some(width) = self.integer(WIDTH)? {
            spec.width = width;
        }
        if let Some(height) = self.integer(HEIGHT)? {
            spec.height = height;
        }
        if let Some(color) = self.get(COLOR_TEXT) {
            spec.color_text = color.to_string();
        }
        if let Some(color) = self.get(COLOR_BG) {
            spec.color_background = color.to_string();
        }
        if let Some(size) = self.integer(FONT_SIZE)? {
            spec.max_font_size = size;
        }
        if let Some(align) = self.get(FONT_ALIGN) {
            spec.alignment = TextAlign::parse(align)?;
        }
        if let Some(format) = self.get(IMG_FORMAT) {
            spec.output_format = format.to_string();
        }

        spec.validate()?;
        Ok(Some(spec))
    }

    fn integer(&self, name: &'static str) -> RenderResult<Option<u32>> {
        let Some(raw) = self.get(name) else {
            return Ok(None);
        };

        match raw.trim().parse::<u32>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => Err(RenderError::InvalidParameter {
                name,
                message: format!("expected a positive integer, got '{}'", raw),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> RenderParams {
        RenderParams::from_query(pairs.iter().copied())
    }

    #[test]
    fn test_defaults_applied() {
        let spec = params(&[("text", "hello")])
            .to_spec(&RenderDefaults::default())
            .unwrap()
            .unwrap();

        assert_eq!(spec, RenderSpec::new("hello"));
    }

    #[test]
    fn test_missing_text_is_none() {
        let spec = params(&[("font", "Roboto")]).to_spec(&RenderDefaults::default()).unwrap();
        assert!(spec.is_none());
    }

    #[test]
    fn test_blank_values_ignored() {
        let p = params(&[("text", ""), ("width", " ")]);
        assert!(!p.has_text());
        assert_eq!(p.get(WIDTH), None);
    }

    #[test]
    fn test_all_parameters() {
        let spec = params(&[
            ("text", "Busy"),
            ("font", "Roboto-Regular"),
            ("width", "320"),
            ("height", "240"),
            ("color_text", "red"),
            ("color_bg", "000000"),
            ("font_size", "90"),
            ("font_align", "right"),
            ("img_format", "jpeg"),
            ("unknown", "ignored"),
        ])
        .to_spec(&RenderDefaults::default())
        .unwrap()
        .unwrap();

        assert_eq!(spec.font_name, "Roboto-Regular");
        assert_eq!((spec.width, spec.height), (320, 240));
        assert_eq!(spec.color_text, "red");
        assert_eq!(spec.color_background, "000000");
        assert_eq!(spec.max_font_size, 90);
        assert_eq!(spec.alignment, TextAlign::Right);
        assert_eq!(spec.output_format, "jpeg");
    }

    #[test]
    fn test_last_value_wins() {
        let p = params(&[("text", "a"), ("text", "b")]);
        assert_eq!(p.get(TEXT), Some("b"));
    }

    #[test]
    fn test_bad_integers() {
        let defaults = RenderDefaults::default();
        for (key, value) in [("width", "wide"), ("height", "-5"), ("font_size", "1.5")] {
            let result = params(&[("text", "x"), (key, value)]).to_spec(&defaults);
            assert!(
                matches!(result, Err(RenderError::InvalidParameter { name, .. }) if name == key),
                "{key}={value}"
            );
        }
    }

    #[test]
    fn test_zero_size_rejected() {
        let result = params(&[("text", "x"), ("width", "0")]).to_spec(&RenderDefaults::default());
        assert!(matches!(result, Err(RenderError::InvalidParameter { .. })));
    }

    #[test]
    fn test_oversized_values_rejected() {
        let defaults = RenderDefaults::default();
        let huge = [("text", "a"), ("width", "4294967295"), ("height", "4294967295")];
        assert!(matches!(
            params(&huge).to_spec(&defaults),
            Err(RenderError::InvalidParameter { name: "width", .. })
        ));

        let result = params(&[("text", "a"), ("font_size", "268435455")]).to_spec(&defaults);
        assert!(matches!(result, Err(RenderError::InvalidParameter { name: "font_size", .. })));
    }

    #[test]
    fn test_bad_alignment() {
        let result =
            params(&[("text", "x"), ("font_align", "justify")]).to_spec(&RenderDefaults::default());
        assert!(matches!(result, Err(RenderError::InvalidParameter { name: "font_align", .. })));
    }
}
