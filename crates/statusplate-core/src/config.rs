/// Defaults applied to every render request for parameters the caller omits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderDefaults {
    /// Font name without extension.
    pub font: String,
    pub width: u32,
    pub height: u32,
    /// Text color, named color or hex code.
    pub color_text: String,
    /// Background color, named color or hex code.
    pub color_background: String,
    /// Starting size of the fit search.
    pub max_font_size: u32,
    /// One of `left`, `center`, `right`.
    pub alignment: String,
    /// Output container, e.g. `png`.
    pub output_format: String,
}

impl Default for RenderDefaults {
    fn default() -> Self {
        RenderDefaults {
            font: String::from("FrederickatheGreat-Regular"),
            width: 1024,
            height: 600,
            color_text: String::from("1400FF"),
            color_background: String::from("white"),
            max_font_size: 200,
            alignment: String::from("center"),
            output_format: String::from("png"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_canvas() {
        let defaults = RenderDefaults::default();
        assert_eq!((defaults.width, defaults.height), (1024, 600));
        assert_eq!(defaults.max_font_size, 200);
        assert_eq!(defaults.output_format, "png");
    }
}
