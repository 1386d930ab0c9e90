use crate::error::{RenderError, RenderResult};

/// Horizontal alignment of lines within the text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl TextAlign {
    /// Parse `left`, `center` or `right` (case-insensitive).
    pub fn parse(value: &str) -> RenderResult<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(TextAlign::Left),
            "center" => Ok(TextAlign::Center),
            "right" => Ok(TextAlign::Right),
            _ => Err(RenderError::InvalidParameter {
                name: "font_align",
                message: format!("expected left, center or right, got '{}'", value),
            }),
        }
    }

    pub(crate) fn to_cosmic(self) -> cosmic_text::Align {
        match self {
            TextAlign::Left => cosmic_text::Align::Left,
            TextAlign::Center => cosmic_text::Align::Center,
            TextAlign::Right => cosmic_text::Align::Right,
        }
    }
}

/// Turn the two-character sequence `\n` into a real line break.
///
/// Query strings cannot easily carry raw newlines, so callers escape them.
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\\n", "\n")
}
