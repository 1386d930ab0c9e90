/// Detected font file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFormat {
    /// TrueType font (.ttf)
    TrueType,
    /// OpenType font (.otf)
    OpenType,
    /// Web Open Font Format (.woff)
    Woff,
    /// Web Open Font Format 2 (.woff2)
    Woff2,
    /// TrueType Collection (.ttc)
    TrueTypeCollection,
    /// Unknown format
    Unknown,
}

impl FontFormat {
    /// Detect font format from the magic bytes.
    pub fn detect(data: &[u8]) -> Self {
        if data.len() < 4 {
            return FontFormat::Unknown;
        }

        match &data[0..4] {
            // TrueType: 0x00010000 or 'true'
            [0x00, 0x01, 0x00, 0x00] | [b't', b'r', b'u', b'e'] => FontFormat::TrueType,
            // OpenType: 'OTTO'
            [b'O', b'T', b'T', b'O'] => FontFormat::OpenType,
            // WOFF: 'wOFF'
            [b'w', b'O', b'F', b'F'] => FontFormat::Woff,
            // WOFF2: 'wOF2'
            [b'w', b'O', b'F', b'2'] => FontFormat::Woff2,
            // TrueType Collection: 'ttcf'
            [b't', b't', b'c', b'f'] => FontFormat::TrueTypeCollection,
            _ => FontFormat::Unknown,
        }
    }

    /// Whether the rasteriser can read this format directly.
    pub fn is_sfnt(&self) -> bool {
        matches!(
            self,
            FontFormat::TrueType | FontFormat::OpenType | FontFormat::TrueTypeCollection
        )
    }
}
