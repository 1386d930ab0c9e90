//! Font files for rendering tests.
//!
//! DejaVu Sans ships with this crate (see `fonts/LICENSE-DejaVu.txt`), so
//! rendering tests never depend on what the machine has installed.

use std::path::PathBuf;

/// Family name of [`test_font_path`].
pub const TEST_FONT_FAMILY: &str = "DejaVu Sans";

/// Path of the bundled TrueType test font.
pub fn test_font_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fonts")
        .join("DejaVuSans.ttf")
}
