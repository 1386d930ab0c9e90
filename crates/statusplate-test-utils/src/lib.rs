//! Test utilities for statusplate.
//!
//! - `MockFontRepository` - in-memory [`FontRepository`] that records every
//!   call (requires the `mock` feature)
//! - [`test_font_path`] - bundled TrueType font (DejaVu Sans) for rendering
//!   tests
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "mock")]
//! # {
//! use std::sync::Arc;
//! use statusplate_assets::{FontCache, FontResolver};
//! use statusplate_test_utils::MockFontRepository;
//!
//! let repo = Arc::new(MockFontRepository::new());
//! repo.add_font("ofl/demo/Demo-Regular.ttf", vec![0, 1, 0, 0]);
//!
//! let dir = std::env::temp_dir().join("statusplate-doc-example");
//! let resolver = FontResolver::new(FontCache::new(&dir), repo.clone());
//! resolver.resolve("Demo-Regular").unwrap();
//! assert_eq!(repo.count_fetches(), 1);
//! # }
//! ```
//!
//! [`FontRepository`]: statusplate_assets::FontRepository

pub mod fonts;
#[cfg(feature = "mock")]
pub mod mock_repository;

pub use fonts::*;
#[cfg(feature = "mock")]
pub use mock_repository::*;
