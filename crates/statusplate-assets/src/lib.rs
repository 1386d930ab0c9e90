//! Statusplate Assets - font resolution
//!
//! Fonts are looked up by name in a local cache directory. On a miss the
//! name is matched against the index of a remote [`FontRepository`] and the
//! selected file is downloaded into the cache, where it stays forever.
//!
//! ```rust,no_run
//! use statusplate_assets::{FontCache, FontResolver, HttpFontRepository, DEFAULT_FETCH_TIMEOUT};
//!
//! let resolver = FontResolver::new(
//!     FontCache::new("fonts"),
//!     HttpFontRepository::google_fonts(DEFAULT_FETCH_TIMEOUT),
//! );
//! let font = resolver.resolve("Roboto-Regular").unwrap();
//! println!("{}", font.local_path().display());
//! ```

pub mod asset;
pub mod cache;
pub mod error;
pub mod name;
pub mod repository;
pub mod resolver;

pub use asset::{FontAsset, FontOrigin};
pub use cache::FontCache;
pub use error::{FontError, FontResult};
pub use name::FontName;
pub use repository::{
    DEFAULT_FETCH_TIMEOUT, EntryKind, FontRepository, GOOGLE_FONTS_INDEX_URL, GOOGLE_FONTS_RAW_URL,
    HttpFontRepository, RepositoryEntry, parse_tree_listing, select_entry,
};
pub use resolver::FontResolver;
