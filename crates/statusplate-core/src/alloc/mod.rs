//! Hash collections used across statusplate.
//!
//! Re-exports of the AHash based maps, so every crate hashes the same way.

pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};
