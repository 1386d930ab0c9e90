//! Statusplate Core
//!
//! Shared functionality for the statusplate crates: logging setup, profiling
//! hooks, hash collections and the default render parameters.

pub mod alloc;
pub mod config;
pub mod logging;
pub mod profiling;

pub use config::RenderDefaults;
