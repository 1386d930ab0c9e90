//! Logging setup based on `tracing-subscriber`.
//!
//! Library crates only emit `tracing` events. Installing a subscriber is the
//! job of the binary, which calls [`init`] once at startup.

use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor an explicit filter is given.
pub const DEFAULT_FILTER: &str = "info,statusplate=debug,cosmic_text=warn,tiny_http=info,ureq=info";

/// Install the global fmt subscriber.
///
/// An explicit `filter` takes precedence over `RUST_LOG`, which in turn takes
/// precedence over [`DEFAULT_FILTER`].
pub fn init(filter: Option<&str>) {
    let env_filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };

    if tracing_subscriber::fmt().with_env_filter(env_filter).try_init().is_err() {
        tracing::warn!("A tracing subscriber was already installed, keeping it");
    }
}
