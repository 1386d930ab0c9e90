//! Statusplate - render status text into images over HTTP
//!
//! A single `GET /` endpoint turns query parameters into a rendered image:
//!
//! ```text
//! GET /?text=Busy\nBack%20at%2014:00&font=Roboto-Regular&color_bg=black
//! ```
//!
//! - [`RenderParams`] parses the query string and applies defaults
//! - [`AppState::handle`] maps a request to an [`HttpResponse`] without
//!   touching a socket
//! - [`Server`] serves requests from a pool of worker threads
//!
//! Fonts are resolved through [`statusplate_assets::FontResolver`] and cached
//! on disk; rendering is done by [`statusplate_text::TextFitRenderer`].

pub mod config;
pub mod handler;
pub mod params;
pub mod server;

pub use config::ServerConfig;
pub use handler::{AppState, HttpResponse, USAGE, status_code};
pub use params::RenderParams;
pub use server::{Server, ServerError, ServerHandle};
