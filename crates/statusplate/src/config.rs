//! Command line and environment configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use statusplate_assets::{
    FontCache, FontResolver, GOOGLE_FONTS_INDEX_URL, GOOGLE_FONTS_RAW_URL, HttpFontRepository,
};
use statusplate_core::profiling::DEFAULT_PROFILING_ADDR;
use url::Url;

/// Server settings. Every flag can also be set through a `STATUSPLATE_*`
/// environment variable.
#[derive(Debug, Clone, Parser)]
#[command(name = "statusplate", version, about = "Render status text into images over HTTP")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "STATUSPLATE_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "STATUSPLATE_PORT", default_value_t = 9845)]
    pub port: u16,

    /// Directory holding cached font files
    #[arg(long, env = "STATUSPLATE_FONT_DIR", default_value = "fonts")]
    pub font_dir: PathBuf,

    /// Number of worker threads [default: number of CPUs]
    #[arg(long, env = "STATUSPLATE_WORKERS")]
    pub workers: Option<usize>,

    /// Recursive tree listing of the font repository (JSON)
    #[arg(long, env = "STATUSPLATE_INDEX_URL", default_value = GOOGLE_FONTS_INDEX_URL)]
    pub index_url: Url,

    /// Raw-content mirror that repository paths are appended to
    #[arg(long, env = "STATUSPLATE_RAW_URL", default_value = GOOGLE_FONTS_RAW_URL)]
    pub raw_url: Url,

    /// Timeout for each request to the font repository, in seconds
    #[arg(long, env = "STATUSPLATE_FETCH_TIMEOUT_SECS", default_value_t = 30)]
    pub fetch_timeout_secs: u64,

    /// Log filter directives, overrides RUST_LOG
    #[arg(long, env = "STATUSPLATE_LOG")]
    pub log_filter: Option<String>,

    /// Serve puffin profiling data
    #[arg(long, env = "STATUSPLATE_PROFILING")]
    pub profiling: bool,

    /// Address of the puffin profiling server
    #[arg(long, env = "STATUSPLATE_PROFILING_ADDR", default_value = DEFAULT_PROFILING_ADDR)]
    pub profiling_addr: String,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Configured worker count, falling back to the number of CPUs.
    pub fn worker_count(&self) -> usize {
        match self.workers {
            Some(workers) if workers > 0 => workers,
            _ => num_cpus::get().max(1),
        }
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    pub fn repository(&self) -> HttpFontRepository {
        HttpFontRepository::new(self.index_url.as_str(), self.raw_url.as_str(), self.fetch_timeout())
    }

    /// Resolver over the configured cache directory and repository.
    pub fn resolver(&self) -> FontResolver {
        FontResolver::new(FontCache::new(&self.font_dir), self.repository())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::try_parse_from(["statusplate"]).unwrap();

        assert_eq!(config.port, 9845);
        assert_eq!(config.font_dir, PathBuf::from("fonts"));
        assert_eq!(config.fetch_timeout(), Duration::from_secs(30));
        assert_eq!(config.index_url.as_str(), GOOGLE_FONTS_INDEX_URL);
        assert!(!config.profiling);
        assert!(config.worker_count() >= 1);
    }

    #[test]
    fn test_flags_override() {
        let config = ServerConfig::try_parse_from([
            "statusplate",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--workers",
            "3",
            "--font-dir",
            "/var/cache/fonts",
            "--raw-url",
            "http://mirror.local/fonts",
        ])
        .unwrap();

        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.worker_count(), 3);
        assert_eq!(config.font_dir, PathBuf::from("/var/cache/fonts"));
        assert_eq!(
            config.repository().raw_url("ofl/a/A.ttf"),
            "http://mirror.local/fonts/ofl/a/A.ttf"
        );
    }

    #[test]
    fn test_zero_workers_uses_cpus() {
        let config = ServerConfig::try_parse_from(["statusplate", "--workers", "0"]).unwrap();
        assert_eq!(config.worker_count(), num_cpus::get().max(1));
    }

    #[test]
    fn test_invalid_url_rejected() {
        let result = ServerConfig::try_parse_from(["statusplate", "--index-url", "not a url"]);
        assert!(result.is_err());
    }
}
