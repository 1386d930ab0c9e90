use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use statusplate::{AppState, Server, ServerConfig};
use statusplate_core::RenderDefaults;
use statusplate_core::logging;
use statusplate_core::profiling::{ProfilingBackend, init_profiling};

fn main() -> ExitCode {
    let config = ServerConfig::parse();
    logging::init(config.log_filter.as_deref());

    if config.profiling {
        init_profiling(ProfilingBackend::PuffinHttp, &config.profiling_addr);
    }

    tracing::info!(
        "Caching fonts in '{}', repository index {}",
        config.font_dir.display(),
        config.index_url
    );

    let resolver = Arc::new(config.resolver());
    let state = Arc::new(AppState::new(resolver, RenderDefaults::default()));

    let addr = config.bind_addr();
    let server = match Server::bind(&addr, state) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let handle = match server.start(config.worker_count()) {
        Ok(handle) => handle,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        "Server started http://{} with {} workers",
        addr,
        handle.worker_count()
    );
    handle.join();

    ExitCode::SUCCESS
}
