//! Blocking HTTP server with a fixed pool of worker threads.

use std::fmt;
use std::net::SocketAddr;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread;
use std::time::Instant;

use statusplate_core::profiling::finish_frame;
use tiny_http::{Header, Request, Response};

use crate::handler::{AppState, HttpResponse};

/// Errors starting the server.
#[derive(Debug)]
pub enum ServerError {
    /// The listening socket could not be bound.
    Bind { addr: String, message: String },
    /// A worker thread could not be spawned.
    Spawn(std::io::Error),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::Bind { addr, message } => {
                write!(f, "Failed to bind {}: {}", addr, message)
            }
            ServerError::Spawn(err) => write!(f, "Failed to spawn worker thread: {}", err),
        }
    }
}

impl std::error::Error for ServerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServerError::Spawn(err) => Some(err),
            ServerError::Bind { .. } => None,
        }
    }
}

/// A bound listener that has not started serving yet.
pub struct Server {
    http: Arc<tiny_http::Server>,
    state: Arc<AppState>,
}

impl Server {
    pub fn bind(addr: &str, state: Arc<AppState>) -> Result<Self, ServerError> {
        let http = tiny_http::Server::http(addr).map_err(|e| ServerError::Bind {
            addr: addr.to_string(),
            message: e.to_string(),
        })?;

        Ok(Self {
            http: Arc::new(http),
            state,
        })
    }

    /// The bound address, useful when binding port 0.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.http.server_addr().to_ip()
    }

    /// Spawn `workers` threads that each receive and answer requests.
    ///
    /// # Panics
    ///
    /// Panics if `workers` is 0.
    pub fn start(self, workers: usize) -> Result<ServerHandle, ServerError> {
        assert!(workers > 0, "Server must have at least one worker");

        let shutdown = Arc::new(AtomicBool::new(false));
        let next_id = Arc::new(AtomicU64::new(1));
        let mut threads = Vec::with_capacity(workers);

        for i in 0..workers {
            let http = self.http.clone();
            let state = self.state.clone();
            let shutdown_flag = shutdown.clone();
            let next_id = next_id.clone();

            let handle = thread::Builder::new()
                .name(format!("statusplate-worker-{}", i))
                .spawn(move || worker_loop(&http, &state, &shutdown_flag, &next_id))
                .map_err(ServerError::Spawn)?;

            threads.push(handle);
        }

        tracing::debug!("Server started {} worker threads", workers);

        Ok(ServerHandle {
            http: self.http,
            threads,
            shutdown,
        })
    }
}

/// Running server. Dropping the handle leaves the workers running.
pub struct ServerHandle {
    http: Arc<tiny_http::Server>,
    threads: Vec<thread::JoinHandle<()>>,
    shutdown: Arc<AtomicBool>,
}

impl ServerHandle {
    pub fn worker_count(&self) -> usize {
        self.threads.len()
    }

    /// Block until every worker has exited.
    pub fn join(mut self) {
        let threads = std::mem::take(&mut self.threads);
        for handle in threads {
            if let Err(e) = handle.join() {
                tracing::error!("Worker thread panicked: {:?}", e);
            }
        }
    }

    /// Stop accepting requests and wait for the workers to finish the
    /// requests they are serving.
    pub fn shutdown(self) {
        tracing::debug!("Shutting down server with {} workers", self.threads.len());

        self.shutdown.store(true, Ordering::Release);
        for _ in 0..self.threads.len() {
            self.http.unblock();
        }
        self.join();

        tracing::debug!("Server shutdown complete");
    }
}

fn worker_loop(
    http: &tiny_http::Server,
    state: &AppState,
    shutdown: &AtomicBool,
    next_id: &AtomicU64,
) {
    loop {
        match http.recv() {
            Ok(request) => {
                let id = next_id.fetch_add(1, Ordering::Relaxed);
                serve(state, request, id);
                finish_frame();
            }
            Err(e) => {
                if shutdown.load(Ordering::Acquire) {
                    break;
                }
                tracing::warn!("Failed to receive request: {}", e);
            }
        }

        if shutdown.load(Ordering::Acquire) {
            break;
        }
    }
}

fn serve(state: &AppState, request: Request, id: u64) {
    let method = request.method().clone();
    let span = tracing::info_span!("request", id, method = %method, url = %request.url());
    let _guard = span.enter();

    let started = Instant::now();
    let response = catch_panic(|| state.handle(&method, request.url()));
    let status = response.status;
    let bytes = response.body.len();

    if let Err(e) = request.respond(into_tiny(response)) {
        tracing::warn!("Failed to write response: {}", e);
        return;
    }

    tracing::info!(
        "{} {} ({} bytes) in {:.1?}",
        method,
        status,
        bytes,
        started.elapsed()
    );
}

/// Run a handler, turning a panic into a 500 so the worker survives.
fn catch_panic<F>(handler: F) -> HttpResponse
where
    F: FnOnce() -> HttpResponse,
{
    match panic::catch_unwind(AssertUnwindSafe(handler)) {
        Ok(response) => response,
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| String::from("unknown panic"));
            tracing::error!("Request handler panicked: {}", message);
            HttpResponse::text(500, "Internal server error\n")
        }
    }
}

fn into_tiny(response: HttpResponse) -> Response<std::io::Cursor<Vec<u8>>> {
    let mut tiny = Response::from_data(response.body).with_status_code(response.status);
    match Header::from_bytes(&b"Content-Type"[..], response.content_type.as_bytes()) {
        Ok(header) => tiny.add_header(header),
        Err(()) => tracing::warn!("Invalid content type '{}'", response.content_type),
    }
    tiny
}
