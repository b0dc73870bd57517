//! HTTP server implementation using Axum.

use crate::handlers::{handle_health, handle_rpc};
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use user_service_core::{ServerConfig, ServiceDescriptor, UserService, UserServiceError};

/// Application state shared across handlers.
pub struct AppState {
    /// The service answering lookups
    pub service: Arc<dyn UserService>,
    /// Name, version and methods the service is exposed under
    pub descriptor: ServiceDescriptor,
}

/// Where and how the server listens.
#[derive(Debug, Clone)]
pub struct ServerOptions {
    pub host: String,
    pub port: u16,
    pub max_concurrent_requests: usize,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            host: ServerConfig::DEFAULT_HOST.to_string(),
            port: ServerConfig::DEFAULT_PORT,
            max_concurrent_requests: ServerConfig::MAX_CONCURRENT_REQUESTS,
        }
    }
}

/// Handle to a running server. Dropping it stops the server.
pub struct ServerHandle {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task_handle: Option<JoinHandle<()>>,
}

impl ServerHandle {
    /// The address the server is bound to.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Stop accepting connections and wait for in-flight requests to finish.
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.task_handle.take() {
            if let Err(e) = handle.await {
                error!("Server task failed during shutdown: {}", e);
            }
        }
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// A limit whose permits are shared by every route it is layered onto.
///
/// `Router::layer` wraps each route separately, so a per-service limit would
/// cap `/rpc` and `/health` independently.
pub fn concurrency_limit(max_concurrent_requests: usize) -> GlobalConcurrencyLimitLayer {
    GlobalConcurrencyLimitLayer::new(max_concurrent_requests.max(1))
}

/// Build the router serving `/health` and `/rpc`.
pub fn router(state: Arc<AppState>, max_concurrent_requests: usize) -> Router {
    // Configure CORS for browser-based callers
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(ServerConfig::HEALTH_PATH, get(handle_health))
        .route(ServerConfig::RPC_PATH, post(handle_rpc))
        .layer(concurrency_limit(max_concurrent_requests))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Resolve `host` (an IP literal or a name such as `localhost`) to a single
/// listen address, preferring IPv4.
async fn resolve_listen_addr(host: &str, port: u16) -> user_service_core::Result<SocketAddr> {
    let config_err = |reason: String| UserServiceError::Config {
        message: format!("invalid listen address {}:{}: {}", host, port, reason),
    };

    let addrs: Vec<SocketAddr> = tokio::net::lookup_host((host, port))
        .await
        .map_err(|e| config_err(e.to_string()))?
        .collect();

    addrs
        .iter()
        .find(|addr| addr.is_ipv4())
        .or_else(|| addrs.first())
        .copied()
        .ok_or_else(|| config_err("host resolved to no addresses".to_string()))
}

/// Start the JSON-RPC HTTP server for `service`.
///
/// Returns a handle carrying the actual bound address (useful when port=0).
pub async fn start_server(
    service: Arc<dyn UserService>,
    options: &ServerOptions,
) -> user_service_core::Result<ServerHandle> {
    let state = Arc::new(AppState {
        service,
        descriptor: ServiceDescriptor::user_service(),
    });

    let app = router(state.clone(), options.max_concurrent_requests);

    let addr = resolve_listen_addr(&options.host, options.port).await?;

    // Bind to the address
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let actual_addr = listener.local_addr()?;

    info!(
        "Serving {} v{} on {}",
        state.descriptor.name, state.descriptor.version, actual_addr
    );

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    // Spawn the server in the background
    let task_handle = tokio::spawn(async move {
        let result = axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
                info!("Server shutting down");
            })
            .await;
        if let Err(e) = result {
            error!("Server error: {}", e);
        }
    });

    Ok(ServerHandle {
        addr: actual_addr,
        shutdown_tx: Some(shutdown_tx),
        task_handle: Some(task_handle),
    })
}
