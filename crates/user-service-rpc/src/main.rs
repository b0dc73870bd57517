//! User Service RPC Server - JSON-RPC producer for the UserService.
//!
//! This binary builds the seeded user store and exposes it over a JSON-RPC
//! 2.0 HTTP endpoint.

mod handlers;
mod logging;
mod server;

use anyhow::Result;
use clap::Parser;
use server::ServerOptions;
use std::sync::Arc;
use tracing::{info, Level};
use user_service_core::{ServerConfig, UserStore};

#[derive(Parser, Debug)]
#[command(name = "user-service-rpc")]
#[command(about = "JSON-RPC producer for the UserService")]
struct Args {
    /// Port to listen on (0 = auto-assign)
    #[arg(short, long, default_value_t = ServerConfig::DEFAULT_PORT)]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = ServerConfig::DEFAULT_HOST)]
    host: String,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,

    /// Maximum number of requests handled at once
    #[arg(long, default_value_t = ServerConfig::MAX_CONCURRENT_REQUESTS)]
    max_concurrent_requests: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };
    logging::init_logging(log_level, args.json_logs);

    info!("Starting User Service RPC Server");

    let store = UserStore::seeded();
    info!("Loaded {} users", store.len());

    let options = ServerOptions {
        host: args.host,
        port: args.port,
        max_concurrent_requests: args.max_concurrent_requests,
    };

    // Start the server
    let handle = server::start_server(Arc::new(store), &options).await?;

    // Print port for the parent process to read (intentional stdout)
    println!("{}{}", ServerConfig::PORT_ANNOUNCE_PREFIX, handle.addr().port());

    info!("RPC server running on {}", handle.addr());

    // Wait for shutdown signal
    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received, exiting");
    handle.shutdown().await;

    Ok(())
}
