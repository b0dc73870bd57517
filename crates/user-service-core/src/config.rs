//! Centralized configuration for the user service.
//!
//! Constants for service registration metadata and the RPC server defaults.

/// Service registration metadata.
pub struct ServiceConfig;

impl ServiceConfig {
    pub const SERVICE_NAME: &'static str = "com.ran.demo.dubboproducer.UserService";
    pub const SERVICE_VERSION: &'static str = "1.0.0";
}

/// RPC server defaults.
pub struct ServerConfig;

impl ServerConfig {
    pub const DEFAULT_HOST: &'static str = "127.0.0.1";
    /// 0 lets the OS pick a free port.
    pub const DEFAULT_PORT: u16 = 0;
    pub const MAX_CONCURRENT_REQUESTS: usize = 256;
    pub const RPC_PATH: &'static str = "/rpc";
    pub const HEALTH_PATH: &'static str = "/health";
    /// Stdout prefix announcing the bound port to a parent process.
    pub const PORT_ANNOUNCE_PREFIX: &'static str = "RPC_PORT=";
}
