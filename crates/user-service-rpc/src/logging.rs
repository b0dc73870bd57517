//! Tracing subscriber setup.

use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `level` applies to this service and
/// HTTP request traces.
pub fn init_logging(level: Level, json: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level)));

    let builder = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(false);

    // stdout carries the port announcement, so logs go to stderr
    if json {
        builder.json().with_writer(std::io::stderr).init();
    } else {
        builder.compact().with_writer(std::io::stderr).init();
    }
}

fn default_directives(level: Level) -> String {
    format!("{level},tower_http={level},axum=info").to_lowercase()
}
