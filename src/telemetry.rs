use crate::config::ServerConfig;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Default log level for the given configuration. Debug mode lowers it to
/// `debug`, which also enables per-request logging.
pub fn default_level(config: &ServerConfig) -> Level {
    if config.debug { Level::DEBUG } else { Level::INFO }
}

/// Installs the global `tracing` subscriber. `RUST_LOG` directives take
/// precedence over the configured default level.
pub fn init(config: &ServerConfig) {
    let filter = EnvFilter::builder()
        .with_default_directive(default_level(config).into())
        .from_env_lossy();

    if config.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true))
            .init();
    }
}
