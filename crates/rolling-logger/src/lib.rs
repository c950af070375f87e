//! Rolling Logger
//!
//! A `tracing` subscriber that keeps the most recent log lines in a
//! circular buffer and echoes every line to the platform sink
//! (browser console on wasm, stderr elsewhere).

mod buffer;
mod config;
mod layer;
mod sink;

use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;

pub use buffer::LogBuffer;
pub use config::LoggerConfig;
pub use layer::RollingLayer;

/// Logger setup errors
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("log buffer capacity must be non-zero")]
    ZeroCapacity,
    #[error("failed to install the global subscriber: {0}")]
    Install(#[from] TryInitError),
}

/// Install the global subscriber. Returns the buffer it writes into.
pub fn init_logger(config: LoggerConfig) -> Result<LogBuffer, LoggerError> {
    if config.capacity == 0 {
        return Err(LoggerError::ZeroCapacity);
    }

    let buffer = LogBuffer::with_capacity(config.capacity);
    tracing_subscriber::registry()
        .with(config.level)
        .with(RollingLayer::new(&config.app_name, buffer.clone()))
        .try_init()?;

    tracing::info!(app = %config.app_name, capacity = config.capacity, "logger initialized");
    Ok(buffer)
}
