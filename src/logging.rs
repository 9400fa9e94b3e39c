//! Tracing setup for the binary
//!
//! Logs go to a file when one is configured, otherwise to stderr unless the
//! full-screen UI owns the terminal. The level comes from `RUST_LOG` and
//! defaults to `warn`.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global tracing subscriber
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a subscriber is
/// already installed.
pub fn init_tracing(log_file: Option<&Path>, terminal_is_free: bool) -> Result<()> {
    let result = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None if terminal_is_free => tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(std::io::stderr)
            .try_init(),
        None => return Ok(()),
    };
    result.map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {e}"))
}
