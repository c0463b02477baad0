//! Common error types for the availability monitor.

use std::fmt;

/// A specialized Result type for monitor operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that stop the monitor.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Config(String),

    #[error("Probe error: {0}")]
    Probe(String),

    #[error("Failed to write availability report: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new probe error.
    pub fn probe(msg: impl fmt::Display) -> Self {
        Error::Probe(msg.to_string())
    }

    /// Create a new configuration error.
    pub fn config(msg: impl fmt::Display) -> Self {
        Error::Config(msg.to_string())
    }
}
