//! Availability monitor binary support.
//!
//! Loads the endpoint list named on the command line, then runs the
//! polling loop from the `availability` crate until the operator stops the
//! process.
//!
//! # Components
//!
//! - **cli**: argument surface
//! - **config**: endpoint document loading (YAML or JSON)
//! - **monitor**: builds and runs the scheduler
//! - **shutdown**: turns Ctrl+C / SIGTERM into cancellation

pub mod cli;
pub mod config;
pub mod monitor;
pub mod shutdown;

pub use cli::{Cli, LogFormat, OutputFormat};
pub use config::{ConfigError, ConfigFormat, load_endpoints};
pub use monitor::AvailabilityMonitor;
