//! Rolling per-domain availability for a fixed set of HTTP endpoints.
//!
//! Each cycle probes every configured endpoint in order, reduces the result
//! to UP or DOWN, and folds it into cumulative counters keyed by the
//! endpoint's hostname. After the cycle the current availability of every
//! known domain is reported and the loop sleeps out the rest of the
//! interval.
//!
//! # Components
//!
//! - **probe**: one HTTP request per endpoint, 5 second timeout, 2xx is UP
//! - **domain**: hostname extraction, the aggregation key
//! - **aggregator**: cumulative up/total counters per domain
//! - **scheduler**: the fixed-interval cycle loop
//! - **report**: text or JSON rendering of each cycle
//!
//! # Example
//!
//! ```no_run
//! use availability::{EndpointSpec, HttpProber, ReportFormat, Reporter, Scheduler};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() -> common::Result<()> {
//! let endpoints = vec![EndpointSpec::get("https://api.example.com/health")];
//! let reporter = Reporter::new(std::io::stdout(), ReportFormat::Text);
//!
//! let mut scheduler = Scheduler::new(endpoints, HttpProber::new()?, reporter);
//! let cancel = CancellationToken::new();
//! scheduler.run(cancel).await?;
//! # Ok(())
//! # }
//! ```

pub mod aggregator;
pub mod domain;
pub mod probe;
pub mod report;
pub mod scheduler;
pub mod types;

#[cfg(test)]
mod testing;

pub use aggregator::{DomainAggregator, DomainSnapshot};
pub use domain::extract_domain;
pub use probe::{HttpProber, PROBE_TIMEOUT, ProbeError, Prober};
pub use report::{ReportFormat, Reporter};
pub use scheduler::{
    CHECK_INTERVAL, CycleSummary, EndpointResult, Pacing, Scheduler, pacing, process_endpoint,
};
pub use types::{DomainStats, EndpointSpec, ProbeOutcome};
