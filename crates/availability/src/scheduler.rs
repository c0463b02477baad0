//! Fixed-interval polling loop.

use crate::aggregator::DomainAggregator;
use crate::domain::extract_domain;
use crate::probe::Prober;
use crate::report::Reporter;
use crate::types::{EndpointSpec, ProbeOutcome};
use std::io::{self, Write};
use std::time::Duration;
use tokio::time::{Instant, sleep};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Nominal time between cycle starts.
pub const CHECK_INTERVAL: Duration = Duration::from_secs(15);

/// What to do once a cycle has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// Wait this long before the next cycle
    Sleep(Duration),
    /// The cycle used up the whole interval; start the next one now
    Overrun,
}

/// Remaining interval budget after a cycle that took `elapsed`.
pub fn pacing(elapsed: Duration, interval: Duration) -> Pacing {
    match interval.checked_sub(elapsed) {
        Some(remaining) if !remaining.is_zero() => Pacing::Sleep(remaining),
        _ => Pacing::Overrun,
    }
}

/// Result of processing one endpoint within a cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndpointResult {
    /// The endpoint was probed and the outcome recorded
    Recorded {
        domain: String,
        outcome: ProbeOutcome,
    },
    /// No domain could be extracted; nothing was probed or recorded
    Skipped { url: String },
}

/// Tally of one cycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleSummary {
    pub cycle: u64,
    pub up: usize,
    pub down: usize,
    pub skipped: usize,
    pub elapsed: Duration,
}

impl CycleSummary {
    fn tally(&mut self, result: &EndpointResult) {
        match result {
            EndpointResult::Recorded {
                outcome: ProbeOutcome::Up,
                ..
            } => self.up += 1,
            EndpointResult::Recorded {
                outcome: ProbeOutcome::Down,
                ..
            } => self.down += 1,
            EndpointResult::Skipped { .. } => self.skipped += 1,
        }
    }
}

/// Extract, probe and record a single endpoint.
pub async fn process_endpoint<P: Prober>(
    prober: &P,
    aggregator: &mut DomainAggregator,
    endpoint: &EndpointSpec,
) -> EndpointResult {
    let Some(domain) = extract_domain(&endpoint.url) else {
        warn!(url = %endpoint.url, "Could not parse domain from URL, skipping");
        return EndpointResult::Skipped {
            url: endpoint.url.clone(),
        };
    };

    let outcome = prober.probe(endpoint).await;
    aggregator.record(&domain, outcome);
    debug!(url = %endpoint.url, domain = %domain, outcome = %outcome, "Recorded probe outcome");

    EndpointResult::Recorded { domain, outcome }
}

/// Drives probe cycles over the configured endpoints.
///
/// Owns the aggregation state for the lifetime of the process. Endpoints
/// are processed strictly in declaration order, one at a time.
pub struct Scheduler<P, W: Write> {
    endpoints: Vec<EndpointSpec>,
    prober: P,
    aggregator: DomainAggregator,
    reporter: Reporter<W>,
    interval: Duration,
    cycles: u64,
}

impl<P: Prober, W: Write> Scheduler<P, W> {
    pub fn new(endpoints: Vec<EndpointSpec>, prober: P, reporter: Reporter<W>) -> Self {
        Self {
            endpoints,
            prober,
            aggregator: DomainAggregator::new(),
            reporter,
            interval: CHECK_INTERVAL,
            cycles: 0,
        }
    }

    /// Override the cycle interval
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn aggregator(&self) -> &DomainAggregator {
        &self.aggregator
    }

    pub fn reporter(&self) -> &Reporter<W> {
        &self.reporter
    }

    /// Number of cycles completed so far
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Run one cycle: probe every endpoint, then render the report.
    ///
    /// Stops probing early if `cancel` fires, but still reports. Fails only
    /// when the report cannot be written.
    pub async fn run_cycle(&mut self, cancel: &CancellationToken) -> io::Result<CycleSummary> {
        let start = Instant::now();
        self.cycles += 1;

        let mut summary = CycleSummary {
            cycle: self.cycles,
            ..Default::default()
        };

        for endpoint in &self.endpoints {
            if cancel.is_cancelled() {
                debug!(cycle = self.cycles, "Cancelled mid-cycle");
                break;
            }
            let result = process_endpoint(&self.prober, &mut self.aggregator, endpoint).await;
            summary.tally(&result);
        }

        self.reporter.render(self.cycles, &self.aggregator)?;

        summary.elapsed = start.elapsed();
        Ok(summary)
    }

    /// Run cycles until `cancel` fires. Returns the number of completed cycles.
    ///
    /// A report that cannot be written ends the loop with that error.
    pub async fn run(&mut self, cancel: CancellationToken) -> io::Result<u64> {
        info!(
            endpoints = self.endpoints.len(),
            interval_secs = self.interval.as_secs(),
            "Availability monitor started"
        );

        while !cancel.is_cancelled() {
            let summary = self.run_cycle(&cancel).await?;
            debug!(
                cycle = summary.cycle,
                up = summary.up,
                down = summary.down,
                skipped = summary.skipped,
                elapsed_ms = summary.elapsed.as_millis(),
                "Cycle complete"
            );

            if cancel.is_cancelled() {
                break;
            }

            match pacing(summary.elapsed, self.interval) {
                Pacing::Sleep(remaining) => {
                    tokio::select! {
                        _ = sleep(remaining) => {}
                        _ = cancel.cancelled() => break,
                    }
                }
                Pacing::Overrun => {
                    warn!(
                        elapsed_ms = summary.elapsed.as_millis(),
                        interval_secs = self.interval.as_secs(),
                        "Health check cycle took longer than the check interval, starting next cycle immediately"
                    );
                }
            }
        }

        info!(cycles = self.cycles, "Availability monitor stopping");
        Ok(self.cycles)
    }
}
