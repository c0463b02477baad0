//! Wires configuration, prober and report output into a running scheduler.

use crate::config::{self, ConfigError};
use availability::{EndpointSpec, HttpProber, ReportFormat, Reporter, Scheduler};
use std::io::Write;
use std::path::Path;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// The availability monitor process
pub struct AvailabilityMonitor {
    endpoints: Vec<EndpointSpec>,
    report_format: ReportFormat,
}

impl AvailabilityMonitor {
    pub fn new(endpoints: Vec<EndpointSpec>, report_format: ReportFormat) -> Self {
        Self {
            endpoints,
            report_format,
        }
    }

    /// Load endpoints from `path`. Any failure here is fatal.
    pub fn from_config_file(
        path: impl AsRef<Path>,
        report_format: ReportFormat,
    ) -> Result<Self, ConfigError> {
        let endpoints = config::load_endpoints(path)?;
        Ok(Self::new(endpoints, report_format))
    }

    pub fn endpoints(&self) -> &[EndpointSpec] {
        &self.endpoints
    }

    /// Build the scheduler writing its reports to `out`.
    pub fn into_scheduler<W: Write>(self, out: W) -> common::Result<Scheduler<HttpProber, W>> {
        let prober = HttpProber::new()?;
        Ok(Scheduler::new(
            self.endpoints,
            prober,
            Reporter::new(out, self.report_format),
        ))
    }

    /// Run until `cancel` fires. Returns the number of completed cycles.
    ///
    /// A report that cannot be written ends the run with [`common::Error::Io`].
    pub async fn run<W: Write + Send>(
        self,
        out: W,
        cancel: CancellationToken,
    ) -> common::Result<u64> {
        let mut scheduler = self.into_scheduler(out)?;
        let cycles = scheduler.run(cancel).await?;
        info!(cycles, "Availability monitor stopped");
        Ok(cycles)
    }
}
