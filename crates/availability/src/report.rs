//! Per-cycle availability report rendering.

use crate::aggregator::{DomainAggregator, DomainSnapshot};
use serde::Serialize;
use std::io::{self, Write};

/// Line printed after each text report.
pub const CYCLE_SEPARATOR: &str = "---";

/// Report output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// One human-readable line per domain, then a separator
    #[default]
    Text,
    /// One JSON object per cycle
    Json,
}

#[derive(Serialize)]
struct CycleReport<'a> {
    cycle: u64,
    domains: &'a [DomainSnapshot],
}

/// Text line for one domain.
pub fn availability_line(snapshot: &DomainSnapshot) -> String {
    match snapshot.availability {
        Some(pct) => format!("{} has {}% availability percentage", snapshot.domain, pct),
        None => format!("{} has 0 checks recorded.", snapshot.domain),
    }
}

/// Writes cycle reports to the operator-facing output.
pub struct Reporter<W: Write> {
    out: W,
    format: ReportFormat,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, format: ReportFormat) -> Self {
        Self { out, format }
    }

    /// Render the aggregator's current state for `cycle`.
    pub fn render(&mut self, cycle: u64, aggregator: &DomainAggregator) -> io::Result<()> {
        let domains: Vec<DomainSnapshot> = aggregator.snapshot().collect();

        match self.format {
            ReportFormat::Text => {
                for snapshot in &domains {
                    writeln!(self.out, "{}", availability_line(snapshot))?;
                }
                writeln!(self.out, "{}", CYCLE_SEPARATOR)?;
            }
            ReportFormat::Json => {
                let report = CycleReport {
                    cycle,
                    domains: &domains,
                };
                serde_json::to_writer(&mut self.out, &report)?;
                writeln!(self.out)?;
            }
        }

        self.out.flush()
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }
}
