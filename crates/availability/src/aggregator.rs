//! Cumulative per-domain availability.

use crate::types::{DomainStats, ProbeOutcome};
use serde::Serialize;
use std::collections::HashMap;

/// Point-in-time view of one domain's counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainSnapshot {
    pub domain: String,
    pub up: u64,
    pub total: u64,
    /// `None` until the first probe is recorded
    pub availability: Option<u64>,
}

/// Cumulative up/total counters keyed by domain.
///
/// Entries are created on first observation, kept in that order, and never
/// reset or removed.
#[derive(Debug, Default)]
pub struct DomainAggregator {
    entries: Vec<(String, DomainStats)>,
    index: HashMap<String, usize>,
}

impl DomainAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one probe outcome against `domain`.
    pub fn record(&mut self, domain: &str, outcome: ProbeOutcome) {
        let position = match self.index.get(domain) {
            Some(&position) => position,
            None => {
                self.entries.push((domain.to_string(), DomainStats::default()));
                let position = self.entries.len() - 1;
                self.index.insert(domain.to_string(), position);
                position
            }
        };

        self.entries[position].1.update(outcome);
    }

    /// Counters for `domain`, if it has been observed.
    pub fn stats(&self, domain: &str) -> Option<DomainStats> {
        self.index.get(domain).map(|&position| self.entries[position].1)
    }

    /// Rounded availability percentage for `domain`.
    ///
    /// `None` when the domain is unknown or has no recorded probes.
    pub fn availability(&self, domain: &str) -> Option<u64> {
        self.stats(domain)?.availability()
    }

    /// Current counters for every known domain, in first-observation order.
    pub fn snapshot(&self) -> impl Iterator<Item = DomainSnapshot> + '_ {
        self.entries.iter().map(|(domain, stats)| DomainSnapshot {
            domain: domain.clone(),
            up: stats.up,
            total: stats.total,
            availability: stats.availability(),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
