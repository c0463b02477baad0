//! Endpoint and availability types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

fn default_method() -> String {
    "GET".to_string()
}

/// One configured HTTP target.
///
/// Loaded once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EndpointSpec {
    /// Target URL, used verbatim
    pub url: String,

    /// HTTP method (defaults to GET)
    #[serde(default = "default_method")]
    pub method: String,

    /// Extra request headers
    #[serde(default)]
    pub headers: Option<BTreeMap<String, String>>,

    /// Request payload, sent as JSON when present
    #[serde(default)]
    pub body: Option<serde_json::Value>,
}

impl EndpointSpec {
    /// Create a GET endpoint for `url` with no headers or body.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: default_method(),
            headers: None,
            body: None,
        }
    }
}

/// Binary health verdict for a single probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProbeOutcome {
    /// A response with a 2xx status was received
    Up,
    /// Anything else
    Down,
}

impl ProbeOutcome {
    pub fn is_up(self) -> bool {
        self == ProbeOutcome::Up
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeOutcome::Up => write!(f, "UP"),
            ProbeOutcome::Down => write!(f, "DOWN"),
        }
    }
}

/// Cumulative counters for one domain.
///
/// `up <= total` always holds; both only ever grow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainStats {
    /// Probes classified as up
    pub up: u64,

    /// Probes recorded
    pub total: u64,
}

impl DomainStats {
    /// Update stats with a probe outcome
    pub fn update(&mut self, outcome: ProbeOutcome) {
        self.total += 1;
        if outcome.is_up() {
            self.up += 1;
        }
    }

    /// Availability percentage rounded half-to-even, or `None` when nothing
    /// has been recorded yet.
    pub fn availability(&self) -> Option<u64> {
        if self.total == 0 {
            return None;
        }

        let scaled = 100 * self.up;
        let quotient = scaled / self.total;
        let twice_remainder = 2 * (scaled % self.total);

        let rounded = if twice_remainder > self.total
            || (twice_remainder == self.total && quotient % 2 == 1)
        {
            quotient + 1
        } else {
            quotient
        };
        Some(rounded)
    }
}
