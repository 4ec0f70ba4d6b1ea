//! # Scan Results
//!
//! One [`ProbeResult`] per probed port, gathered into a [`ScanReport`].

use std::fmt;
use std::time::Duration;

use serde::{Serialize, Serializer};

use crate::network::target::ScanTarget;

/// Terminal state of a single probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PortStatus {
    /// The connection was established and closed again.
    Open,
    /// The connect failed: refused, unreachable, unresolvable, or the probe
    /// task itself died.
    Closed,
    /// Nothing happened within the probe timeout.
    Timeout,
}

impl fmt::Display for PortStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PortStatus::Open => "open",
            PortStatus::Closed => "closed",
            PortStatus::Timeout => "timeout",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ProbeResult {
    pub port: u16,
    pub status: PortStatus,
}

impl ProbeResult {
    pub fn new(port: u16, status: PortStatus) -> Self {
        Self { port, status }
    }

    pub fn is_open(&self) -> bool {
        self.status == PortStatus::Open
    }
}

/// Results of one scan, in the order the ports were requested.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    pub target: ScanTarget,
    pub results: Vec<ProbeResult>,
    #[serde(rename = "elapsedMs", serialize_with = "as_millis")]
    pub elapsed: Duration,
}

impl ScanReport {
    pub fn new(target: ScanTarget, results: Vec<ProbeResult>, elapsed: Duration) -> Self {
        Self {
            target,
            results,
            elapsed,
        }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Open ports in scan order.
    pub fn open_ports(&self) -> Vec<u16> {
        self.results
            .iter()
            .filter(|result| result.is_open())
            .map(|result| result.port)
            .collect()
    }

    pub fn count(&self, status: PortStatus) -> usize {
        self.results.iter().filter(|r| r.status == status).count()
    }
}

fn as_millis<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
}
