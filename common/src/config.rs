use std::time::Duration;

pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_millis(2_000);
pub const DEFAULT_MAX_PORTS: usize = 100;

/// Static limits applied to every scan run by a scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    /// How long a single connect attempt may take before the port is
    /// reported as `Timeout`.
    ///
    /// Only the connect is timed. Waiting for a global probe permit is not.
    pub probe_timeout: Duration,

    /// Upper bound on the number of ports a single request may expand to.
    pub max_ports: usize,

    /// Upper bound on connect attempts in flight across all scans sharing
    /// one scanner. `None` leaves it to `max_ports` per request.
    pub max_concurrent_probes: Option<usize>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            max_ports: DEFAULT_MAX_PORTS,
            max_concurrent_probes: None,
        }
    }
}

impl ScanConfig {
    pub fn with_probe_timeout(mut self, probe_timeout: Duration) -> Self {
        self.probe_timeout = probe_timeout;
        self
    }

    pub fn with_max_ports(mut self, max_ports: usize) -> Self {
        self.max_ports = max_ports;
        self
    }

    pub fn with_max_concurrent_probes(mut self, limit: usize) -> Self {
        self.max_concurrent_probes = Some(limit);
        self
    }
}
