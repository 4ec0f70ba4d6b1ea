//! Concurrent **TCP connect** scanning.
//!
//! A [`PortScanner`] spawns one task per requested port and races each
//! connect against the configured probe timeout. Every task is its own error
//! boundary: a probe that panics is reported as `Closed` for its port and
//! never takes its siblings down with it.
//!
//! Results come back in the order the ports were requested, regardless of
//! which probe finished first.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use probekit_common::config::ScanConfig;
use probekit_common::error::Result;
use probekit_common::network::ports::PortSet;
use probekit_common::network::target::ScanTarget;
use probekit_common::report::{PortStatus, ProbeResult, ScanReport};
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::network::tcp::{self, Connector, TcpConnector};

/// Called with the number of probes finished so far.
pub type ProgressCallback = Arc<dyn Fn(usize) + Send + Sync>;

pub struct PortScanner {
    cfg: ScanConfig,
    connector: Arc<dyn Connector>,
    permits: Option<Arc<Semaphore>>,
    on_progress: Option<ProgressCallback>,
}

impl PortScanner {
    pub fn new(cfg: ScanConfig) -> Self {
        Self::with_connector(cfg, Arc::new(TcpConnector))
    }

    pub fn with_connector(cfg: ScanConfig, connector: Arc<dyn Connector>) -> Self {
        let permits = cfg
            .max_concurrent_probes
            .map(|limit| Arc::new(Semaphore::new(limit.max(1))));

        Self {
            cfg,
            connector,
            permits,
            on_progress: None,
        }
    }

    pub fn on_progress(mut self, callback: ProgressCallback) -> Self {
        self.on_progress = Some(callback);
        self
    }

    pub fn config(&self) -> &ScanConfig {
        &self.cfg
    }

    /// Parses a port specification against this scanner's port cap.
    pub fn parse_ports(&self, spec: &str) -> Result<PortSet> {
        PortSet::parse(spec, self.cfg.max_ports)
    }

    /// Parses `spec` and scans it. Parsing errors abort before any socket is opened.
    pub async fn scan_spec(&self, target: &ScanTarget, spec: &str) -> Result<ScanReport> {
        let ports = self.parse_ports(spec)?;
        Ok(self.scan(target, &ports).await)
    }

    /// Probes every port in `ports` concurrently. Always yields one result per port.
    pub async fn scan(&self, target: &ScanTarget, ports: &PortSet) -> ScanReport {
        let start_time = Instant::now();
        info!("Probing {} port(s) on {target}", ports.len());

        let host: Arc<str> = Arc::from(target.host());
        let completed = Arc::new(AtomicUsize::new(0));

        let handles: Vec<(u16, JoinHandle<PortStatus>)> = ports
            .iter()
            .map(|port| (port, self.spawn_probe(host.clone(), port, completed.clone())))
            .collect();

        let mut results: Vec<ProbeResult> = Vec::with_capacity(handles.len());
        for (port, handle) in handles {
            let status = match handle.await {
                Ok(status) => status,
                Err(e) => {
                    warn!("Probe for {target}:{port} did not finish cleanly: {e}");
                    PortStatus::Closed
                }
            };
            results.push(ProbeResult::new(port, status));
        }

        let report = ScanReport::new(target.clone(), results, start_time.elapsed());
        info!(
            "Scan of {target} finished in {:.2}s: {} open, {} closed, {} timed out",
            report.elapsed.as_secs_f64(),
            report.count(PortStatus::Open),
            report.count(PortStatus::Closed),
            report.count(PortStatus::Timeout),
        );
        report
    }

    fn spawn_probe(
        &self,
        host: Arc<str>,
        port: u16,
        completed: Arc<AtomicUsize>,
    ) -> JoinHandle<PortStatus> {
        let connector = self.connector.clone();
        let permits = self.permits.clone();
        let on_progress = self.on_progress.clone();
        let probe_timeout = self.cfg.probe_timeout;

        tokio::spawn(async move {
            let _permit = match permits {
                Some(semaphore) => match semaphore.acquire_owned().await {
                    Ok(permit) => Some(permit),
                    Err(_closed) => return PortStatus::Closed,
                },
                None => None,
            };

            let status = tcp::probe_port(connector.as_ref(), &host, port, probe_timeout).await;

            let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
            if let Some(callback) = on_progress {
                callback(done);
            }

            status
        })
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
