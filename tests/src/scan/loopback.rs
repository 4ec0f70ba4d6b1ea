use probekit_common::config::ScanConfig;
use probekit_common::network::target::ScanTarget;
use probekit_common::report::{PortStatus, ProbeResult};
use probekit_core::scanner::PortScanner;
use std::time::Duration;

use crate::utils::{closed_port, open_port};

/// Scans a listening and a refused loopback port through the real TCP connector.
#[tokio::test]
async fn scan_loopback_open_and_closed() -> anyhow::Result<()> {
    let (_listener, open) = open_port().await?;
    let closed = closed_port().await?;

    let scanner = PortScanner::new(ScanConfig::default());
    let target = ScanTarget::new("127.0.0.1");
    let report = scanner.scan_spec(&target, &format!("{closed},{open}")).await?;

    assert_eq!(
        report.results,
        vec![
            ProbeResult::new(closed, PortStatus::Closed),
            ProbeResult::new(open, PortStatus::Open),
        ]
    );
    assert_eq!(report.open_ports(), vec![open]);
    Ok(())
}

#[tokio::test]
async fn scan_by_hostname_resolves_through_the_socket_layer() -> anyhow::Result<()> {
    let (_listener, open) = open_port().await?;

    let scanner = PortScanner::new(ScanConfig::default());
    let report = scanner
        .scan_spec(&ScanTarget::new("localhost"), &open.to_string())
        .await?;

    assert_eq!(report.open_ports(), vec![open]);
    Ok(())
}

#[tokio::test]
async fn every_requested_port_gets_exactly_one_result() -> anyhow::Result<()> {
    let (_a, first) = open_port().await?;
    let (_b, second) = open_port().await?;
    let refused = closed_port().await?;
    let spec = format!("{first},{refused},{second},{first}");

    let scanner = PortScanner::new(ScanConfig::default());
    let report = scanner.scan_spec(&ScanTarget::new("127.0.0.1"), &spec).await?;

    let ports: Vec<u16> = report.results.iter().map(|r| r.port).collect();
    assert_eq!(ports, vec![first, refused, second, first]);
    assert_eq!(report.open_ports(), vec![first, second, first]);
    Ok(())
}

#[tokio::test]
#[ignore]
async fn unresolvable_host_reports_every_port_closed() -> anyhow::Result<()> {
    let cfg = ScanConfig::default().with_probe_timeout(Duration::from_secs(5));
    let scanner = PortScanner::new(cfg);
    let report = scanner
        .scan_spec(&ScanTarget::new("no-such-host.invalid"), "80,443")
        .await?;

    assert_eq!(report.count(PortStatus::Closed), 2);
    Ok(())
}
