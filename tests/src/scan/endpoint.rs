use probekit_common::config::ScanConfig;
use probekit_core::handler::{ScanRequest, handle_scan_request};
use probekit_core::scanner::PortScanner;
use serde_json::json;

use crate::utils::{closed_port, open_port};

fn body(host: &str, ports: &str) -> Vec<u8> {
    let request = ScanRequest {
        host: host.to_string(),
        ports: ports.to_string(),
    };
    serde_json::to_vec(&request).unwrap()
}

#[tokio::test]
async fn localhost_reports_only_the_listening_port() -> anyhow::Result<()> {
    let (_listener, open) = open_port().await?;
    let refused = closed_port().await?;

    let scanner = PortScanner::new(ScanConfig::default());
    let reply = handle_scan_request(&scanner, &body("localhost", &format!("{open},{refused}"))).await;

    assert_eq!(reply.status, 200);
    assert_eq!(reply.body, json!({ "openPorts": [open] }));
    Ok(())
}

#[tokio::test]
async fn missing_host_is_a_client_error() {
    let scanner = PortScanner::new(ScanConfig::default());
    let reply = handle_scan_request(&scanner, br#"{ "ports": "22,9999" }"#).await;

    assert_eq!(reply.status, 400);
    assert_eq!(reply.body, json!({ "error": "Host and ports are required." }));
}

#[tokio::test]
async fn single_port_range_is_valid() -> anyhow::Result<()> {
    let refused = closed_port().await?;
    let scanner = PortScanner::new(ScanConfig::default());

    let reply = handle_scan_request(&scanner, &body("127.0.0.1", &format!("{refused}-{refused}"))).await;

    assert_eq!(reply.status, 200);
    assert_eq!(reply.body, json!({ "openPorts": [] }));
    Ok(())
}

#[tokio::test]
async fn out_of_range_only_token_is_rejected() {
    let scanner = PortScanner::new(ScanConfig::default());
    let reply = handle_scan_request(&scanner, &body("127.0.0.1", "65536")).await;

    assert_eq!(reply.status, 400);
    assert!(reply.body["error"].as_str().unwrap().starts_with("Invalid port format."));
}

#[tokio::test]
async fn cap_follows_the_configuration() {
    let scanner = PortScanner::new(ScanConfig::default().with_max_ports(5));

    let reply = handle_scan_request(&scanner, &body("127.0.0.1", "1-6")).await;

    assert_eq!(reply.status, 400);
    assert_eq!(
        reply.body,
        json!({ "error": "Too many ports. Please scan a maximum of 5 ports at a time." })
    );
}

#[tokio::test]
async fn hundred_and_one_ports_are_rejected_by_default() {
    let scanner = PortScanner::new(ScanConfig::default());
    let reply = handle_scan_request(&scanner, &body("127.0.0.1", "1000-1100")).await;

    assert_eq!(reply.status, 400);
}
