//! # Port Scan Request Handler
//!
//! HTTP-shaped boundary in front of [`PortScanner`]. It takes a raw JSON body
//! and produces a status code plus a JSON body, leaving the transport to the
//! caller.
//!
//! * `{ "host": "...", "ports": "80,443" }` → `200 { "openPorts": [...] }`
//! * missing fields or an unusable port list → `400 { "error": "..." }`
//! * anything else → `500 { "error": "..." }`

use probekit_common::error::ScanError;
use probekit_common::network::target::ScanTarget;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{error, warn};

use crate::scanner::PortScanner;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRequest {
    pub host: String,
    pub ports: String,
}

impl ScanRequest {
    /// Pulls `host` and `ports` out of an arbitrary JSON value.
    ///
    /// A field that is absent, not a string, or blank counts as missing.
    pub fn from_json(value: &Value) -> Result<Self, ScanError> {
        let field = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
        };

        match (field("host"), field("ports")) {
            (Some(host), Some(ports)) => Ok(Self {
                host: host.to_string(),
                ports: ports.to_string(),
            }),
            _ => Err(ScanError::MissingFields),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResponse {
    pub open_ports: Vec<u16>,
}

/// Status code and JSON body to hand back to the client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reply {
    pub status: u16,
    pub body: Value,
}

impl Reply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl From<&ScanError> for Reply {
    fn from(err: &ScanError) -> Self {
        Self {
            status: err.status_code(),
            body: json!({ "error": err.to_string() }),
        }
    }
}

pub async fn handle_scan_request(scanner: &PortScanner, body: &[u8]) -> Reply {
    let outcome = run_scan(scanner, body).await.and_then(|response| {
        serde_json::to_value(response).map_err(|e| ScanError::Internal(e.to_string()))
    });

    match outcome {
        Ok(body) => Reply { status: 200, body },
        Err(err) => {
            if err.is_client_error() {
                warn!("Rejected port scan request: {err}");
            } else {
                error!("Port scan error: {err}");
            }
            Reply::from(&err)
        }
    }
}

async fn run_scan(scanner: &PortScanner, body: &[u8]) -> Result<ScanResponse, ScanError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| ScanError::Internal(e.to_string()))?;
    let request = ScanRequest::from_json(&value)?;

    let target = ScanTarget::new(request.host);
    let report = scanner.scan_spec(&target, &request.ports).await?;

    Ok(ScanResponse {
        open_ports: report.open_ports(),
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
