use std::io;
use std::time::Duration;

use async_trait::async_trait;
use probekit_common::report::PortStatus;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::debug;

/// The raw TCP connect a probe is built on.
///
/// Implementations resolve once a connection to `host:port` has been
/// established or has failed. An established connection must be closed
/// before returning.
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(&self, host: &str, port: u16) -> io::Result<()>;
}

/// Plain `connect(2)` through tokio. Hostnames go through the system resolver.
#[derive(Debug, Default, Clone, Copy)]
pub struct TcpConnector;

#[async_trait]
impl Connector for TcpConnector {
    async fn connect(&self, host: &str, port: u16) -> io::Result<()> {
        let stream = TcpStream::connect((host, port)).await?;
        drop(stream);
        Ok(())
    }
}

/// Races one connect against `probe_timeout`.
///
/// On timeout the connect future is dropped, which closes any socket it was
/// holding, so a late connection can never overwrite the recorded status.
pub async fn probe_port(
    connector: &dyn Connector,
    host: &str,
    port: u16,
    probe_timeout: Duration,
) -> PortStatus {
    match timeout(probe_timeout, connector.connect(host, port)).await {
        Ok(Ok(())) => PortStatus::Open,
        Ok(Err(e)) => {
            debug!("{host}:{port} closed ({:?}): {e}", e.kind());
            PortStatus::Closed
        }
        Err(_elapsed) => PortStatus::Timeout,
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
