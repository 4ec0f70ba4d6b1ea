use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use probekit_core::network::tcp::{Connector, TcpConnector};
use tokio::net::TcpListener;

/// A bound loopback listener. Connects succeed through the backlog even
/// though nothing ever accepts.
pub async fn open_port() -> anyhow::Result<(TcpListener, u16)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();
    Ok((listener, port))
}

/// A loopback port that was free a moment ago, so connects are refused.
pub async fn closed_port() -> anyhow::Result<u16> {
    let (listener, port) = open_port().await?;
    drop(listener);
    Ok(port)
}

/// Never answers.
pub struct HangingConnector;

#[async_trait]
impl Connector for HangingConnector {
    async fn connect(&self, _host: &str, _port: u16) -> io::Result<()> {
        std::future::pending().await
    }
}

/// Real TCP, except for one port whose probe panics.
pub struct FaultyConnector {
    pub panic_on: u16,
}

#[async_trait]
impl Connector for FaultyConnector {
    async fn connect(&self, host: &str, port: u16) -> io::Result<()> {
        if port == self.panic_on {
            panic!("injected fault while probing port {port}");
        }
        TcpConnector.connect(host, port).await
    }
}

/// Accepts after `delay` and records the highest number of connects seen in flight.
pub struct CountingConnector {
    pub delay: Duration,
    in_flight: AtomicUsize,
    pub peak: Arc<AtomicUsize>,
}

impl CountingConnector {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            in_flight: AtomicUsize::new(0),
            peak: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl Connector for CountingConnector {
    async fn connect(&self, _host: &str, _port: u16) -> io::Result<()> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        Ok(())
    }
}
