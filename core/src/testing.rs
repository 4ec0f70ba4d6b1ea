use std::collections::HashMap;
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::network::tcp::Connector;

#[derive(Debug, Clone, Copy)]
pub enum Behaviour {
    Accept,
    Refuse,
    Hang,
    Panic,
    /// Accepts after the given delay.
    Slow(Duration),
}

/// Connector answering from a per-port script. Unscripted ports refuse.
#[derive(Default)]
pub struct ScriptedConnector {
    script: HashMap<u16, Behaviour>,
    in_flight: Arc<AtomicUsize>,
    peak: Arc<AtomicUsize>,
}

impl ScriptedConnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, port: u16, behaviour: Behaviour) -> Self {
        self.script.insert(port, behaviour);
        self
    }

    pub fn with_all(mut self, ports: impl IntoIterator<Item = u16>, behaviour: Behaviour) -> Self {
        for port in ports {
            self.script.insert(port, behaviour);
        }
        self
    }

    /// Highest number of connects observed in flight at once.
    pub fn peak(&self) -> Arc<AtomicUsize> {
        self.peak.clone()
    }
}

#[async_trait]
impl Connector for ScriptedConnector {
    async fn connect(&self, _host: &str, port: u16) -> io::Result<()> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);

        let behaviour = self.script.get(&port).copied().unwrap_or(Behaviour::Refuse);
        let outcome = match behaviour {
            Behaviour::Accept => Ok(()),
            Behaviour::Refuse => Err(io::Error::from(io::ErrorKind::ConnectionRefused)),
            Behaviour::Hang => std::future::pending().await,
            Behaviour::Panic => panic!("scripted panic on port {port}"),
            Behaviour::Slow(delay) => {
                tokio::time::sleep(delay).await;
                Ok(())
            }
        };

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        outcome
    }
}
