pub mod request;
pub mod scan;

use std::time::Duration;

use clap::{ArgAction, Parser, Subcommand};
use probekit_common::config::{DEFAULT_MAX_PORTS, ScanConfig};
use probekit_common::network::target::ScanTarget;

#[derive(Parser)]
#[command(name = "probekit")]
#[command(about = "Concurrent TCP port prober.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Per-port connect timeout in milliseconds
    #[arg(long, global = true, default_value_t = 2_000)]
    pub timeout_ms: u64,

    /// Maximum number of ports a single scan may expand to
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_PORTS)]
    pub max_ports: usize,

    /// Maximum number of connect attempts in flight at once
    #[arg(long, global = true)]
    pub max_concurrent: Option<usize>,

    /// Less decoration (-q hides headers, -qq also hides the result tree)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// More logging (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Probe a list of ports on one host
    #[command(alias = "s")]
    Scan {
        /// Hostname or IP address
        target: ScanTarget,
        /// Ports and ranges, e.g. "22,80,8000-8010"
        ports: String,
        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
        /// List closed and timed out ports too
        #[arg(short, long)]
        all: bool,
    },
    /// Answer a JSON scan request ({"host", "ports"}) like the HTTP endpoint
    #[command(alias = "r")]
    Request {
        /// Request body. Read from stdin when omitted.
        body: Option<String>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn scan_config(&self) -> ScanConfig {
        let cfg = ScanConfig::default()
            .with_probe_timeout(Duration::from_millis(self.timeout_ms))
            .with_max_ports(self.max_ports);

        match self.max_concurrent {
            Some(limit) => cfg.with_max_concurrent_probes(limit),
            None => cfg,
        }
    }
}
