//! # Port Specification
//!
//! Turns a user supplied port list into a [`PortSet`].
//!
//! A specification is a comma-separated list of tokens, where a token is:
//! * A single port (e.g., `443`).
//! * An inclusive range (e.g., `8080-8090`).
//!
//! A token that does not parse is dropped on its own, the rest of the list
//! still counts. Only the aggregate is validated: an empty result is
//! [`ScanError::InvalidPortSpec`], an oversized one is
//! [`ScanError::TooManyPorts`].

use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::config::DEFAULT_MAX_PORTS;
use crate::error::{Result, ScanError};

/// Port 0 is reserved and never probed.
pub const MIN_PORT: u16 = 1;
pub const MAX_PORT: u16 = u16::MAX;

/// Validated ports in encounter order. Duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PortSet {
    ports: Vec<u16>,
}

impl PortSet {
    /// Parses `spec`, rejecting it once it expands past `max_ports`.
    ///
    /// The cap is checked before each range is expanded, so `1-65535` is
    /// refused without allocating it.
    pub fn parse(spec: &str, max_ports: usize) -> Result<Self> {
        let mut ports: Vec<u16> = Vec::new();

        for token in spec.split(',') {
            let token = token.trim();

            let Some(range) = parse_token(token) else {
                if !token.is_empty() {
                    debug!("Dropping unusable port token '{token}'");
                }
                continue;
            };

            if ports.len() + range_len(&range) > max_ports {
                return Err(ScanError::TooManyPorts { max: max_ports });
            }

            ports.extend(range);
        }

        if ports.is_empty() {
            return Err(ScanError::InvalidPortSpec);
        }

        Ok(Self { ports })
    }

    pub fn len(&self) -> usize {
        self.ports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }

    pub fn as_slice(&self) -> &[u16] {
        &self.ports
    }

    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        self.ports.iter().copied()
    }
}

impl FromStr for PortSet {
    type Err = ScanError;

    /// Parses with the default cap of [`DEFAULT_MAX_PORTS`].
    fn from_str(s: &str) -> Result<Self> {
        PortSet::parse(s, DEFAULT_MAX_PORTS)
    }
}

impl IntoIterator for PortSet {
    type Item = u16;
    type IntoIter = std::vec::IntoIter<u16>;

    fn into_iter(self) -> Self::IntoIter {
        self.ports.into_iter()
    }
}

/// Parses one trimmed token into the ports it stands for.
fn parse_token(token: &str) -> Option<RangeInclusive<u16>> {
    match token.split_once('-') {
        Some((start_str, end_str)) => {
            let start = parse_port(start_str)?;
            let end = parse_port(end_str)?;
            (start <= end).then_some(start..=end)
        }
        None => {
            let port = parse_port(token)?;
            Some(port..=port)
        }
    }
}

/// Anything above 65535 fails the `u16` parse, which drops it with the rest.
fn parse_port(s: &str) -> Option<u16> {
    s.trim().parse::<u16>().ok().filter(|port| *port >= MIN_PORT)
}

fn range_len(range: &RangeInclusive<u16>) -> usize {
    usize::from(*range.end() - *range.start()) + 1
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
