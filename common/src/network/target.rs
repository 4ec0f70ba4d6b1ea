//! # Scan Target Model
//!
//! The host a scan is aimed at. It is kept as the raw string the user typed:
//! an IPv4/IPv6 literal or a hostname. Name resolution happens in the socket
//! layer when each probe connects.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ScanError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ScanTarget {
    pub host: String,
}

impl ScanTarget {
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }

    pub fn host(&self) -> &str {
        &self.host
    }
}

impl FromStr for ScanTarget {
    type Err = ScanError;

    /// Trims the input. Only an empty host is refused.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let host = s.trim();
        if host.is_empty() {
            return Err(ScanError::MissingFields);
        }
        Ok(ScanTarget::new(host))
    }
}

impl fmt::Display for ScanTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.host)
    }
}
