//! Probing engine for `probekit`.
//!
//! * [`network`]: the connect primitive a probe is built on.
//! * [`scanner`]: runs every probe of a request concurrently and gathers a report.
//! * [`handler`]: JSON request/response boundary in front of the scanner.

pub mod handler;
pub mod network;
pub mod scanner;

#[cfg(test)]
mod testing;
