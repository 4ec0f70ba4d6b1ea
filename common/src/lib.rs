//! Shared data model for `probekit`.
//!
//! Everything in here is pure: parsing, configuration and result types. The
//! network side lives in `probekit-core`.

pub mod config;
pub mod error;
pub mod network;
pub mod report;
