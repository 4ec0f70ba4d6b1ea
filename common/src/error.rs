//! Error types for the scan pipeline.

use thiserror::Error;

/// Result type alias for scan operations.
pub type Result<T> = std::result::Result<T, ScanError>;

/// Request-level failures. Per-port network errors never show up here, they
/// are folded into [`PortStatus::Closed`](crate::report::PortStatus::Closed).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// The request did not carry both a host and a port specification.
    #[error("Host and ports are required.")]
    MissingFields,

    /// Every token of the port specification was dropped.
    #[error("Invalid port format. Use comma-separated values or ranges (e.g., 80, 443, 8080-8090).")]
    InvalidPortSpec,

    /// The port specification expands past the configured cap.
    #[error("Too many ports. Please scan a maximum of {max} ports at a time.")]
    TooManyPorts { max: usize },

    /// Anything else. Reported to the client with a short description only.
    #[error("An internal error occurred: {0}")]
    Internal(String),
}

impl ScanError {
    /// HTTP status this error is surfaced with.
    pub fn status_code(&self) -> u16 {
        match self {
            ScanError::MissingFields | ScanError::InvalidPortSpec | ScanError::TooManyPorts { .. } => 400,
            ScanError::Internal(_) => 500,
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}
