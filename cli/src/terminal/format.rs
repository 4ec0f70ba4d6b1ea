use colored::*;
use probekit_common::report::{PortStatus, ProbeResult};

use crate::terminal::colors;

type Detail = (String, ColoredString);

pub fn status_to_colored(status: PortStatus) -> ColoredString {
    let color = match status {
        PortStatus::Open => colors::PORT_OPEN,
        PortStatus::Closed => colors::PORT_CLOSED,
        PortStatus::Timeout => colors::PORT_TIMEOUT,
    };
    status.to_string().color(color)
}

pub fn result_to_detail(result: &ProbeResult) -> Detail {
    let mut status = status_to_colored(result.status);
    if result.is_open() {
        status = status.bold();
    }
    (result.port.to_string(), status)
}

/// Open ports only, unless `show_all` is set.
pub fn results_to_details(results: &[ProbeResult], show_all: bool) -> Vec<Detail> {
    results
        .iter()
        .filter(|result| show_all || result.is_open())
        .map(result_to_detail)
        .collect()
}
