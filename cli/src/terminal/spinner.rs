use std::sync::OnceLock;
use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

static SPINNER: OnceLock<ProgressBar> = OnceLock::new();

const TICK_STRINGS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

fn init_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(TICK_STRINGS);

    pb.set_style(style);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

pub fn start_scan_spinner(total: usize) {
    let pb = SPINNER.get_or_init(init_spinner);
    pb.set_message(format!("Probing {} ports...", total.to_string().bold()));
}

pub fn report_probe_progress(done: usize, total: usize) {
    if let Some(pb) = SPINNER.get() {
        pb.set_message(format!(
            "Probed {}/{} ports so far...",
            done.to_string().green().bold(),
            total
        ));
    }
}

pub fn finish() {
    if let Some(pb) = SPINNER.get() {
        pb.finish_and_clear();
    }
}

/// Runs `f` with the spinner hidden, so whatever `f` prints is not torn.
pub fn suspend<F: FnOnce() -> R, R>(f: F) -> R {
    match SPINNER.get() {
        Some(pb) => pb.suspend(f),
        None => f(),
    }
}
