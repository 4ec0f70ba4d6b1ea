use std::sync::Arc;

use colored::*;

use crate::terminal::{colors, format, print, spinner};
use probekit_common::config::ScanConfig;
use probekit_common::network::target::ScanTarget;
use probekit_common::report::{PortStatus, ScanReport};
use probekit_core::scanner::PortScanner;

pub struct OutputOptions {
    pub json: bool,
    pub all: bool,
    pub quiet: u8,
}

pub async fn scan(
    target: ScanTarget,
    spec: &str,
    cfg: ScanConfig,
    output: &OutputOptions,
) -> anyhow::Result<()> {
    let scanner = PortScanner::new(cfg);
    let ports = scanner.parse_ports(spec)?;
    let total = ports.len();

    if output.json {
        let report = scanner.scan(&target, &ports).await;
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    spinner::start_scan_spinner(total);
    let scanner = scanner.on_progress(Arc::new(move |done: usize| {
        spinner::report_probe_progress(done, total)
    }));

    let report = scanner.scan(&target, &ports).await;
    spinner::finish();

    scan_ends(&report, output);
    Ok(())
}

fn scan_ends(report: &ScanReport, output: &OutputOptions) {
    print::header("port scan", output.quiet);

    if report.count(PortStatus::Open) == 0 && !output.all {
        print::no_results();
    } else if output.quiet < 2 {
        print::tree_head(report.target.host());
        print::as_tree_one_level(format::results_to_details(&report.results, output.all));
    }

    print_summary(report, output.quiet);
}

fn print_summary(report: &ScanReport, quiet: u8) {
    let open: ColoredString = format!("{} open", report.count(PortStatus::Open)).bold().green();
    let probed: ColoredString = format!("{} ports", report.len()).bold();
    let total_time: ColoredString = format!("{:.2}s", report.elapsed.as_secs_f64()).bold().yellow();
    let mut output: String = format!("Scan Complete: {open} of {probed} in {total_time}");

    let timed_out = report.count(PortStatus::Timeout);
    if timed_out > 0 {
        output.push_str(&format!(" ({} timed out)", timed_out.to_string().yellow()));
    }
    let output: ColoredString = output.color(colors::TEXT_DEFAULT);

    match quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
            print::end_of_program();
        }
        _ => print::print(&output.to_string()),
    }
}
