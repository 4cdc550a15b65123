use std::io::{self, BufWriter, Write};

use anyhow::Context;
use nmap2csv_common::config::Config;
use nmap2csv_core::dispatch;
use tracing::debug;

/// Writes the configured report to stdout.
pub fn report(cfg: &Config) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    report_to(cfg, &mut out)
}

/// Writes the configured report to `out`.
///
/// `out` is flushed before returning, whether or not the report succeeded.
pub fn report_to<W: Write>(cfg: &Config, out: &mut W) -> anyhow::Result<()> {
    let result = dispatch::generate_report(cfg, out);
    let flushed = out.flush().context("failed to flush report");

    match result? {
        Some(count) => debug!("Report complete: {} rows", count),
        None => debug!("Nothing to report"),
    }
    flushed
}
