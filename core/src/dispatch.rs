//! Mode dispatch: picks the aggregator for the requested report and hands its
//! records to the presenter.

use std::io::Write;

use nmap2csv_common::config::{Config, OutputFormat, ReportMode};
use nmap2csv_common::scan::ScanDocument;
use tracing::{debug, warn};

use crate::aggregate;
use crate::decoder;
use crate::error::Result;
use crate::render;

/// Decodes the configured input and writes the requested report to `out`.
///
/// The input is always read and decoded, even when no report mode was
/// requested, so a bad input file fails the run either way. Returns the
/// number of records written, or `None` when there was no mode.
pub fn generate_report<W: Write>(cfg: &Config, out: &mut W) -> Result<Option<usize>> {
    let document: ScanDocument = decoder::decode_file(&cfg.input)?;

    let Some(mode) = &cfg.mode else {
        warn!("No report selected, use --hostname, --port or --vendor");
        return Ok(None);
    };

    dispatch(&document, mode, cfg.format, out).map(Some)
}

/// Runs exactly one aggregator and renders its records.
pub fn dispatch<W: Write>(
    document: &ScanDocument,
    mode: &ReportMode,
    format: OutputFormat,
    out: &mut W,
) -> Result<usize> {
    debug!("Building {} report as {:?}", mode.name(), format);

    let written: usize = match mode {
        ReportMode::Hostname { filter } => {
            let records = aggregate::by_hostname(document, filter);
            render::render(&records, format, out)?;
            records.len()
        }
        ReportMode::Port => {
            let records = aggregate::by_port(document);
            render::render(&records, format, out)?;
            records.len()
        }
        ReportMode::Vendor => {
            let records = aggregate::by_vendor(document);
            render::render(&records, format, out)?;
            records.len()
        }
    };

    debug!("Wrote {} records", written);
    Ok(written)
}
