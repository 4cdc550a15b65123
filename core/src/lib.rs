//! # Report Engine
//!
//! Turns a scanner XML report into one ranked report.
//!
//! Pipeline: [`decoder`] → [`dispatch`] → one of the [`aggregate`] reductions → [`render`].
//!
//! * **[`decoder`]**: XML bytes to [`nmap2csv_common::scan::ScanDocument`].
//! * **[`aggregate`]**: The three reductions (hosts, ports, vendors).
//! * **[`render`]**: Aligned table and CSV output.
//! * **[`dispatch`]**: Runs the pipeline selected by the configuration.

pub mod aggregate;
pub mod decoder;
pub mod dispatch;
pub mod error;
pub mod render;
pub mod tally;

pub use error::{ReportError, Result};
