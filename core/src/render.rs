//! # Presenter
//!
//! Writes ranked records either as an aligned text table or as CSV. Both
//! formats always start with a header row and keep the records in the order
//! they were given.

pub mod delimited;
pub mod table;

use std::io::Write;

use nmap2csv_common::config::OutputFormat;
use nmap2csv_common::record::Tabular;

use crate::error::Result;

pub fn render<T, W>(records: &[T], format: OutputFormat, out: &mut W) -> Result<()>
where
    T: Tabular,
    W: Write,
{
    match format {
        OutputFormat::Table => table::write_table(records, out)?,
        OutputFormat::Csv => delimited::write_csv(records, out)?,
    }
    Ok(())
}
