use std::io::Write;

use csv::Writer;
use nmap2csv_common::record::Tabular;

/// Writes a CSV header row then one row per record.
///
/// Fields are quoted only when needed, so a port list such as `22,80` comes
/// out as `"22,80"`.
pub fn write_csv<T, W>(records: &[T], out: &mut W) -> csv::Result<()>
where
    T: Tabular,
    W: Write,
{
    let mut wtr = Writer::from_writer(out);
    wtr.write_record(T::headers())?;
    for record in records {
        wtr.write_record(record.row())?;
    }
    wtr.flush()?;
    Ok(())
}
