use std::io::{self, Write};

use nmap2csv_common::record::Tabular;
use unicode_width::UnicodeWidthStr;

/// Spaces between a column's widest cell and the next column.
pub const PADDING: usize = 2;

/// Writes a header row, a dashed separator row and one row per record.
///
/// Every column except the last is padded to its widest cell plus [`PADDING`].
/// The last cell of a line is written as is.
pub fn write_table<T, W>(records: &[T], out: &mut W) -> io::Result<()>
where
    T: Tabular,
    W: Write,
{
    let headers: &[&str] = T::headers();

    let mut lines: Vec<Vec<String>> = Vec::with_capacity(records.len() + 2);
    lines.push(headers.iter().map(|h| h.to_string()).collect());
    lines.push(headers.iter().map(|h| "-".repeat(h.width())).collect());
    lines.extend(records.iter().map(Tabular::row));

    let widths: Vec<usize> = column_widths(&lines, headers.len());
    for line in &lines {
        write_line(out, line, &widths)?;
    }
    Ok(())
}

fn column_widths(lines: &[Vec<String>], columns: usize) -> Vec<usize> {
    let mut widths: Vec<usize> = vec![0; columns];
    for line in lines {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.width());
        }
    }
    widths
}

fn write_line<W: Write>(out: &mut W, cells: &[String], widths: &[usize]) -> io::Result<()> {
    let last: usize = cells.len().saturating_sub(1);
    for (idx, cell) in cells.iter().enumerate() {
        if idx == last {
            write!(out, "{cell}")?;
        } else {
            let fill: usize = widths[idx] + PADDING - cell.width();
            write!(out, "{cell}{}", " ".repeat(fill))?;
        }
    }
    writeln!(out)
}
