//! # Aggregators
//!
//! Pure reductions from a [`nmap2csv_common::scan::ScanDocument`] to a ranked list of
//! records, one per report mode. Each function builds its own accumulator and
//! returns the ranked records by value.
//!
//! Only ports in state `open` contribute to any report.
//!
//! Ranking is always by count, highest first. Sorting is stable, so equal counts
//! keep the order in which the records were first produced.

pub mod hosts;
pub mod ports;
pub mod vendors;

pub use hosts::by_hostname;
pub use ports::by_port;
pub use vendors::by_vendor;

/// Stable sort by a count key, highest first.
fn rank_by_count<T, F>(records: &mut [T], count: F)
where
    F: Fn(&T) -> usize,
{
    records.sort_by(|a, b| count(b).cmp(&count(a)));
}
