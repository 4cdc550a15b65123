use nmap2csv_common::record::VendorRecord;
use nmap2csv_common::scan::ScanDocument;

use super::rank_by_count;
use crate::tally::Tally;

/// MAC vendors by number of MAC addresses, most common first.
///
/// MACs without a vendor are counted under the empty name rather than dropped.
pub fn by_vendor(document: &ScanDocument) -> Vec<VendorRecord> {
    let mut tally: Tally<String, usize> = Tally::new();

    for mac in document.hosts.iter().flat_map(|host| host.mac_addresses()) {
        tally.increment(mac.vendor.clone());
    }

    let mut records: Vec<VendorRecord> = tally
        .into_entries()
        .into_iter()
        .map(|(name, count)| VendorRecord { name, count })
        .collect();
    rank_by_count(&mut records, |record| record.count);
    records
}
