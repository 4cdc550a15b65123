use nmap2csv_common::record::PortRecord;
use nmap2csv_common::scan::ScanDocument;

use super::rank_by_count;
use crate::tally::Tally;

/// Open `port/protocol` pairs, most common first.
///
/// The service name of a pair is the one seen on its first encounter. Ties
/// keep the order in which the pairs were first seen.
pub fn by_port(document: &ScanDocument) -> Vec<PortRecord> {
    let mut tally: Tally<String, PortRecord> = Tally::new();

    for port in document.hosts.iter().flat_map(|host| host.open_ports()) {
        let key = port.key();
        let record = tally.entry_or_insert_with(key.clone(), || PortRecord {
            key,
            service: port.service.clone(),
            count: 0,
        });
        record.count += 1;
    }

    let mut records: Vec<PortRecord> = tally
        .into_entries()
        .into_iter()
        .map(|(_, record)| record)
        .collect();
    rank_by_count(&mut records, |record| record.count);
    records
}
