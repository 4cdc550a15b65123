use nmap2csv_common::config::PortFilter;
use nmap2csv_common::record::HostRecord;
use nmap2csv_common::scan::ScanDocument;
use nmap2csv_common::scan::host::Host;
use tracing::trace;

use super::rank_by_count;

/// Hosts with at least one open port matching `filter`, most open ports first.
///
/// `count_open` on each record counts every open port of the host. `ports`
/// lists only the open ports that matched the filter.
pub fn by_hostname(document: &ScanDocument, filter: &PortFilter) -> Vec<HostRecord> {
    let mut records: Vec<HostRecord> = document
        .hosts
        .iter()
        .filter_map(|host| host_record(host, filter))
        .collect();

    rank_by_count(&mut records, |record| record.count_open);
    records
}

fn host_record(host: &Host, filter: &PortFilter) -> Option<HostRecord> {
    let mut count_open: usize = 0;
    let mut matched: Vec<u16> = Vec::new();

    for port in host.open_ports() {
        count_open += 1;
        if filter.matches(port.id) {
            matched.push(port.id);
        }
    }

    if matched.is_empty() {
        trace!("Skipping host {:?}: no matching open port", host.ipv4());
        return None;
    }

    let (mac, vendor) = host.mac_and_vendor();
    Some(HostRecord {
        hostname: host.primary_hostname().to_string(),
        ipv4: host.ipv4().to_string(),
        mac: mac.to_string(),
        vendor: vendor.to_string(),
        count_open,
        ports: matched,
    })
}
