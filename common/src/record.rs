//! # Report Records
//!
//! Row-shaped values derived from a [`crate::scan::ScanDocument`]. They are rebuilt
//! on every run and never mutated once an aggregator has returned them.

/// A value that can be laid out as one row under a fixed set of columns.
pub trait Tabular {
    /// Column headers, in display order.
    fn headers() -> &'static [&'static str];

    /// This record's cells, one per header.
    fn row(&self) -> Vec<String>;
}

/// One host in the hostname report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostRecord {
    pub hostname: String,
    pub ipv4: String,
    pub mac: String,
    pub vendor: String,
    /// Every open port on the host, whether or not it matched the filter.
    pub count_open: usize,
    /// Open ports that matched the filter, in report order.
    pub ports: Vec<u16>,
}

impl HostRecord {
    pub fn ports_joined(&self) -> String {
        self.ports
            .iter()
            .map(u16::to_string)
            .collect::<Vec<String>>()
            .join(",")
    }
}

impl Tabular for HostRecord {
    fn headers() -> &'static [&'static str] {
        &[
            "Hostname",
            "IPv4",
            "MAC",
            "Vendor",
            "CountOpenPort",
            "Ports",
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.hostname.clone(),
            self.ipv4.clone(),
            self.mac.clone(),
            self.vendor.clone(),
            self.count_open.to_string(),
            self.ports_joined(),
        ]
    }
}

/// One `port/protocol` pair in the port report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortRecord {
    pub key: String,
    pub service: String,
    pub count: usize,
}

impl Tabular for PortRecord {
    fn headers() -> &'static [&'static str] {
        &["Count", "Port/Proto", "ServiceName"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.count.to_string(),
            self.key.clone(),
            self.service.clone(),
        ]
    }
}

/// One NIC vendor in the vendor report. `name` is empty for MACs without a vendor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorRecord {
    pub name: String,
    pub count: usize,
}

impl Tabular for VendorRecord {
    fn headers() -> &'static [&'static str] {
        &["Count", "VendorName"]
    }

    fn row(&self) -> Vec<String> {
        vec![self.count.to_string(), self.name.clone()]
    }
}
