//! # Scan Document Model
//!
//! The decoded scanner report. Built once by the decoder and read-only afterwards.
//!
//! * [`ScanDocument`]: The whole report, an ordered list of hosts.
//! * [`host::Host`]: One scanned machine.
//! * [`address::Address`]: An IPv4, IPv6 or MAC address (MACs carry a vendor).
//! * [`port::Port`]: A scanned port with its state and service.

pub mod address;
pub mod host;
pub mod port;

use host::Host;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanDocument {
    pub hosts: Vec<Host>,
}

impl ScanDocument {
    pub fn new(hosts: Vec<Host>) -> Self {
        Self { hosts }
    }

    /// Total number of ports in state `open` across every host.
    pub fn open_port_count(&self) -> usize {
        self.hosts
            .iter()
            .map(|host| host.open_ports().count())
            .sum()
    }
}
