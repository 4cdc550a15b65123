use super::address::{Address, AddressKind};
use super::port::Port;

/// One scanned machine as reported by the scanner.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Host {
    pub addresses: Vec<Address>,
    /// Resolved names in report order.
    pub hostnames: Vec<String>,
    pub ports: Vec<Port>,
}

impl Host {
    /// The first resolved hostname, or `""` when none was reported.
    pub fn primary_hostname(&self) -> &str {
        self.hostnames.first().map(String::as_str).unwrap_or("")
    }

    /// The last address of the given kind.
    ///
    /// When a host reports several addresses of one kind the last one wins.
    pub fn last_address(&self, kind: &AddressKind) -> Option<&Address> {
        self.addresses.iter().rev().find(|addr| &addr.kind == kind)
    }

    pub fn ipv4(&self) -> &str {
        self.last_address(&AddressKind::Ipv4)
            .map(|addr| addr.addr.as_str())
            .unwrap_or("")
    }

    /// MAC address and its vendor, both empty when no MAC was reported.
    pub fn mac_and_vendor(&self) -> (&str, &str) {
        self.last_address(&AddressKind::Mac)
            .map(|addr| (addr.addr.as_str(), addr.vendor.as_str()))
            .unwrap_or(("", ""))
    }

    pub fn mac_addresses(&self) -> impl Iterator<Item = &Address> {
        self.addresses.iter().filter(|addr| addr.is_mac())
    }

    pub fn open_ports(&self) -> impl Iterator<Item = &Port> {
        self.ports.iter().filter(|port| port.is_open())
    }
}
