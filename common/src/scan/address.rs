use std::fmt;

/// The `addrtype` of an address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AddressKind {
    Ipv4,
    Ipv6,
    Mac,
    Other(String),
}

impl From<&str> for AddressKind {
    fn from(raw: &str) -> Self {
        match raw {
            "ipv4" => Self::Ipv4,
            "ipv6" => Self::Ipv6,
            "mac" => Self::Mac,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for AddressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ipv4 => f.write_str("ipv4"),
            Self::Ipv6 => f.write_str("ipv6"),
            Self::Mac => f.write_str("mac"),
            Self::Other(raw) => f.write_str(raw),
        }
    }
}

/// A network address reported for a host.
///
/// The address text is kept exactly as the scanner wrote it; nothing is parsed
/// or normalized. `vendor` is only meaningful for [`AddressKind::Mac`] and is
/// empty when the scanner did not resolve one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub addr: String,
    pub kind: AddressKind,
    pub vendor: String,
}

impl Address {
    pub fn new(addr: impl Into<String>, kind: AddressKind) -> Self {
        Self {
            addr: addr.into(),
            kind,
            vendor: String::new(),
        }
    }

    pub fn with_vendor(mut self, vendor: impl Into<String>) -> Self {
        self.vendor = vendor.into();
        self
    }

    pub fn is_mac(&self) -> bool {
        self.kind == AddressKind::Mac
    }
}
