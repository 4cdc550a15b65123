use std::fmt;

/// Transport protocol of a port. Unknown protocols keep their raw text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Protocol {
    Tcp,
    Udp,
    Sctp,
    Other(String),
}

impl From<&str> for Protocol {
    fn from(raw: &str) -> Self {
        match raw {
            "tcp" => Self::Tcp,
            "udp" => Self::Udp,
            "sctp" => Self::Sctp,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tcp => f.write_str("tcp"),
            Self::Udp => f.write_str("udp"),
            Self::Sctp => f.write_str("sctp"),
            Self::Other(raw) => f.write_str(raw),
        }
    }
}

/// Reported state of a port.
///
/// Only an exact `open` counts as [`PortState::Open`]. Compound states such as
/// `open|filtered` land in [`PortState::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PortState {
    Open,
    Closed,
    Filtered,
    Other(String),
}

impl From<&str> for PortState {
    fn from(raw: &str) -> Self {
        match raw {
            "open" => Self::Open,
            "closed" => Self::Closed,
            "filtered" => Self::Filtered,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for PortState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => f.write_str("open"),
            Self::Closed => f.write_str("closed"),
            Self::Filtered => f.write_str("filtered"),
            Self::Other(raw) => f.write_str(raw),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Port {
    pub protocol: Protocol,
    pub id: u16,
    pub state: PortState,
    /// Detected service name, empty when the scanner did not report one.
    pub service: String,
}

impl Port {
    pub fn new(protocol: Protocol, id: u16, state: PortState) -> Self {
        Self {
            protocol,
            id,
            state,
            service: String::new(),
        }
    }

    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = service.into();
        self
    }

    pub fn is_open(&self) -> bool {
        self.state == PortState::Open
    }

    /// The `"<id>/<protocol>"` key, e.g. `"443/tcp"`.
    pub fn key(&self) -> String {
        format!("{}/{}", self.id, self.protocol)
    }
}
