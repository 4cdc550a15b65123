use std::collections::HashSet;
use std::path::PathBuf;

/// Settings for a single report run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the scanner XML report.
    pub input: PathBuf,
    /// The report to produce. `None` means no report was requested.
    pub mode: Option<ReportMode>,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
}

impl OutputFormat {
    pub fn from_csv_flag(csv: bool) -> Self {
        if csv { Self::Csv } else { Self::Table }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportMode {
    /// Hosts ranked by open port count, optionally restricted to some ports.
    Hostname { filter: PortFilter },
    /// `port/protocol` pairs ranked by how many hosts have them open.
    Port,
    /// NIC vendors ranked by how many MAC addresses they own.
    Vendor,
}

impl ReportMode {
    /// Picks the report from independent mode flags.
    ///
    /// The flags are not mutually exclusive. The first set flag in the order
    /// hostname, port, vendor wins.
    pub fn from_flags(hostname: bool, port: bool, vendor: bool, where_ports: &str) -> Option<Self> {
        if hostname {
            return Some(Self::Hostname {
                filter: PortFilter::parse(where_ports),
            });
        }
        if port {
            return Some(Self::Port);
        }
        if vendor {
            return Some(Self::Vendor);
        }
        None
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Hostname { .. } => "hostname",
            Self::Port => "port",
            Self::Vendor => "vendor",
        }
    }
}

/// Ports a host must have open to show up in the hostname report.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PortFilter {
    #[default]
    All,
    /// Decimal port numbers compared as text.
    Only(HashSet<String>),
}

impl PortFilter {
    /// Parses a comma separated port list. Only the empty string means "all".
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::All;
        }
        Self::Only(raw.split(',').map(|p| p.trim().to_string()).collect())
    }

    pub fn matches(&self, port_id: u16) -> bool {
        match self {
            Self::All => true,
            Self::Only(ports) => ports.contains(&port_id.to_string()),
        }
    }
}
