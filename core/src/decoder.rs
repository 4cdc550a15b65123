//! Nmap XML deserialization.
//!
//! The XML is first read into wire structs that mirror the element layout
//! (`<host>`, `<hostnames><hostname/></hostnames>`, `<ports><port/></ports>`)
//! and then flattened into the format-agnostic [`ScanDocument`]. Elements and
//! attributes not listed here are ignored.

use std::fs;
use std::path::Path;

use nmap2csv_common::scan::ScanDocument;
use nmap2csv_common::scan::address::{Address, AddressKind};
use nmap2csv_common::scan::host::Host;
use nmap2csv_common::scan::port::{Port, PortState, Protocol};
use serde::{Deserialize, Deserializer, de};
use tracing::debug;

use crate::error::{ReportError, Result};

/// Root element: `<nmaprun>`.
#[derive(Debug, Deserialize)]
struct NmapRun {
    #[serde(rename = "host", default)]
    hosts: Vec<XmlHost>,
}

#[derive(Debug, Deserialize)]
struct XmlHost {
    #[serde(rename = "address", default)]
    addresses: Vec<XmlAddress>,
    hostnames: Option<XmlHostnames>,
    ports: Option<XmlPorts>,
}

#[derive(Debug, Deserialize)]
struct XmlAddress {
    #[serde(rename = "@addr", default)]
    addr: String,
    #[serde(rename = "@addrtype", default)]
    addr_type: String,
    #[serde(rename = "@vendor", default)]
    vendor: String,
}

#[derive(Debug, Deserialize)]
struct XmlHostnames {
    #[serde(rename = "hostname", default)]
    hostnames: Vec<XmlHostname>,
}

#[derive(Debug, Deserialize)]
struct XmlHostname {
    #[serde(rename = "@name", default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct XmlPorts {
    #[serde(rename = "port", default)]
    ports: Vec<XmlPort>,
}

#[derive(Debug, Deserialize)]
struct XmlPort {
    #[serde(rename = "@protocol", default)]
    protocol: String,
    #[serde(rename = "@portid", default, deserialize_with = "port_id")]
    port_id: u16,
    state: Option<XmlState>,
    service: Option<XmlService>,
}

#[derive(Debug, Deserialize)]
struct XmlState {
    #[serde(rename = "@state", default)]
    state: String,
}

#[derive(Debug, Deserialize)]
struct XmlService {
    #[serde(rename = "@name", default)]
    name: String,
}

/// Reads `portid`; an empty value is treated like a missing one and becomes 0.
fn port_id<'de, D>(deserializer: D) -> std::result::Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse().map_err(de::Error::custom)
}

impl From<XmlAddress> for Address {
    fn from(xml: XmlAddress) -> Self {
        let kind = AddressKind::from(xml.addr_type.as_str());
        Address::new(xml.addr, kind).with_vendor(xml.vendor)
    }
}

impl From<XmlPort> for Port {
    fn from(xml: XmlPort) -> Self {
        let state = xml.state.map(|s| s.state).unwrap_or_default();
        let service = xml.service.map(|s| s.name).unwrap_or_default();
        Port::new(
            Protocol::from(xml.protocol.as_str()),
            xml.port_id,
            PortState::from(state.as_str()),
        )
        .with_service(service)
    }
}

impl From<XmlHost> for Host {
    fn from(xml: XmlHost) -> Self {
        Host {
            addresses: xml.addresses.into_iter().map(Address::from).collect(),
            hostnames: xml
                .hostnames
                .map(|h| h.hostnames.into_iter().map(|h| h.name).collect())
                .unwrap_or_default(),
            ports: xml
                .ports
                .map(|p| p.ports.into_iter().map(Port::from).collect())
                .unwrap_or_default(),
        }
    }
}

/// Decodes an in-memory Nmap XML report.
pub fn decode(xml: &[u8]) -> std::result::Result<ScanDocument, quick_xml::DeError> {
    let run: NmapRun = quick_xml::de::from_reader(xml)?;
    Ok(ScanDocument::new(run.hosts.into_iter().map(Host::from).collect()))
}

/// Reads and decodes the report at `path`.
///
/// The whole file is read before decoding starts.
pub fn decode_file(path: &Path) -> Result<ScanDocument> {
    let bytes = fs::read(path).map_err(|source| ReportError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());

    let document = decode(&bytes).map_err(|source| ReportError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        "Decoded {} hosts with {} open ports",
        document.hosts.len(),
        document.open_port_count()
    );

    Ok(document)
}
