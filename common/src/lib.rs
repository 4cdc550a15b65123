//! # Shared Models
//!
//! Types shared by every member of the workspace.
//!
//! ## Characteristics
//! * **Pure Rust**: No IO, no XML, no terminal. Only data and the rules attached to it.
//! * **Format agnostic**: The scan model does not know it was decoded from XML.
//!
//! ## Contents
//! * **[`scan`]**: The decoded scan document (hosts, addresses, ports).
//! * **[`record`]**: The derived, row-shaped report records.
//! * **[`config`]**: Run configuration built by the CLI.

pub mod config;
pub mod record;
pub mod scan;
