pub mod report;

use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(name = "nmap2csv", version)]
#[command(about = "Summarize an Nmap XML report as a table or CSV.")]
pub struct CommandLine {
    /// Nmap XML file
    #[arg(short, long, default_value = "scan.xml")]
    pub file: PathBuf,

    /// List hosts with open ports, most open ports first
    #[arg(long)]
    pub hostname: bool,

    /// Comma-separated list of ports a host must have open (with --hostname)
    #[arg(long, value_name = "PORTS")]
    pub whereport: Option<String>,

    /// List unique ports with counts
    #[arg(long)]
    pub port: bool,

    /// List MAC vendors with counts
    #[arg(long)]
    pub vendor: bool,

    /// Output in CSV format
    #[arg(long)]
    pub csv: bool,

    /// More diagnostics on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
