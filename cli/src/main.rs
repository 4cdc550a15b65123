mod commands;
mod terminal;

use commands::{CommandLine, report};
use nmap2csv_common::config::{Config, OutputFormat, ReportMode};
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let cfg = Config {
        input: commands.file,
        mode: ReportMode::from_flags(
            commands.hostname,
            commands.port,
            commands.vendor,
            commands.whereport.as_deref().unwrap_or(""),
        ),
        format: OutputFormat::from_csv_flag(commands.csv),
    };

    report::report(&cfg)
}
