use std::io::Write;

use nmap2csv_common::config::{Config, OutputFormat, ReportMode};
use nmap2csv_core::{ReportError, dispatch};
use tempfile::NamedTempFile;

use crate::util::{config, run};

fn generate(cfg: &Config) -> (Result<Option<usize>, ReportError>, Vec<u8>) {
    let mut out: Vec<u8> = Vec::new();
    let result = dispatch::generate_report(cfg, &mut out);
    (result, out)
}

#[test]
fn missing_file_is_a_read_error() {
    let mode = Some(ReportMode::Port);
    let cfg = config("does_not_exist.xml", mode, OutputFormat::Csv);
    let (result, out) = generate(&cfg);
    let err = result.unwrap_err();
    assert!(matches!(err, ReportError::FileRead { .. }));
    assert!(err.to_string().contains("does_not_exist.xml"));
    assert!(out.is_empty());
}

#[test]
fn truncated_file_is_a_decode_error() {
    let mode = Some(ReportMode::Port);
    let cfg = config("truncated.xml", mode, OutputFormat::Csv);
    let (result, out) = generate(&cfg);
    let err = result.unwrap_err();
    assert!(matches!(err, ReportError::Decode { .. }));
    assert!(err.to_string().contains("truncated.xml"));
    assert!(std::error::Error::source(&err).is_some());
    assert!(out.is_empty());
}

#[test]
fn decode_error_wins_even_without_mode() {
    let cfg = config("truncated.xml", None, OutputFormat::Table);
    assert!(run(&cfg).is_err());
}

#[test]
fn report_from_temp_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"<nmaprun>
            <host><address addr="00:00:00:00:00:01" addrtype="mac"/></host>
            <host><address addr="00:00:00:00:00:02" addrtype="mac"/></host>
        </nmaprun>"#
    )
    .unwrap();

    let cfg = Config {
        input: file.path().to_path_buf(),
        mode: Some(ReportMode::Vendor),
        format: OutputFormat::Csv,
    };
    let (result, out) = generate(&cfg);
    assert_eq!(result.unwrap(), Some(1));
    assert_eq!(String::from_utf8(out).unwrap(), "Count,VendorName\n2,\n");
}
