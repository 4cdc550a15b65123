use nmap2csv_common::config::{OutputFormat, PortFilter, ReportMode};
use nmap2csv_common::record::Tabular;
use nmap2csv_core::{aggregate, decoder, dispatch, render};

use crate::util::{fixture, parse_csv};

fn rendered_rows<T: Tabular>(records: &[T]) -> Vec<Vec<String>> {
    let mut out: Vec<u8> = Vec::new();
    render::render(records, OutputFormat::Csv, &mut out).unwrap();
    parse_csv(&String::from_utf8(out).unwrap())
}

fn expected_rows<T: Tabular>(records: &[T]) -> Vec<Vec<String>> {
    let header: Vec<String> = T::headers().iter().map(|h| h.to_string()).collect();
    let mut rows = vec![header];
    rows.extend(records.iter().map(Tabular::row));
    rows
}

#[test]
fn host_records_survive_csv() {
    let doc = decoder::decode_file(&fixture("lan.xml")).unwrap();
    let records = aggregate::by_hostname(&doc, &PortFilter::All);
    assert!(records.iter().any(|r| r.ports.len() > 1));
    assert_eq!(rendered_rows(&records), expected_rows(&records));
}

#[test]
fn port_records_survive_csv() {
    let doc = decoder::decode_file(&fixture("lan.xml")).unwrap();
    let records = aggregate::by_port(&doc);
    assert_eq!(rendered_rows(&records), expected_rows(&records));
}

#[test]
fn vendor_records_survive_csv() {
    let doc = decoder::decode_file(&fixture("lan.xml")).unwrap();
    let records = aggregate::by_vendor(&doc);
    assert_eq!(rendered_rows(&records), expected_rows(&records));
}

#[test]
fn multi_port_field_is_quoted_on_the_wire() {
    let doc = decoder::decode_file(&fixture("two_hosts.xml")).unwrap();
    let mut out: Vec<u8> = Vec::new();
    let mode = ReportMode::Hostname {
        filter: PortFilter::All,
    };
    let written = dispatch::dispatch(&doc, &mode, OutputFormat::Csv, &mut out);
    assert_eq!(written.unwrap(), 2);
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains(",2,\"22,80\"\n"));
    assert_eq!(parse_csv(&text)[1][5], "22,80");
}
