use nmap2csv_common::config::{OutputFormat, ReportMode};

use crate::util::{config, csv_report, hostname, parse_csv, run, table_report};

/*************************************************************
                  Two host example report
**************************************************************/

#[test]
fn port_mode_ranks_by_host_count() {
    let out = csv_report("two_hosts.xml", Some(ReportMode::Port));
    assert_eq!(
        out,
        "Count,Port/Proto,ServiceName\n2,22/tcp,ssh\n1,80/tcp,http\n"
    );
}

#[test]
fn hostname_mode_filters_ports_but_counts_all_open() {
    let out = csv_report("two_hosts.xml", hostname("22"));
    let expected = "\
Hostname,IPv4,MAC,Vendor,CountOpenPort,Ports
alpha.lan,10.0.0.1,AA:BB:CC:00:00:01,Intel Corporate,2,22
,10.0.0.2,,,1,22
";
    assert_eq!(out, expected);
}

#[test]
fn port_mode_as_table() {
    let out = table_report("two_hosts.xml", Some(ReportMode::Port));
    let expected = "\
Count  Port/Proto  ServiceName
-----  ----------  -----------
2      22/tcp      ssh
1      80/tcp      http
";
    assert_eq!(out, expected);
}

/*************************************************************
                    Verbose LAN report
**************************************************************/

#[test]
fn lan_port_mode_breaks_ties_by_first_seen() {
    let out = csv_report("lan.xml", Some(ReportMode::Port));
    let expected = "\
Count,Port/Proto,ServiceName
2,80/tcp,http
2,443/tcp,https
1,53/udp,domain
1,22/tcp,ssh
";
    assert_eq!(out, expected);
}

#[test]
fn lan_vendor_mode_keeps_empty_vendor_bucket() {
    let out = csv_report("lan.xml", Some(ReportMode::Vendor));
    assert_eq!(out, "Count,VendorName\n2,Cisco Systems\n2,\n");
}

#[test]
fn lan_hostname_mode_without_filter() {
    let out = csv_report("lan.xml", hostname(""));
    let expected = "\
Hostname,IPv4,MAC,Vendor,CountOpenPort,Ports
gw.home,192.168.1.1,00:11:22:33:44:01,Cisco Systems,3,\"53,80,443\"
nas.home,192.168.1.30,00:11:22:33:44:30,,2,\"22,443\"
,192.168.1.20,00:11:22:33:44:20,,1,80
";
    assert_eq!(out, expected);
}

#[test]
fn lan_hostname_mode_with_port_list() {
    let out = csv_report("lan.xml", hostname("22, 443"));
    let rows = parse_csv(&out);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1][1], "192.168.1.1");
    assert_eq!(rows[1][4], "3");
    assert_eq!(rows[1][5], "443");
    assert_eq!(rows[2][1], "192.168.1.30");
    assert_eq!(rows[2][5], "22,443");
}

#[test]
fn closed_and_filtered_ports_never_show_up() {
    let out = csv_report("lan.xml", hostname(""));
    assert!(!out.contains("192.168.1.40"));

    let out = csv_report("lan.xml", Some(ReportMode::Port));
    assert!(out.contains("\n1,22/tcp,ssh\n"));
    assert!(out.contains("\n1,53/udp,domain\n"));
}

#[test]
fn repeated_runs_give_identical_output() {
    let cfg = config("lan.xml", Some(ReportMode::Vendor), OutputFormat::Table);
    let first = run(&cfg).unwrap();
    for _ in 0..5 {
        assert_eq!(run(&cfg).unwrap(), first);
    }
}

/*************************************************************
                  Empty scan and no mode
**************************************************************/

#[test]
fn empty_scan_emits_headers_only() {
    let cases = [
        (hostname(""), "Hostname,IPv4,MAC,Vendor,CountOpenPort,Ports\n"),
        (Some(ReportMode::Port), "Count,Port/Proto,ServiceName\n"),
        (Some(ReportMode::Vendor), "Count,VendorName\n"),
    ];
    for (mode, header) in cases {
        assert_eq!(csv_report("empty.xml", mode), header);
    }
}

#[test]
fn empty_scan_table_has_header_and_separator() {
    let out = table_report("empty.xml", Some(ReportMode::Vendor));
    assert_eq!(out, "Count  VendorName\n-----  ----------\n");
}

#[test]
fn no_mode_writes_nothing() {
    let out = table_report("lan.xml", None);
    assert!(out.is_empty());
}

#[test]
fn mode_flags_follow_precedence() {
    let mode = ReportMode::from_flags(false, true, true, "");
    let out = csv_report("lan.xml", mode);
    assert!(out.starts_with("Count,Port/Proto,ServiceName\n"));
}
