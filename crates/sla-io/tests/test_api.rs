//! `NagerApiSource` against a local HTTP responder.

use sla_core::Error;
use sla_io::{CsvFileSource, FallbackSource, HolidaySource, NagerApiSource};
use sla_time::{CountryCode, Date, HolidaySet};
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;
use tempfile::TempDir;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn codes(list: &[&str]) -> Vec<CountryCode> {
    list.iter().map(|c| CountryCode::new(c).unwrap()).collect()
}

/// Answer `pages.len()` requests in order with `(status line, body)`.
/// Returns the base URL and a channel carrying each request path.
fn serve(pages: Vec<(&'static str, String)>) -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}/api/v3/PublicHolidays", listener.local_addr().unwrap());
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for (status, body) in pages {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            let mut header = String::new();
            while reader.read_line(&mut header).unwrap() > 2 {
                header.clear();
            }
            let path = request_line.split_whitespace().nth(1).unwrap_or("").to_string();
            let _ = tx.send(path);
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
        }
    });
    (base, rx)
}

fn page(code: &str, dates: &[&str]) -> String {
    let items: Vec<String> = dates
        .iter()
        .map(|d| {
            format!(
                r#"{{"date":"{d}","localName":"Feiertag","name":"Holiday","countryCode":"{code}","types":["Public"]}}"#
            )
        })
        .collect();
    format!("[{}]", items.join(","))
}

#[test]
fn fetches_every_country_and_year() {
    let (base, paths) = serve(vec![
        ("200 OK", page("AT", &["2020-01-01", "2020-01-06"])),
        ("200 OK", page("AT", &["2021-01-01"])),
        ("200 OK", page("DE", &["2020-10-03"])),
        ("200 OK", page("DE", &["2021-10-03"])),
    ]);
    let api = NagerApiSource::new(&base, codes(&["AT", "DE"]), vec![2020, 2021]).unwrap();
    let records = api.fetch().unwrap();
    assert_eq!(records.len(), 5);
    assert_eq!(records[0].local_name.as_deref(), Some("Feiertag"));

    let requested: Vec<String> = paths.try_iter().collect();
    assert_eq!(
        requested,
        vec![
            "/api/v3/PublicHolidays/2020/AT",
            "/api/v3/PublicHolidays/2021/AT",
            "/api/v3/PublicHolidays/2020/DE",
            "/api/v3/PublicHolidays/2021/DE",
        ]
    );

    let set = HolidaySet::build(&records);
    assert!(set.contains(&CountryCode::new("DE").unwrap(), date(2021, 10, 3)));
    assert_eq!(set.len(), 5);
}

#[test]
fn non_ok_status_fails_whole_fetch() {
    let (base, _paths) = serve(vec![
        ("200 OK", page("SK", &["2020-01-01"])),
        ("404 Not Found", String::new()),
    ]);
    let api = NagerApiSource::new(&base, codes(&["SK"]), vec![2020, 2021]).unwrap();
    match api.fetch().unwrap_err() {
        Error::HolidaySource(msg) => {
            assert!(msg.contains("2021/SK"));
            assert!(msg.contains("404"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn slow_server_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    thread::spawn(move || {
        if let Ok((stream, _)) = listener.accept() {
            thread::sleep(Duration::from_secs(3));
            drop(stream);
        }
    });
    let api = NagerApiSource::with_timeout(
        &base,
        codes(&["CZ"]),
        vec![2022],
        Duration::from_millis(200),
    )
    .unwrap();
    match api.fetch().unwrap_err() {
        Error::HolidaySource(msg) => assert!(msg.contains("timed out")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn unreachable_api_falls_back_to_file() {
    let (base, _paths) = serve(vec![("500 Internal Server Error", String::new())]);
    let dir = TempDir::new().unwrap();
    let csv = dir.path().join("holidays.csv");
    std::fs::write(&csv, "date,countryCode,types\n2020-01-01,AT,['Public']\n").unwrap();

    let api = NagerApiSource::new(&base, codes(&["AT"]), vec![2020]).unwrap();
    let source = FallbackSource::new(Box::new(api), Box::new(CsvFileSource::new(&csv)));
    let records = source.fetch().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].date, date(2020, 1, 1));
}
