#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rust_xlsxwriter::{Format, Workbook};
use std::env;
use std::fs;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::thread::{self, JoinHandle};

pub fn tsv() -> Command {
    cargo_bin_cmd!("tsverify")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tsverify.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tsverify.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the store in test mode (no config file written)
pub fn init_db(db_path: &str) {
    tsv()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Workbook in the import layout with two valid rows and one without position.
pub fn write_fixture_workbook(path: &str) {
    let mut workbook = Workbook::new();
    let ws = workbook.add_worksheet();
    let date_format = Format::new().set_num_format("mm/dd/yyyy");

    ws.write_string(0, 0, "Timesheet").unwrap();
    for (col, h) in ["Date", "Hours", "Location", "Position"].iter().enumerate() {
        ws.write_string(1, col as u16, *h).unwrap();
    }
    ws.write_string(2, 0, "Positions: PSS, ISFT Lead").unwrap();

    ws.write_number_with_format(3, 0, 45356.0, &date_format).unwrap();
    ws.write_number(3, 1, 4.5).unwrap();
    ws.write_string(3, 2, "Main Campus").unwrap();
    ws.write_string(3, 3, "PSS").unwrap();

    ws.write_string(4, 0, "03/07/2024").unwrap();
    ws.write_number(4, 1, 2.0).unwrap();
    ws.write_string(4, 2, "North").unwrap();
    ws.write_string(4, 3, "ISFT Lead").unwrap();

    ws.write_number(5, 0, 45358.0).unwrap();
    ws.write_number(5, 1, 8.0).unwrap();
    ws.write_string(5, 2, "East").unwrap();

    workbook.save(path).unwrap();
}

/// A one-shot HTTP endpoint answering a single request with a canned response.
pub struct StubServer {
    pub url: String,
    handle: JoinHandle<String>,
}

impl StubServer {
    pub fn start(status_line: &str, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let request_body = read_request_body(&mut stream);
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
            request_body
        });

        Self {
            url: format!("http://{addr}/verify"),
            handle,
        }
    }

    /// Body of the request the server received.
    pub fn received(self) -> String {
        self.handle.join().unwrap()
    }
}

fn read_request_body(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = stream.read(&mut chunk).unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let headers = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let len = headers
                .lines()
                .find_map(|l| l.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            let start = end + 4;
            if buf.len() >= start + len {
                return String::from_utf8_lossy(&buf[start..start + len]).to_string();
            }
        }
    }

    String::new()
}

/// URL of a local port nobody listens on.
pub fn dead_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/verify")
}
