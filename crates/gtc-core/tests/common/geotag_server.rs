//! Minimal HTTP/1.1 stub of the geotag backend for integration tests.
//!
//! Serves the five POST routes the client consumes: tag echoes a JSON
//! confirmation, the coordinate lookup answers with the error or success
//! shape depending on the submitted address, and the download routes return
//! small binary payloads with `Content-Disposition` attachment headers.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;

/// Address value that makes the lookup route answer with the error shape.
pub const UNKNOWN_ADDRESS: &str = "nowhere";

/// Bytes served for a single-image download.
pub const IMAGE_BYTES: &[u8] = &[0xff, 0xd8, 0xff, 0xe0, 0x00, 0x10, 0x4a, 0x46];

/// Bytes served for the archive downloads.
pub const ARCHIVE_BYTES: &[u8] = b"PK\x03\x04stub-archive";

/// Starts the stub server in a background thread. Returns the base URL
/// (e.g. "http://127.0.0.1:12345"). Runs until the process exits.
pub fn start() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            thread::spawn(move || handle(stream));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: TcpStream) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));

    let request = match read_request(&mut stream) {
        Some(r) => r,
        None => return,
    };
    let (method, path, body) = request;
    if !method.eq_ignore_ascii_case("POST") {
        respond(&mut stream, "405 Method Not Allowed", &[], b"");
        return;
    }

    if path == "/geotag/location/coordinates" {
        let json = if body.contains(&format!("address={UNKNOWN_ADDRESS}")) {
            r#"{"error": "no match"}"#.to_string()
        } else {
            r#"{"latitude": 51.5, "longitude": -0.1, "address": "10 Downing St"}"#.to_string()
        };
        respond(
            &mut stream,
            "200 OK",
            &[("Content-Type", "application/json")],
            json.as_bytes(),
        );
        return;
    }

    if path == "/geotag/download/all" {
        respond(
            &mut stream,
            "200 OK",
            &[
                ("Content-Type", "application/zip"),
                (
                    "Content-Disposition",
                    "attachment; filename=all_uploads.zip",
                ),
            ],
            ARCHIVE_BYTES,
        );
        return;
    }

    if path == "/geotag/download/tagged" {
        respond(
            &mut stream,
            "200 OK",
            &[
                ("Content-Type", "application/zip"),
                (
                    "Content-Disposition",
                    "attachment; filename=tagged_uploads.zip",
                ),
            ],
            ARCHIVE_BYTES,
        );
        return;
    }

    // /geotag/{id}/download and /geotag/{id}
    if let Some(rest) = path.strip_prefix("/geotag/") {
        if let Some(id) = rest.strip_suffix("/download").and_then(|s| s.parse::<u64>().ok()) {
            let disposition = format!("attachment; filename=photo-{id}.jpg");
            respond(
                &mut stream,
                "200 OK",
                &[
                    ("Content-Type", "image/jpeg"),
                    ("Content-Disposition", disposition.as_str()),
                ],
                IMAGE_BYTES,
            );
            return;
        }
        if let Ok(id) = rest.parse::<u64>() {
            let json = format!(r#"{{"image_id": {id}, "geotagged": true, "form": "{body}"}}"#);
            respond(
                &mut stream,
                "200 OK",
                &[("Content-Type", "application/json")],
                json.as_bytes(),
            );
            return;
        }
    }

    respond(&mut stream, "404 Not Found", &[], b"");
}

/// Read request line, headers, and a Content-Length-delimited body.
/// Returns (method, path, body as lossy UTF-8).
fn read_request(stream: &mut TcpStream) -> Option<(String, String, String)> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    let header_end = loop {
        let n = stream.read(&mut chunk).ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = find_header_end(&buf) {
            break pos;
        }
        if buf.len() > 64 * 1024 {
            return None;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).into_owned();
    let mut lines = head.lines();
    let request_line = lines.next()?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next()?.to_string();
    let path = parts.next()?.to_string();

    let content_length = lines
        .filter_map(|l| l.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.trim().parse::<usize>().ok())
        .unwrap_or(0);

    let body_start = header_end + 4;
    while buf.len() < body_start + content_length {
        let n = stream.read(&mut chunk).ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    let body = String::from_utf8_lossy(&buf[body_start..buf.len().min(body_start + content_length)])
        .into_owned();

    Some((method, path, body))
}

fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

fn respond(stream: &mut TcpStream, status: &str, headers: &[(&str, &str)], body: &[u8]) {
    let mut response = format!("HTTP/1.1 {status}\r\nContent-Length: {}\r\n", body.len());
    for (name, value) in headers {
        response.push_str(&format!("{name}: {value}\r\n"));
    }
    response.push_str("Connection: close\r\n\r\n");
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body);
}
