//! Minimal HTTP/1.1 server that serves a template tarball for integration tests.
//!
//! Routes:
//! - `/kit.tar.gz`: 200 with the archive body
//! - `/redirect`: 302 to `/hop`, which 301s to the absolute archive URL
//! - `/loop`: 302 back to itself
//! - anything else: 404

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Starts a server in a background thread. Returns the base URL without a
/// trailing slash (e.g. "http://127.0.0.1:12345"). Runs until the process exits.
pub fn start(archive: Vec<u8>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let base = format!("http://127.0.0.1:{}", listener.local_addr().unwrap().port());
    let archive = Arc::new(archive);
    let base_for_thread = base.clone();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let archive = Arc::clone(&archive);
            let base = base_for_thread.clone();
            thread::spawn(move || handle(stream, &archive, &base));
        }
    });
    base
}

fn read_request_path(stream: &mut TcpStream) -> Option<String> {
    let mut request = Vec::new();
    let mut buf = [0u8; 4096];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => break,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }
    let request = String::from_utf8_lossy(&request);
    let first = request.lines().next()?;
    first.split_whitespace().nth(1).map(str::to_string)
}

fn handle(mut stream: TcpStream, archive: &[u8], base: &str) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let Some(path) = read_request_path(&mut stream) else {
        return;
    };
    match path.as_str() {
        "/kit.tar.gz" => {
            let head = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/gzip\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                archive.len()
            );
            let _ = stream.write_all(head.as_bytes());
            let _ = stream.write_all(archive);
        }
        "/redirect" => redirect(&mut stream, "302 Found", "/hop"),
        "/hop" => redirect(
            &mut stream,
            "301 Moved Permanently",
            &format!("{base}/kit.tar.gz"),
        ),
        "/loop" => redirect(&mut stream, "302 Found", "/loop"),
        _ => {
            let _ = stream.write_all(
                b"HTTP/1.1 404 Not Found\r\nContent-Length: 9\r\nConnection: close\r\n\r\nnot found",
            );
        }
    }
    let _ = stream.flush();
}

fn redirect(stream: &mut TcpStream, status: &str, location: &str) {
    let response = format!(
        "HTTP/1.1 {status}\r\nLocation: {location}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
    );
    let _ = stream.write_all(response.as_bytes());
}
