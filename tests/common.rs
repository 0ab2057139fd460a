//! Common test utilities for the arcade test suite.
//!
//! Board fixtures, move replay helpers and a one-shot HTTP stub standing in
//! for the AI services.

#![allow(dead_code)]

use std::{
    io::{BufRead, BufReader, Read, Write},
    net::TcpListener,
    thread::{self, JoinHandle},
};

use arcade::{Engine, Outcome, Result};

/// Apply `moves` in order, returning the outcome of the last one.
pub fn play<E: Engine>(engine: &mut E, moves: &[E::Input]) -> Result<Outcome<E::Mark>> {
    let mut outcome = Outcome::Continue(engine.current_player());
    for &input in moves {
        outcome = engine.apply_move(input)?;
    }
    Ok(outcome)
}

/// A single HTTP exchange captured by [`StubServer`]
#[derive(Debug, Clone)]
pub struct Captured {
    pub request_line: String,
    pub body: serde_json::Value,
}

/// Serves exactly one HTTP request with a canned response.
pub struct StubServer {
    pub url: String,
    handle: JoinHandle<Captured>,
}

impl StubServer {
    /// Answer the next request with `status` and `body` as JSON
    pub fn respond(path: &str, status: u16, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
        let port = listener.local_addr().expect("stub address").port();
        let body = body.to_string();

        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().expect("accept connection");
            let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

            let mut request_line = String::new();
            reader.read_line(&mut request_line).expect("read request line");

            let mut content_length = 0;
            loop {
                let mut header = String::new();
                reader.read_line(&mut header).expect("read header");
                let header = header.trim_end();
                if header.is_empty() {
                    break;
                }
                if let Some((name, value)) = header.split_once(':') {
                    if name.eq_ignore_ascii_case("content-length") {
                        content_length = value.trim().parse().expect("content length");
                    }
                }
            }

            let mut raw = vec![0; content_length];
            reader.read_exact(&mut raw).expect("read body");

            let reason = if status == 200 { "OK" } else { "Error" };
            let response = format!(
                "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let mut stream = stream;
            stream.write_all(response.as_bytes()).expect("write response");
            stream.flush().expect("flush response");

            Captured {
                request_line: request_line.trim_end().to_string(),
                body: serde_json::from_slice(&raw).unwrap_or(serde_json::Value::Null),
            }
        });

        StubServer {
            url: format!("http://127.0.0.1:{port}{path}"),
            handle,
        }
    }

    /// Wait for the exchange and return what the client sent
    pub fn captured(self) -> Captured {
        self.handle.join().expect("stub server thread")
    }
}
