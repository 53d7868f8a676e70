//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize MockTransport setup and a scripted loopback peer
//! so tests across the crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener};
use std::thread::{self, JoinHandle};

use crate::transport::{MockTransport, Transport};

/// Build a MockTransport pre-seeded with the given raw replies and return it
/// boxed as a Transport trait object.
#[doc(hidden)]
pub fn boxed_mock_with_responses(responses: Vec<Vec<u8>>) -> Box<dyn Transport> {
    Box::new(mock_with_responses(responses))
}

/// MockTransport pre-seeded with the given raw replies.
#[doc(hidden)]
pub fn mock_with_responses(responses: Vec<Vec<u8>>) -> MockTransport {
    let mut mock = MockTransport::new();
    for resp in responses {
        mock.push_response(resp);
    }
    mock
}

/// Right-pad a reply with NUL bytes to `len`, the way the test server fills
/// its reply buffer.
#[doc(hidden)]
pub fn padded(reply: &[u8], len: usize) -> Vec<u8> {
    let mut out = reply.to_vec();
    if out.len() < len {
        out.resize(len, 0x00);
    }
    out
}

/// Start a loopback peer that accepts one connection and, for each scripted
/// reply, reads one command and answers with that reply. Returns the
/// listening address and a handle yielding the commands received.
///
/// Commands are assumed to arrive in one segment each, which holds for the
/// short payloads used in tests.
#[doc(hidden)]
pub fn spawn_scripted_peer(
    replies: Vec<Vec<u8>>,
) -> std::io::Result<(SocketAddr, JoinHandle<Vec<Vec<u8>>>)> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    let handle = thread::spawn(move || {
        let mut received = Vec::new();
        let Ok((mut stream, _)) = listener.accept() else {
            return received;
        };
        for reply in replies {
            let mut buf = [0u8; 256];
            let n = match stream.read(&mut buf) {
                Ok(0) | Err(_) => break,
                Ok(n) => n,
            };
            received.push(buf[..n].to_vec());
            if stream.write_all(&reply).is_err() {
                break;
            }
        }
        received
    });
    Ok((addr, handle))
}
