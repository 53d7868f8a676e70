// serial-tester-rs/serial-tester/src/transceiver.rs

//! One command round trip.
//!
//! The reply is taken from a single read of at most
//! [`RESPONSE_BUFFER_LEN`] bytes. There is no framing: a reply that arrives
//! in several segments is cut at the first one and the remainder will be
//! read as the reply to the next command. The test server answers well
//! within one segment, so this holds in practice.

use crate::constants::RESPONSE_BUFFER_LEN;
use crate::transport::Transport;
use crate::utils::{bytes_to_hex, parse_hex, trim_padding};
use crate::Result;

/// Strip padding from a raw reply and render it as lowercase hex.
pub fn normalize_response(raw: &[u8]) -> String {
    bytes_to_hex(trim_padding(raw))
}

/// Send one hex-encoded command and return the normalized reply.
///
/// Decode errors are returned before anything is written.
pub fn send_test_cmd<T: Transport + ?Sized>(transport: &mut T, command: &str) -> Result<String> {
    let data = parse_hex(command)?;
    transport.send(&data)?;
    let raw = transport.receive(RESPONSE_BUFFER_LEN)?;
    Ok(normalize_response(&raw))
}
