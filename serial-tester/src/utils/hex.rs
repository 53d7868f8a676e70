//! Hex and padding helpers for wire payloads.
//!
//! Catalog payloads are stored as hex digit-pair strings and converted at the
//! transport boundary. Encoding always produces lowercase digits; decoding
//! accepts either case.

use crate::constants::PADDING_BYTE;
use crate::Result;

/// Convert a byte slice to a lowercase hex string without separators.
///
/// Example: `&[0x00, 0xff]` -> `"00ff"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    ::hex::encode(bytes)
}

/// Parse a hex digit-pair string into bytes.
///
/// Fails on odd length or any non-hex character.
pub fn parse_hex(s: &str) -> Result<Vec<u8>> {
    Ok(::hex::decode(s)?)
}

/// Strip leading and trailing padding bytes.
pub fn trim_padding(bytes: &[u8]) -> &[u8] {
    let Some(start) = bytes.iter().position(|&b| b != PADDING_BYTE) else {
        return &[];
    };
    let end = bytes
        .iter()
        .rposition(|&b| b != PADDING_BYTE)
        .map_or(start, |i| i + 1);
    &bytes[start..end]
}
