// serial-tester-rs/serial-tester/src/constants.rs
//! Compiled-in target parameters

/// Address of the hardware test server
pub const DEFAULT_HOST: &str = "172.16.252.9";

/// Serial port on the test server the connector is plugged into
pub const DEFAULT_PORT_SERIAL: u8 = 12;

/// Port template for the test server; `XX` is replaced by the serial port id
pub const DEFAULT_PORT_BASE: &str = "101XX";

/// Placeholder inside the port template
pub const PORT_SERIAL_PLACEHOLDER: &str = "XX";

/// Size of the single read performed per command
pub const RESPONSE_BUFFER_LEN: usize = 256;

/// Padding byte stripped from both ends of a reply
pub const PADDING_BYTE: u8 = 0x00;
