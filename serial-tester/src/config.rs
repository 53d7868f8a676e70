// serial-tester-rs/serial-tester/src/config.rs

use crate::constants::{DEFAULT_HOST, DEFAULT_PORT_BASE, DEFAULT_PORT_SERIAL, PORT_SERIAL_PLACEHOLDER};
use crate::{Error, Result};

/// Where the harness connects.
///
/// The port is not stored directly: the test server exposes one TCP port per
/// serial connector, named by substituting the two-digit connector id into
/// the port template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetConfig {
    host: String,
    port_serial: u8,
    port_base: String,
}

impl TargetConfig {
    /// Target built from the compiled-in constants.
    pub fn new() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port_serial: DEFAULT_PORT_SERIAL,
            port_base: DEFAULT_PORT_BASE.to_string(),
        }
    }

    /// Replace the server address.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Select the serial connector on the test server.
    pub fn with_port_serial(mut self, port_serial: u8) -> Self {
        self.port_serial = port_serial;
        self
    }

    /// Replace the port template. It must contain the `XX` placeholder.
    pub fn with_port_base(mut self, port_base: impl Into<String>) -> Self {
        self.port_base = port_base.into();
        self
    }

    /// Server address.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Serial connector id substituted into the port template.
    pub fn port_serial(&self) -> u8 {
        self.port_serial
    }

    /// Substitute the serial id into the first placeholder of the template.
    pub fn port(&self) -> Result<u16> {
        if !self.port_base.contains(PORT_SERIAL_PLACEHOLDER) {
            return Err(Error::InvalidPort(format!(
                "template '{}' has no {} placeholder",
                self.port_base, PORT_SERIAL_PLACEHOLDER
            )));
        }
        let port = self.port_base.replacen(
            PORT_SERIAL_PLACEHOLDER,
            &format!("{:02}", self.port_serial),
            1,
        );
        port.parse::<u16>()
            .map_err(|e| Error::InvalidPort(format!("'{}': {}", port, e)))
    }

    /// `host:port` string suitable for `TcpStream::connect`.
    pub fn address(&self) -> Result<String> {
        Ok(format!("{}:{}", self.host, self.port()?))
    }
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self::new()
    }
}
