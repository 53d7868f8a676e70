// serial-tester-rs/serial-tester/src/transport/tcp.rs

use std::io::{Read, Write};
use std::net::{TcpStream, ToSocketAddrs};

use log::{debug, info};

use crate::transport::traits::Transport;
use crate::utils::bytes_to_hex;
use crate::{Error, Result};

/// Blocking TCP connection to the test server.
///
/// No read or write timeouts are set; an unresponsive server stalls the run.
/// The stream is closed when the transport is dropped.
#[derive(Debug)]
pub struct TcpTransport {
    stream: TcpStream,
    peer: String,
}

impl TcpTransport {
    /// Connect to `addr`. Any failure, including name resolution, is
    /// reported as [`Error::Connection`].
    pub fn connect<A: ToSocketAddrs + ToString>(addr: A) -> Result<Self> {
        let peer = addr.to_string();
        let stream = TcpStream::connect(&addr).map_err(|source| Error::Connection {
            addr: peer.clone(),
            source,
        })?;
        info!("connected to {}", peer);
        Ok(Self { stream, peer })
    }
}

impl Transport for TcpTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        debug!("-> {} ({} bytes)", bytes_to_hex(data), data.len());
        self.stream.write_all(data)?;
        Ok(())
    }

    fn receive(&mut self, max_len: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; max_len];
        let n = self.stream.read(&mut buf)?;
        if n == 0 && max_len > 0 {
            return Err(Error::ConnectionClosed);
        }
        buf.truncate(n);
        debug!("<- {} ({} bytes)", bytes_to_hex(&buf), n);
        Ok(buf)
    }

    fn peer(&self) -> String {
        self.peer.clone()
    }
}
