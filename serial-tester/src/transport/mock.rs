// serial-tester-rs/serial-tester/src/transport/mock.rs

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Mock transport for unit tests. It records sent payloads and returns queued responses.
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Every payload passed to `send`, in order
    pub sent: Vec<Vec<u8>>,
    /// Replies handed out by `receive`, front first
    pub responses: Vec<Vec<u8>>,
    /// Testing hook: number of subsequent sends that fail with a broken pipe
    pub send_failures: usize,
    /// Requested `max_len` of every receive call
    pub receive_limits: Vec<usize>,
}

impl MockTransport {
    /// Empty mock with nothing scripted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many subsequent send calls should fail (for tests).
    pub fn set_send_failures(&mut self, n: usize) {
        self.send_failures = n;
    }

    /// Queue a reply for a later `receive`.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push(resp);
    }

    /// Remove and return the most recent sent payload.
    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }
}

impl Transport for MockTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        if self.send_failures > 0 {
            self.send_failures -= 1;
            return Err(Error::Io(std::io::Error::from(
                std::io::ErrorKind::BrokenPipe,
            )));
        }
        self.sent.push(data.to_vec());
        Ok(())
    }

    fn receive(&mut self, max_len: usize) -> Result<Vec<u8>> {
        self.receive_limits.push(max_len);
        if self.responses.is_empty() {
            // nothing scripted behaves like a peer that hung up
            return Err(Error::ConnectionClosed);
        }
        let mut resp = self.responses.remove(0);
        // a single read never returns more than the buffer holds
        resp.truncate(max_len);
        Ok(resp)
    }

    fn peer(&self) -> String {
        "mock".to_string()
    }
}
