// serial-tester-rs/serial-tester/src/transport/traits.rs

use crate::Result;

/// Transport trait abstracts the byte stream away from the runner.
pub trait Transport {
    /// Write the whole payload in one blocking call
    fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Perform a single blocking read of at most `max_len` bytes. No
    /// accumulation across reads: whatever the peer delivered by then is the
    /// reply.
    fn receive(&mut self, max_len: usize) -> Result<Vec<u8>>;

    /// Human readable peer description for logs
    fn peer(&self) -> String;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        (**self).send(data)
    }

    fn receive(&mut self, max_len: usize) -> Result<Vec<u8>> {
        (**self).receive(max_len)
    }

    fn peer(&self) -> String {
        (**self).peer()
    }
}
