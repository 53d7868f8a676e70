// serial-tester-rs/serial-tester/src/error.rs

use std::io;

use thiserror::Error;

/// Errors that abort a harness run
#[derive(Error, Debug)]
pub enum Error {
    /// The TCP connection to the test server could not be established
    #[error("failed to connect to {addr}: {source}")]
    Connection {
        /// Address that was dialed
        addr: String,
        /// Underlying socket error
        #[source]
        source: io::Error,
    },

    /// A write or read failed mid-run
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// A command payload is not valid hex
    #[error("invalid command hex: {0}")]
    Decode(#[from] hex::FromHexError),

    /// The port template did not yield a TCP port
    #[error("invalid port: {0}")]
    InvalidPort(String),

    /// The server closed the stream before replying
    #[error("connection closed by peer")]
    ConnectionClosed,
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;
