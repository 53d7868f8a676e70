// serial-tester-rs/serial-tester/src/lib.rs

//! serial-tester
//!
//! Conformance harness for the hardware test server: replays a fixed catalog
//! of GPIO, MDIO and I2C command payloads over one TCP connection and checks
//! each reply against an expected payload.
#![warn(missing_docs)]

/// Command and expected-reply tables
pub mod catalog;
/// Target host and port
pub mod config;
/// Compiled-in parameters
pub mod constants;
/// Error type
pub mod error;
/// Common re-exports
pub mod prelude;
pub mod report;
/// Catalog replay loop
pub mod runner;
pub mod test_support;
pub mod transceiver;
/// Byte-stream transports
pub mod transport;
/// Verdicts and outcomes
pub mod types;
pub mod utils;

pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
