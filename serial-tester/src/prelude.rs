// serial-tester-rs/serial-tester/src/prelude.rs

pub use crate::catalog::Catalog;
pub use crate::config::TargetConfig;
pub use crate::runner::{Runner, run, run_default};
pub use crate::transceiver::{normalize_response, send_test_cmd};
pub use crate::transport::{MockTransport, TcpTransport, Transport};
pub use crate::{Error, Result, RunSummary, TestOutcome, Verdict};

pub use crate::utils::{bytes_to_hex, parse_hex, trim_padding};
