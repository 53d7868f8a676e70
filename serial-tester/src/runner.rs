// serial-tester-rs/serial-tester/src/runner.rs

use std::io::Write;

use log::{info, warn};

use crate::catalog::Catalog;
use crate::config::TargetConfig;
use crate::report;
use crate::transceiver::send_test_cmd;
use crate::transport::{TcpTransport, Transport};
use crate::types::{RunSummary, TestOutcome};
use crate::Result;

/// Replays a command catalog over a transport and judges each reply.
pub struct Runner<'a> {
    commands: &'a Catalog,
    expected: &'a Catalog,
}

impl<'a> Runner<'a> {
    /// Pair a command catalog with the replies expected for it.
    pub fn new(commands: &'a Catalog, expected: &'a Catalog) -> Self {
        Self { commands, expected }
    }

    /// Command names with no expected reply. Each is judged against the
    /// empty payload.
    pub fn missing_expectations(&self) -> Vec<&'a str> {
        self.commands.missing_from(self.expected)
    }

    /// Run every command in sorted-name order, strictly one at a time.
    ///
    /// The first transport or decode error aborts the run. Blocks for the
    /// commands completed before it have already been written to `out`.
    pub fn run<T, W>(&self, transport: &mut T, out: &mut W) -> Result<RunSummary>
    where
        T: Transport + ?Sized,
        W: Write + ?Sized,
    {
        if self.commands.is_empty() {
            warn!("command catalog is empty");
        }
        for name in self.missing_expectations() {
            warn!("no expected reply recorded for {}; comparing against empty", name);
        }
        info!("running {} commands against {}", self.commands.len(), transport.peer());

        let mut summary = RunSummary::default();
        for (i, (name, command)) in self.commands.sorted_entries().into_iter().enumerate() {
            let response = send_test_cmd(transport, command)?;
            let expected = self.expected.get(name).unwrap_or_default();
            let outcome = TestOutcome::new(i + 1, name, command, response, expected);
            summary.record(outcome.verdict);
            report::write_outcome(out, &outcome)?;
        }

        info!("run finished: {}", summary);
        report::write_summary(out, &summary)?;
        Ok(summary)
    }
}

/// Connect to the configured target and run the catalogs against it.
///
/// The connection is dropped when this returns, on success or error.
pub fn run<W: Write + ?Sized>(
    config: &TargetConfig,
    commands: &Catalog,
    expected: &Catalog,
    out: &mut W,
) -> Result<RunSummary> {
    report::write_banner(out)?;
    let addr = config.address()?;
    info!("connecting to {}", addr);
    let mut transport = TcpTransport::connect(addr)?;
    Runner::new(commands, expected).run(&mut transport, out)
}

/// Process exit status for a run result: 0 once every command completed,
/// whatever the verdicts, 1 on a fatal error.
pub fn exit_status(result: &Result<RunSummary>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

/// Run the built-in catalogs against the built-in target.
pub fn run_default<W: Write + ?Sized>(out: &mut W) -> Result<RunSummary> {
    let commands = Catalog::builtin_commands();
    let expected = Catalog::builtin_expected();
    run(&TargetConfig::default(), &commands, &expected, out)
}
