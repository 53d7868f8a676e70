// serial-tester-rs/serial-tester/src/report.rs

//! Console report.
//!
//! ```text
//! RUN
//! Test 1: GPIO_READ_DIR [PASS]
//! Command: 000700050103001201
//! Response: 0600040103001201
//! Test 2: GPIO_READ_LVL [FAIL]
//! Command: 000700050103001202
//! Response: 0600040103001200
//! Expected: 0600040103001201
//! Passed: 1, Failed: 1, Total: 2
//! ```

use std::io::Write;

use crate::types::{RunSummary, TestOutcome, Verdict};
use crate::Result;

/// First line of every run
pub const BANNER: &str = "RUN";

/// Write the banner line.
pub fn write_banner<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", BANNER)?;
    out.flush()?;
    Ok(())
}

/// Write one test block. The expected payload is only shown on failure.
pub fn write_outcome<W: Write + ?Sized>(out: &mut W, outcome: &TestOutcome) -> Result<()> {
    writeln!(out, "Test {}: {} [{}]", outcome.index, outcome.name, outcome.verdict)?;
    writeln!(out, "Command: {}", outcome.command)?;
    writeln!(out, "Response: {}", outcome.response)?;
    if outcome.verdict == Verdict::Fail {
        writeln!(out, "Expected: {}", outcome.expected)?;
    }
    // earlier blocks must stay visible if a later command aborts the run
    out.flush()?;
    Ok(())
}

/// Write the pass/fail tally line.
pub fn write_summary<W: Write + ?Sized>(out: &mut W, summary: &RunSummary) -> Result<()> {
    writeln!(out, "{}", summary)?;
    out.flush()?;
    Ok(())
}
