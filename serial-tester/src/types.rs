// serial-tester-rs/serial-tester/src/types.rs

use std::fmt;

use derive_more::Display;

/// Outcome of comparing one reply against its recorded expectation.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Reply matched
    #[display(fmt = "PASS")]
    Pass,
    /// Reply differed
    #[display(fmt = "FAIL")]
    Fail,
}

impl Verdict {
    /// Judge a received payload against the expected one.
    ///
    /// Both sides are hex digit-pair strings. Hex digits compare without
    /// regard to case, so the verdict reflects byte-for-byte equality of the
    /// decoded payloads.
    pub fn judge(received: &str, expected: &str) -> Self {
        if received.eq_ignore_ascii_case(expected) {
            Self::Pass
        } else {
            Self::Fail
        }
    }

    /// True for [`Verdict::Pass`].
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }
}

/// Result of running a single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestOutcome {
    /// 1-based position in the sorted run order
    pub index: usize,
    /// Test name from the catalog
    pub name: String,
    /// Command as authored in the catalog
    pub command: String,
    /// Trimmed reply, lowercase hex
    pub response: String,
    /// Recorded reply; empty when the catalog has no entry
    pub expected: String,
    /// Judgement of `response` against `expected`
    pub verdict: Verdict,
}

impl TestOutcome {
    /// Build an outcome, deriving the verdict from the two payloads.
    pub fn new(
        index: usize,
        name: impl Into<String>,
        command: impl Into<String>,
        response: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        let response = response.into();
        let expected = expected.into();
        let verdict = Verdict::judge(&response, &expected);
        Self {
            index,
            name: name.into(),
            command: command.into(),
            response,
            expected,
            verdict,
        }
    }
}

/// Tally of verdicts for a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Tests that matched
    pub passed: usize,
    /// Tests that did not
    pub failed: usize,
}

impl RunSummary {
    /// Count one verdict.
    pub fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Pass => self.passed += 1,
            Verdict::Fail => self.failed += 1,
        }
    }

    /// Tests run.
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Passed: {}, Failed: {}, Total: {}",
            self.passed,
            self.failed,
            self.total()
        )
    }
}
