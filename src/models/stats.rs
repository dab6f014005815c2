//! Run statistics and per-test status
//!
//! Aggregated by the runner over one full run and reported once at the end.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Final status of one completed test.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    Passed,
    Failed,
    Aborted,
}

impl TestStatus {
    pub fn symbol(&self) -> &'static str {
        match self {
            TestStatus::Passed => "✓",
            TestStatus::Failed => "✗",
            TestStatus::Aborted => "!",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TestStatus::Passed)
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestStatus::Passed => write!(f, "PASS"),
            TestStatus::Failed => write!(f, "FAIL"),
            TestStatus::Aborted => write!(f, "ABORT"),
        }
    }
}

/// Aggregate counters for one run.
///
/// After a completed run: `passed + failed == complete == started == count`
/// and `aborted <= failed` (an aborted test is always a failed test).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStatistics {
    /// Tests found in the registry at the start of the run.
    pub count: usize,

    /// Tests whose body was entered.
    pub started: usize,

    /// Tests whose body finished on any path.
    pub complete: usize,

    /// Tests that completed without abort and with no failed assertion.
    pub passed: usize,

    /// Tests with at least one failed assertion or a converted foreign failure.
    pub failed: usize,

    /// Tests cut short by a failed REQUIRE or a foreign failure.
    pub aborted: usize,

    /// Wall-clock duration of the whole run.
    pub duration_ms: u64,
}

impl RunStatistics {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    /// Record one completed test.
    pub fn record(&mut self, status: TestStatus) {
        self.complete += 1;
        match status {
            TestStatus::Passed => self.passed += 1,
            TestStatus::Failed => self.failed += 1,
            TestStatus::Aborted => {
                self.failed += 1;
                self.aborted += 1;
            }
        }
    }

    pub fn pass_rate(&self) -> f64 {
        if self.complete == 0 {
            0.0
        } else {
            (self.passed as f64 / self.complete as f64) * 100.0
        }
    }

    pub fn is_all_passed(&self) -> bool {
        self.failed == 0
    }
}

impl fmt::Display for RunStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Total: {} | Started: {} | Complete: {} | Pass: {} | Fail: {} | Aborted: {}",
            self.count, self.started, self.complete, self.passed, self.failed, self.aborted
        )?;
        write!(
            f,
            "Pass Rate: {:.1}% | Duration: {}ms",
            self.pass_rate(),
            self.duration_ms
        )
    }
}
