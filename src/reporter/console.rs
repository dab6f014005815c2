//! Default console reporter
//!
//! Renders lifecycle events to stdout (the primary stream), mirrors failure
//! lines to stderr, and writes the final tally and verdict to stderr.

use crate::models::{AssertionInfo, RunStatistics, TestInfo, TestStatus};
use crate::reporter::Reporter;

/// Two-channel textual reporter with its own pass/fail counters.
pub struct ConsoleReporter {
    verbose: bool,
    colorize: bool,
    passed: usize,
    failed: usize,
    current_failures: usize,
    current_aborted: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self {
            verbose: false,
            colorize: true,
            passed: 0,
            failed: 0,
            current_failures: 0,
            current_aborted: false,
        }
    }

    /// Also print a line for every evaluated assertion, not just failures.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Disable ANSI color codes.
    pub fn no_color(mut self) -> Self {
        self.colorize = false;
        self
    }

    /// Tests counted as passed so far.
    pub fn passed(&self) -> usize {
        self.passed
    }

    /// Tests counted as failed so far.
    pub fn failed(&self) -> usize {
        self.failed
    }

    fn status_label(&self, status: TestStatus) -> String {
        if self.colorize {
            match status {
                TestStatus::Passed => format!("\x1b[32m{} {}\x1b[0m", status.symbol(), status),
                TestStatus::Failed | TestStatus::Aborted => {
                    format!("\x1b[31m{} {}\x1b[0m", status.symbol(), status)
                }
            }
        } else {
            format!("{} {}", status.symbol(), status)
        }
    }

    fn current_status(&self) -> TestStatus {
        if self.current_aborted {
            TestStatus::Aborted
        } else if self.current_failures > 0 {
            TestStatus::Failed
        } else {
            TestStatus::Passed
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for ConsoleReporter {
    fn test_count(&mut self, total: usize) {
        println!("running {} test(s)", total);
    }

    fn test_started(&mut self, info: &TestInfo) {
        self.current_failures = 0;
        self.current_aborted = false;
        println!("→ {}", info);
    }

    fn test_complete(&mut self, info: &TestInfo) {
        let status = self.current_status();
        if status.is_success() {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
        println!("{} {}", self.status_label(status), info.name);
    }

    fn assertion_started(&mut self, _test: &TestInfo, assertion: &AssertionInfo) {
        if self.verbose {
            println!(
                "  ? {} {} ({}:{})",
                assertion.kind(),
                assertion.expression,
                assertion.file,
                assertion.line
            );
        }
    }

    fn assertion_error(&mut self, test: &TestInfo, error: &AssertionInfo) {
        self.current_failures += 1;
        if error.required {
            self.current_aborted = true;
        }

        let line = format!("{}: in {}", error, test.name);
        println!("  {}", line);
        eprintln!("{}", line);
    }

    fn test_summary(&mut self, stats: &RunStatistics) {
        let verdict = if stats.is_all_passed() {
            if self.colorize {
                "\x1b[32mPASSED\x1b[0m"
            } else {
                "PASSED"
            }
        } else if self.colorize {
            "\x1b[31mFAILED\x1b[0m"
        } else {
            "FAILED"
        };

        eprintln!("{}", stats);
        eprintln!("Verdict: {}", verdict);
    }
}
