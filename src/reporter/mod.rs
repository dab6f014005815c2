//! Reporting sink
//!
//! The `Reporter` trait is the sole way results leave the harness. The
//! runner drives it with lifecycle events; the assertion dispatcher drives
//! it with per-check events.

mod console;

pub use console::ConsoleReporter;

use crate::models::{AssertionInfo, RunStatistics, TestInfo};

/// Sink for lifecycle and assertion events.
///
/// Call sequence for one run: `test_count` once, then per test
/// `test_started` / zero-or-more assertion events / `test_complete`, and
/// finally `test_summary` once.
pub trait Reporter {
    /// Total number of tests about to run. Called once, before any test.
    fn test_count(&mut self, total: usize);

    /// Called immediately before a test's body executes.
    fn test_started(&mut self, info: &TestInfo);

    /// Called immediately after a test's body finishes, on any exit path.
    fn test_complete(&mut self, info: &TestInfo);

    /// Called once per evaluated assertion, passing or not. Defaults to a
    /// no-op so minimal reporters only observe failures.
    fn assertion_started(&mut self, _test: &TestInfo, _assertion: &AssertionInfo) {}

    /// Called once per failed assertion, required or not.
    fn assertion_error(&mut self, test: &TestInfo, error: &AssertionInfo);

    /// Called once after all tests complete.
    fn test_summary(&mut self, stats: &RunStatistics);
}
