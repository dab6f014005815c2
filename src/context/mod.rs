//! Per-test run context and assertion dispatch
//!
//! A `TestContext` binds the currently executing test to the active
//! reporter. It is created by the runner immediately before a test body
//! runs and lives exactly as long as that body, so assertions can never
//! observe a stale context. The `expect!` and `require!` macros are the
//! assertion surface; both route through [`TestContext::check`].

use std::ops::ControlFlow;

use crate::models::{AssertionInfo, BodyFailure, TestInfo, TestStatus};
use crate::reporter::Reporter;

/// Single-test execution context: current test identity, active reporter,
/// and the pass/fail flags assertions accumulate.
pub struct TestContext<'r> {
    test: &'r TestInfo,
    reporter: &'r mut dyn Reporter,
    failed_checks: usize,
    aborted: bool,
}

impl<'r> TestContext<'r> {
    pub fn new(test: &'r TestInfo, reporter: &'r mut dyn Reporter) -> Self {
        Self {
            test,
            reporter,
            failed_checks: 0,
            aborted: false,
        }
    }

    /// Identity of the test this context belongs to.
    pub fn test(&self) -> &TestInfo {
        self.test
    }

    /// Number of failed checks recorded so far.
    pub fn failed_checks(&self) -> usize {
        self.failed_checks
    }

    /// Whether a failed REQUIRE (or a converted foreign failure) cut the
    /// test short.
    pub fn aborted(&self) -> bool {
        self.aborted
    }

    /// Final status under the chosen rule: a test passes iff it was not
    /// aborted and recorded zero failed checks. Zero assertions is a pass.
    pub fn status(&self) -> TestStatus {
        if self.aborted {
            TestStatus::Aborted
        } else if self.failed_checks > 0 {
            TestStatus::Failed
        } else {
            TestStatus::Passed
        }
    }

    /// Evaluate one assertion outcome.
    ///
    /// Dispatches exactly one `assertion_started` event per evaluation and
    /// one `assertion_error` per failure. Returns `Break` only for a failed
    /// required check; `require!` turns that into an early return out of
    /// the test body.
    pub fn check(
        &mut self,
        passed: bool,
        required: bool,
        expression: &str,
        file: &str,
        line: u32,
    ) -> ControlFlow<()> {
        let assertion = AssertionInfo::new(required, expression, file, line);
        self.reporter.assertion_started(self.test, &assertion);

        if passed {
            return ControlFlow::Continue(());
        }

        self.failed_checks += 1;
        self.reporter.assertion_error(self.test, &assertion);

        if required {
            self.aborted = true;
            tracing::debug!("aborting {} after failed REQUIRE", self.test.name);
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    /// Record a foreign failure that escaped the test body.
    ///
    /// The synthesized assertion is required-class and attributed to the
    /// test's declared location, since the actual origin is unknown here.
    pub fn record_unexpected(&mut self, failure: &BodyFailure) {
        let assertion = AssertionInfo::new(
            true,
            failure.to_string(),
            self.test.file.clone(),
            self.test.line,
        );
        self.failed_checks += 1;
        self.aborted = true;
        self.reporter.assertion_error(self.test, &assertion);
    }
}

/// Non-required check: a failure is recorded and reported, and the test
/// body keeps executing.
#[macro_export]
macro_rules! expect {
    ($ctx:expr, $cond:expr $(,)?) => {{
        let _ = $ctx.check($cond, false, stringify!($cond), file!(), line!());
    }};
}

/// Required check: a failure is recorded and reported, and the remainder of
/// the current test body is abandoned via early return.
#[macro_export]
macro_rules! require {
    ($ctx:expr, $cond:expr $(,)?) => {{
        if $ctx.check($cond, true, stringify!($cond), file!(), line!()).is_break() {
            return;
        }
    }};
}
