//! Test runner
//!
//! Drives every registered case in order inside a protected region,
//! reconciles aborts and foreign panics into reporter events, and emits
//! final statistics.

use std::panic::{self, AssertUnwindSafe};

use tracing::{info, warn};

use crate::context::TestContext;
use crate::models::{BodyFailure, RunStatistics};
use crate::registry::Registry;
use crate::reporter::Reporter;
use crate::utils::Timer;

/// Sequential test runner.
///
/// Per test: Registered → Started → Running → Completed-{Passed, Failed,
/// Aborted}. No failure of any kind propagates past the per-test boundary;
/// the run always continues to the next case.
#[derive(Debug, Default)]
pub struct Runner {
    quiet_panics: bool,
}

impl Runner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress the default panic hook for the duration of the run, so
    /// converted panics do not write backtraces over the reporter output.
    /// The previous hook is restored afterwards. Off by default; the hook
    /// is process-global state.
    pub fn with_quiet_panics(mut self, quiet: bool) -> Self {
        self.quiet_panics = quiet;
        self
    }

    /// Run every case registered in the process-wide registry.
    pub fn run_global(&self, reporter: &mut dyn Reporter) -> RunStatistics {
        self.run(Registry::global(), reporter)
    }

    /// Run every case in `registry`, in registration order.
    ///
    /// Returns the aggregate statistics; `failed` counts failed *tests*,
    /// not failed assertions. The caller decides what to do with a
    /// non-zero failure count.
    pub fn run(&self, registry: &Registry, reporter: &mut dyn Reporter) -> RunStatistics {
        let cases = registry.tests();
        let mut stats = RunStatistics::new(cases.len());

        info!("starting run with {} test(s)", cases.len());
        reporter.test_count(cases.len());

        let run_timer = Timer::start("test run");
        let saved_hook = if self.quiet_panics {
            let hook = panic::take_hook();
            panic::set_hook(Box::new(|_| {}));
            Some(hook)
        } else {
            None
        };

        for case in &cases {
            let test = case.info().clone();

            stats.started += 1;
            reporter.test_started(&test);

            let timer = Timer::start(test.name.as_str());
            let mut ctx = TestContext::new(&test, &mut *reporter);

            // Protected region: a REQUIRE abort has already returned
            // normally by here, so an Err payload is always foreign.
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| case.invoke(&mut ctx)));
            if let Err(payload) = outcome {
                let failure = BodyFailure::from_panic(payload);
                warn!("{}: {}", test.name, failure);
                ctx.record_unexpected(&failure);
            }

            let status = ctx.status();
            drop(ctx);
            timer.stop();

            reporter.test_complete(&test);
            stats.record(status);
        }

        if let Some(hook) = saved_hook {
            panic::set_hook(hook);
        }

        stats.duration_ms = run_timer.elapsed_ms();
        reporter.test_summary(&stats);

        info!(
            "run complete: {}/{} passed ({:.1}%) in {}ms",
            stats.passed,
            stats.complete,
            stats.pass_rate(),
            stats.duration_ms
        );

        stats
    }
}
