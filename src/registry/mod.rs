//! Test registry
//!
//! An ordered collection of registered test cases. `Registry::global()` is
//! the process-wide instance: lazily constructed on first access, so
//! registration calls from independent compilation units always resolve to
//! the same list no matter which unit runs first. Local instances exist for
//! embedding and for testing the harness itself.
//!
//! Registration is explicit and permanent; there is no removal operation.
//! Iteration order equals registration order equals execution order.

use std::sync::{OnceLock, RwLock};

use crate::case::TestCase;
use crate::context::TestContext;
use crate::models::TestInfo;

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// Ordered, append-only collection of test cases.
#[derive(Default)]
pub struct Registry {
    cases: RwLock<Vec<TestCase>>,
}

impl Registry {
    /// Create an empty local registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry, created on first access.
    pub fn global() -> &'static Registry {
        GLOBAL.get_or_init(Registry::new)
    }

    /// Append a fully-built case. Duplicate names are allowed; each
    /// registration is an independent case.
    pub fn register(&self, case: TestCase) {
        tracing::debug!("registered {}", case.info());
        self.cases
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(case);
    }

    /// Register a plain test. The recorded file and line are the caller's.
    #[track_caller]
    pub fn add(&self, name: impl Into<String>, body: impl Fn(&mut TestContext<'_>) + Send + Sync + 'static) {
        let location = std::panic::Location::caller();
        let info = TestInfo::new(name, location.file(), location.line());
        self.register(TestCase::new(info, body));
    }

    /// Register a fixture-bound test. A fresh `F::default()` is built for
    /// every execution of the body.
    #[track_caller]
    pub fn add_with_fixture<F>(
        &self,
        name: impl Into<String>,
        body: impl Fn(&mut F, &mut TestContext<'_>) + Send + Sync + 'static,
    ) where
        F: Default + 'static,
    {
        let location = std::panic::Location::caller();
        let info = TestInfo::new(name, location.file(), location.line());
        self.register(TestCase::with_fixture(info, body));
    }

    /// Snapshot of all cases in registration order.
    pub fn tests(&self) -> Vec<TestCase> {
        self.cases
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.cases.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
