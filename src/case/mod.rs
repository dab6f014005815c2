//! Test cases
//!
//! A `TestCase` pairs a declaration-site identity with an executable body.
//! Fixture-bound cases construct a fresh fixture value for every invocation
//! so no state leaks between tests, whatever exit path the body takes.

use std::fmt;
use std::sync::Arc;

use crate::context::TestContext;
use crate::models::TestInfo;

/// Executable body of a test, invoked with the per-test context.
pub type TestBody = Arc<dyn Fn(&mut TestContext<'_>) + Send + Sync>;

/// One registered, independently executed unit of test code.
#[derive(Clone)]
pub struct TestCase {
    info: TestInfo,
    body: TestBody,
}

impl TestCase {
    /// Create a plain test case from an identity and a body.
    pub fn new(info: TestInfo, body: impl Fn(&mut TestContext<'_>) + Send + Sync + 'static) -> Self {
        Self {
            info,
            body: Arc::new(body),
        }
    }

    /// Create a fixture-bound test case.
    ///
    /// The body receives a fresh `F::default()` on every invocation; the
    /// fixture is dropped when the body exits, including on an abort
    /// early-return or a panic unwind.
    pub fn with_fixture<F>(
        info: TestInfo,
        body: impl Fn(&mut F, &mut TestContext<'_>) + Send + Sync + 'static,
    ) -> Self
    where
        F: Default + 'static,
    {
        Self::new(info, move |ctx| {
            let mut fixture = F::default();
            body(&mut fixture, ctx);
        })
    }

    pub fn info(&self) -> &TestInfo {
        &self.info
    }

    /// Run the body against a context.
    pub fn invoke(&self, ctx: &mut TestContext<'_>) {
        (self.body)(ctx);
    }
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase").field("info", &self.info).finish()
    }
}
