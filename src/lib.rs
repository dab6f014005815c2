//! microtest - Minimal unit-testing harness
//!
//! A small framework for declarative test registration, isolated per-test
//! execution, two-severity assertion capture, and pluggable reporting.
//!
//! ## Features
//!
//! - Explicit registration into a lazily-created process-wide registry
//!   (or any number of local registries), with declaration-site capture
//! - `expect!` checks that record a failure and keep going, `require!`
//!   checks that abort the rest of the current test body
//! - Fixture-bound tests that get a fresh fixture value per execution
//! - Foreign panics converted to reported failures; one broken test never
//!   stops the run
//! - A `Reporter` trait as the sole result sink, with a two-channel
//!   console implementation included
//!
//! ## Usage
//!
//! ```
//! use microtest::{expect, require, ConsoleReporter, Registry, Runner};
//!
//! let registry = Registry::new();
//!
//! registry.add("arithmetic", |ctx| {
//!     expect!(ctx, 1 + 1 == 2);
//!     require!(ctx, 2 + 2 == 4);
//!     expect!(ctx, 3 * 3 == 9);
//! });
//!
//! #[derive(Default)]
//! struct Fixture {
//!     x: u32,
//! }
//!
//! registry.add_with_fixture("fixture starts fresh", |fixture: &mut Fixture, ctx| {
//!     require!(ctx, fixture.x == 0);
//!     fixture.x = 7;
//! });
//!
//! let mut reporter = ConsoleReporter::new().no_color();
//! let stats = Runner::new().run(&registry, &mut reporter);
//! assert!(stats.is_all_passed());
//! ```
//!
//! A command-line wrapper is deliberately out of scope: embedders invoke
//! the runner against a reporter of their choice and map
//! `RunStatistics::failed > 0` to a non-zero exit status themselves.

pub mod case;
pub mod context;
pub mod models;
pub mod registry;
pub mod reporter;
pub mod runner;
pub mod utils;

pub use case::{TestBody, TestCase};
pub use context::TestContext;
pub use models::{AssertionInfo, BodyFailure, RunStatistics, TestInfo, TestStatus};
pub use registry::Registry;
pub use reporter::{ConsoleReporter, Reporter};
pub use runner::Runner;
pub use utils::{init_logger, LogLevel};
