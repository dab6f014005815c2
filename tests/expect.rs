//! EXPECT-class assertion behavior: failures are recorded and the test
//! body keeps executing.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use common::RecordingReporter;
use microtest::{expect, Registry, Runner};
use pretty_assertions::assert_eq;

#[test]
fn failed_expect_does_not_stop_the_body() {
    let registry = Registry::new();
    let reached_end = Arc::new(AtomicUsize::new(0));

    let flag = Arc::clone(&reached_end);
    registry.add("false then true", move |ctx| {
        expect!(ctx, false);
        expect!(ctx, true);
        flag.fetch_add(1, Ordering::SeqCst);
    });

    let mut reporter = RecordingReporter::new();
    let stats = Runner::new().run(&registry, &mut reporter);

    assert_eq!(reached_end.load(Ordering::SeqCst), 1);
    assert_eq!(reporter.evaluations_for("false then true"), 2);
    assert_eq!(reporter.errors().len(), 1);
    assert_eq!(stats.failed, 1);
    assert_eq!(stats.aborted, 0);
}

#[test]
fn every_expect_runs_despite_earlier_failures() {
    let registry = Registry::new();
    let evaluated = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&evaluated);
    registry.add("all expects run", move |ctx| {
        let x = 1;
        expect!(ctx, counter.fetch_add(1, Ordering::SeqCst) < 100);
        expect!(ctx, x + x == 3);
        expect!(ctx, counter.fetch_add(1, Ordering::SeqCst) < 100);
        expect!(ctx, 1 + 1 == 2);
    });

    let mut reporter = RecordingReporter::new();
    let stats = Runner::new().run(&registry, &mut reporter);

    assert_eq!(evaluated.load(Ordering::SeqCst), 2);
    assert_eq!(reporter.evaluations_for("all expects run"), 4);
    assert_eq!(reporter.error_expressions(), ["x + x == 3"]);
    assert_eq!(stats.failed, 1);
}

// Scenario: two EXPECT-only tests, the first fully passing, the second with
// one failing check out of three.
#[test]
fn one_passing_and_one_failing_test() {
    let registry = Registry::new();

    registry.add("one plus one passing", |ctx| {
        let x = 1;
        expect!(ctx, x == 1);
        expect!(ctx, x + x == 2);
        expect!(ctx, 1 + 1 == 2);
    });
    registry.add("one plus one failing", |ctx| {
        let x = 1;
        expect!(ctx, x == 1);
        expect!(ctx, x + x == 3);
        expect!(ctx, 1 + 1 == 2);
    });

    let mut reporter = RecordingReporter::new();
    let stats = Runner::new().run(&registry, &mut reporter);

    assert_eq!(stats.passed, 1);
    assert_eq!(stats.failed, 1);
    assert_eq!(stats.complete, 2);
    assert_eq!(reporter.errors().len(), 1);
}

#[test]
fn expect_failure_reports_source_text_and_location() {
    let registry = Registry::new();
    registry.add("records expression", |ctx| {
        expect!(ctx, 2 + 2 == 5);
    });

    let mut reporter = RecordingReporter::new();
    Runner::new().run(&registry, &mut reporter);

    let errors = reporter.errors();
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        common::Event::Error {
            expression,
            required,
            file,
            line,
            ..
        } => {
            assert_eq!(expression, "2 + 2 == 5");
            assert!(!required);
            assert!(file.ends_with("expect.rs"));
            assert!(*line > 0);
        }
        other => panic!("unexpected event: {other:?}"),
    }
}
