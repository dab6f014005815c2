//! Shared recording reporter for integration tests.

#![allow(dead_code)]

use microtest::{AssertionInfo, Reporter, RunStatistics, TestInfo};

/// One observed reporter callback.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Count(usize),
    Started(String),
    Complete(String),
    Evaluated {
        test: String,
        expression: String,
        required: bool,
    },
    Error {
        test: String,
        expression: String,
        required: bool,
        file: String,
        line: u32,
    },
    Summary(RunStatistics),
}

/// Reporter that records every event in arrival order.
#[derive(Default)]
pub struct RecordingReporter {
    pub events: Vec<Event>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names in `test_started` order.
    pub fn started(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Started(name) => Some(name.clone()),
                _ => None,
            })
            .collect()
    }

    /// Names in `test_complete` order.
    pub fn completed(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Complete(name) => Some(name.clone()),
                _ => None,
            })
            .collect()
    }

    /// All `assertion_error` events.
    pub fn errors(&self) -> Vec<Event> {
        self.events
            .iter()
            .filter(|event| matches!(event, Event::Error { .. }))
            .cloned()
            .collect()
    }

    /// Expressions of all `assertion_error` events, in order.
    pub fn error_expressions(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Error { expression, .. } => Some(expression.clone()),
                _ => None,
            })
            .collect()
    }

    /// Number of `assertion_started` events attributed to `test`.
    pub fn evaluations_for(&self, test: &str) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, Event::Evaluated { test: t, .. } if t == test))
            .count()
    }

    /// The single end-of-run summary.
    pub fn summary(&self) -> RunStatistics {
        let summaries: Vec<_> = self
            .events
            .iter()
            .filter_map(|event| match event {
                Event::Summary(stats) => Some(stats.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(summaries.len(), 1, "expected exactly one summary event");
        summaries.into_iter().next().unwrap()
    }
}

impl Reporter for RecordingReporter {
    fn test_count(&mut self, total: usize) {
        self.events.push(Event::Count(total));
    }

    fn test_started(&mut self, info: &TestInfo) {
        self.events.push(Event::Started(info.name.clone()));
    }

    fn test_complete(&mut self, info: &TestInfo) {
        self.events.push(Event::Complete(info.name.clone()));
    }

    fn assertion_started(&mut self, test: &TestInfo, assertion: &AssertionInfo) {
        self.events.push(Event::Evaluated {
            test: test.name.clone(),
            expression: assertion.expression.clone(),
            required: assertion.required,
        });
    }

    fn assertion_error(&mut self, test: &TestInfo, error: &AssertionInfo) {
        self.events.push(Event::Error {
            test: test.name.clone(),
            expression: error.expression.clone(),
            required: error.required,
            file: error.file.clone(),
            line: error.line,
        });
    }

    fn test_summary(&mut self, stats: &RunStatistics) {
        self.events.push(Event::Summary(stats.clone()));
    }
}
