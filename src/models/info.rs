//! Test and assertion identity
//!
//! `TestInfo` records where a test was declared; `AssertionInfo` describes
//! one evaluated check. Both are immutable after construction.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a registered test: name plus declaration site.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestInfo {
    /// Test name as given at registration. Duplicates are allowed.
    pub name: String,

    /// Source file of the registration call.
    pub file: String,

    /// Source line of the registration call.
    pub line: u32,
}

impl TestInfo {
    pub fn new(name: impl Into<String>, file: impl Into<String>, line: u32) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
            line,
        }
    }
}

impl fmt::Display for TestInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}:{})", self.name, self.file, self.line)
    }
}

/// Descriptor for a single evaluated assertion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertionInfo {
    /// `true` for a REQUIRE-class check, `false` for an EXPECT-class check.
    pub required: bool,

    /// Literal source text of the checked condition.
    pub expression: String,

    /// Source file of the check.
    pub file: String,

    /// Source line of the check.
    pub line: u32,
}

impl AssertionInfo {
    pub fn new(required: bool, expression: impl Into<String>, file: impl Into<String>, line: u32) -> Self {
        Self {
            required,
            expression: expression.into(),
            file: file.into(),
            line,
        }
    }

    /// Severity label for rendering.
    pub fn kind(&self) -> &'static str {
        if self.required {
            "REQUIRE"
        } else {
            "EXPECT"
        }
    }
}

impl fmt::Display for AssertionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {} failed: {}",
            self.file,
            self.line,
            self.kind(),
            self.expression
        )
    }
}
