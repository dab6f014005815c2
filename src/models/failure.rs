//! Failure taxonomy for test bodies
//!
//! Assertion failures are data (`AssertionInfo`) and flow through the
//! reporter directly. `BodyFailure` covers everything else that can escape
//! a test body: a panic carrying a message, or one carrying nothing usable.

use std::any::Any;
use thiserror::Error;

/// A foreign failure that surfaced from a test body.
///
/// The `Display` form doubles as the synthesized expression text reported
/// against the test's declared location.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BodyFailure {
    /// A panic with a descriptive message.
    #[error("unexpected failure: {0}")]
    Unexpected(String),

    /// A panic whose payload carried no description.
    #[error("unexpected failure: unknown error")]
    Unknown,
}

impl BodyFailure {
    /// Classify a caught panic payload.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        if let Some(message) = payload.downcast_ref::<&str>() {
            BodyFailure::Unexpected((*message).to_string())
        } else if let Some(message) = payload.downcast_ref::<String>() {
            BodyFailure::Unexpected(message.clone())
        } else {
            BodyFailure::Unknown
        }
    }
}
