//! Data model for the test harness
//!
//! Defines test identity, assertion descriptors, the failure taxonomy,
//! and run statistics.

mod failure;
mod info;
mod stats;

pub use failure::BodyFailure;
pub use info::{AssertionInfo, TestInfo};
pub use stats::{RunStatistics, TestStatus};
