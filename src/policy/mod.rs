//! Increment-eligibility policy: probation and departmental-test rules.

pub mod probation;

pub use probation::{evaluate_increment_eligibility, IncrementDecision};
