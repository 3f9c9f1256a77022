//! Pure rule evaluation (no IO).
//!
//! Input: packages and rules parsed elsewhere.
//! Output: violations + verdict + summary data.

#![forbid(unsafe_code)]

pub mod model;
pub mod pattern;
pub mod report;
pub mod scope;

pub mod checks;
mod engine;
mod fingerprint;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::{check_denied_list_rule, check_rules, evaluate};
