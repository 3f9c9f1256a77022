//! Stable DTOs and IDs used across the godepr workspace.
//!
//! This crate is intentionally boring:
//! - the violation record and the emitted report envelope
//! - stable string IDs for rule kinds and violation codes
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod receipt;

pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use receipt::{GodeprData, GodeprReport, SCHEMA_REPORT_V1, ToolMeta, Verdict, Violation};
