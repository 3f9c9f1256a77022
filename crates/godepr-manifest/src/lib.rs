//! Manifest adapter: decode the package listing produced by `go list -json`.
//!
//! The listing is a stream of concatenated JSON objects, not a JSON array.
//! Records may be separated by any amount of whitespace, or by none at all.
//! Decoding is all-or-nothing: one malformed record fails the whole load.
//! Field names are matched in the go list spelling plus its lowercase and
//! camelCase forms, not case-insensitively.

#![forbid(unsafe_code)]

mod error;

use godepr_domain::model::Package;
use serde_json::Deserializer;
use std::io::Read;

pub use error::ManifestError;

/// Decode every package record in `text`, preserving input order.
///
/// Empty or whitespace-only input yields an empty list.
pub fn parse_packages(text: &str) -> Result<Vec<Package>, ManifestError> {
    collect_records(Deserializer::from_str(text).into_iter::<Package>())
}

/// Like [`parse_packages`], reading the stream from `reader`.
pub fn read_packages<R: Read>(reader: R) -> Result<Vec<Package>, ManifestError> {
    collect_records(Deserializer::from_reader(reader).into_iter::<Package>())
}

fn collect_records<I>(records: I) -> Result<Vec<Package>, ManifestError>
where
    I: Iterator<Item = serde_json::Result<Package>>,
{
    let mut packages = Vec::new();
    for (index, record) in records.enumerate() {
        let package = record.map_err(|source| ManifestError::from_json(index, source))?;
        packages.push(package);
    }
    Ok(packages)
}

/// Fuzz-friendly API for testing decoding robustness.
/// These functions are designed to never panic on any input.
pub mod fuzz {
    /// Decode arbitrary text as a package stream.
    ///
    /// Returns the number of decoded packages, or the decode error.
    /// **Never panics** on any input.
    pub fn parse_stream(text: &str) -> Result<usize, super::ManifestError> {
        super::parse_packages(text).map(|packages| packages.len())
    }
}
