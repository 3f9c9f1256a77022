use thiserror::Error;

/// Failure to load a package listing.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// A record could not be decoded into a package.
    #[error("failed to decode package record {index} at line {line} column {column}: {source}")]
    Malformed {
        /// Zero-based index of the failing record in the stream.
        index: usize,
        line: usize,
        column: usize,
        #[source]
        source: serde_json::Error,
    },

    /// The underlying reader failed.
    #[error("failed to read package listing: {0}")]
    Read(#[source] std::io::Error),
}

impl ManifestError {
    pub(crate) fn from_json(index: usize, source: serde_json::Error) -> Self {
        if source.is_io() {
            return ManifestError::Read(source.into());
        }
        ManifestError::Malformed {
            index,
            line: source.line(),
            column: source.column(),
            source,
        }
    }
}
