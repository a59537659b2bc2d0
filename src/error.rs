//! Error types for the merge pipeline.

use std::path::PathBuf;

/// Errors that can occur while merging a statistics export.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    /// The named input is not a readable file.
    #[error("not a valid input file: {0:?}")]
    InputNotFound(PathBuf),

    /// The batch header lacks a required column.
    #[error("malformed input: missing required column '{0}'")]
    MissingColumn(&'static str),

    /// A data row does not line up with the header, or the csv is broken.
    #[error("malformed input: {0}")]
    MalformedRow(#[from] csv::Error),

    /// The accumulated document exists but is not valid json.
    #[error("could not parse document {path:?}: {source}")]
    DocumentParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The merged document could not be serialized back to json.
    #[error("could not write document: {0}")]
    DocumentWrite(#[from] serde_json::Error),

    /// Reading or writing failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias for merge results.
pub type MergeResult<T> = std::result::Result<T, MergeError>;
