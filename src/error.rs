//! Error types for decoding and for the file shell around it.

use std::path::PathBuf;

use thiserror::Error;

use crate::category::Category;

/// Failures of the pure decoding step.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The document or one of its categories does not have the expected shape.
    /// `category` is `None` when the document itself is not an object.
    #[error("Schema error: {reason}")]
    Schema {
        category: Option<Category>,
        reason: String,
    },

    /// A suffix run cannot be split into whole 3-character chunks.
    #[error(
        "Malformed dictionary: suffix run for prefix '{prefix}' in category '{category}' \
         has length {len}, which is not a multiple of 3"
    )]
    MalformedDictionary {
        category: Category,
        prefix: String,
        len: usize,
    },
}

/// Errors raised while reading, decoding or writing dictionary documents.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Error::Parse {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
