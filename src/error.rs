//! Error types for loading the corrector's resources.

use std::{io, path::PathBuf};

/// A specialized `Result` type for corrector operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a corrector.
///
/// Queries never fail: an unknown word simply has probability zero.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A corpus or mapping file is missing or could not be read
    #[error("Failed to read resource '{}'", path.display())]
    Resource {
        /// Path of the resource
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Reading from a stream failed
    #[error("I/O error while reading resource")]
    Io(#[from] io::Error),

    /// The corpus produced no tokens
    #[error("Corpus contains no words")]
    EmptyCorpus,

    /// The word mapping contained no pairs
    #[error("Word mapping contains no pairs")]
    EmptyMapping,

    /// A word mapping line is not a `mistake,correct` pair
    #[error("Malformed word mapping on line {line}: {content:?}")]
    MalformedMapping {
        /// One-based line number
        line: usize,
        /// The offending line
        content: String,
    },

    /// The n-gram window must be at least one
    #[error("Invalid n-gram window {0}")]
    InvalidWindow(usize),

    /// The tokenizer pattern failed to compile
    #[error("Invalid tokenizer pattern")]
    Pattern(#[from] regex::Error),
}

impl Error {
    pub(crate) fn resource(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Resource {
            path: path.into(),
            source,
        }
    }
}
