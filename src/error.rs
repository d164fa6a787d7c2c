//! Error types for the gffex library.

use thiserror::Error;

/// Errors that can occur while exporting a feature sequence.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Malformed input was encountered while parsing the hybrid file.
    #[error("{0}")]
    Parse(String),

    /// A feature references a sequence ID with no entry in the FASTA section.
    #[error("unknown sequence ID: {0}")]
    UnknownSequence(String),

    /// Feature coordinates fall outside the bounds of the looked-up sequence.
    #[error("{0}")]
    Range(String),

    /// A base outside the DNA alphabet was encountered during reverse-complement.
    #[error("unsupported base '{0}' in reverse complement")]
    UnsupportedBase(char),

    /// Invalid output configuration.
    #[error("{0}")]
    Config(String),
}
