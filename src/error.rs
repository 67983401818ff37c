//! Error types for statement extraction.

use std::num::ParseFloatError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort an extraction. None of them yield a partial statement.
#[derive(Debug, Error)]
pub enum FinancialsError {
    /// Failed to read the input file.
    #[error("failed to read file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bytes could not be decoded into facts and contexts.
    #[error("failed to decode XBRL document {name}: {message}")]
    Decode { name: String, message: String },

    /// A fact selected for the reporting period does not hold a number.
    #[error("invalid numeric value '{value}' for {concept} (context {context}) in {document}: {source}")]
    NumericValue {
        document: String,
        concept: String,
        context: String,
        value: String,
        #[source]
        source: ParseFloatError,
    },
}

pub type Result<T> = std::result::Result<T, FinancialsError>;
