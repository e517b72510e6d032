//! Error types for format operations
//!
//! The formatter itself is total and never fails. Errors only show up at the
//! edges: picking an output format, serializing, or decoding an input file.

use thiserror::Error;

/// Errors that can occur while decoding input or serializing output
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// Format does not accept the requested operation or option
    #[error("Operation not supported: {0}")]
    NotSupported(String),
    /// An input file could not be decoded into form fields
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
