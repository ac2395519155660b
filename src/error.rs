//! Error types for the action SDK.

use thiserror::Error;

/// Errors produced while decoding the invocation payload or emitting output.
///
/// Parsing and metadata errors are ordinary values for the caller to handle;
/// only the error-envelope path in [`crate::write_error`] treats its own
/// failure as fatal.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The process was started without the invocation payload argument.
    #[error("no arguments present")]
    MissingArguments,

    /// The payload argument is not valid JSON matching the invocation shape.
    #[error("unable to parse invocation payload: {0}")]
    MalformedPayload(#[source] serde_json::Error),

    /// The metadata blob does not match the shape the caller asked for.
    #[error("metadata does not match the requested shape: {0}")]
    MetadataMismatch(#[source] serde_json::Error),

    /// The named secret is not set in the environment, or is set to the
    /// empty string. The two cases are indistinguishable.
    #[error("secret not found: {0}")]
    SecretNotFound(String),

    /// The result value could not be encoded as JSON.
    #[error("unable to encode result: {0}")]
    ResultEncoding(#[source] serde_json::Error),

    /// Writing to standard output failed.
    #[error("unable to write result: {0}")]
    ResultWrite(#[source] std::io::Error),

    /// A result has already been written by this process. The engine reads
    /// exactly one JSON value from stdout, so a second write is refused
    /// instead of producing concatenated fragments.
    #[error("a result has already been written")]
    ResultAlreadyWritten,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
