//! Result and error emission on standard output.
//!
//! The engine reads exactly one JSON value from an action's stdout: either
//! the action's result or the error envelope `{"error": "<message>"}`. No
//! framing, no trailing newline, no streaming. A process-wide flag enforces
//! the single write for results; [`write_error`] is the last-resort channel
//! and is never blocked by it.

use crate::error::{Error, Result};
use serde::Serialize;
use serde_json::json;
use std::fmt::Display;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

static RESULT_WRITTEN: AtomicBool = AtomicBool::new(false);

/// Write the action's result to stdout as a single JSON value.
///
/// Anything written here is captured as the action's output, added to the
/// workflow context, and available to later actions in the workflow.
///
/// Writing a result does not stop the action. Exit-code policy is the
/// caller's: exit zero to let the workflow continue, non-zero to halt the
/// workflow branch.
///
/// # Errors
/// * [`Error::ResultEncoding`] if the value cannot be serialized.
/// * [`Error::ResultWrite`] if the write to stdout fails.
/// * [`Error::ResultAlreadyWritten`] on any call after the first: the
///   engine parses a single JSON value, so concatenated fragments are
///   refused at the source.
pub fn write_result<T: Serialize>(value: &T) -> Result<()> {
    let payload = encode_result(value)?;
    claim_output_slot()?;
    write_stdout(&payload)
}

/// Write the literal empty JSON object to stdout.
///
/// For actions that complete without producing a value; the engine still
/// expects one JSON value on the stream.
pub fn write_empty_result() -> Result<()> {
    claim_output_slot()?;
    write_stdout(b"{}")
}

/// Write an error envelope `{"error": "<message>"}` to stdout.
///
/// This does not stop the action or the workflow. To stop the action and
/// halt the workflow branch, exit with a non-zero status code; to stop the
/// action but let the workflow continue, exit zero.
///
/// The envelope is the last remaining channel back to the engine, so a
/// failure to encode or write it is unrecoverable: the failure is logged
/// and the process terminates immediately with a non-zero status.
pub fn write_error(err: impl Display) {
    let payload = match error_envelope(&err.to_string()) {
        Ok(payload) => payload,
        Err(encode_err) => fatal("unable to encode error envelope", &encode_err),
    };

    // The envelope occupies the single output slot like any result would.
    RESULT_WRITTEN.store(true, Ordering::SeqCst);

    if let Err(write_err) = write_stdout(&payload) {
        fatal("unable to write error envelope", &write_err);
    }
}

fn encode_result<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(value).map_err(Error::ResultEncoding)
}

fn error_envelope(message: &str) -> Result<Vec<u8>> {
    serde_json::to_vec(&json!({ "error": message })).map_err(Error::ResultEncoding)
}

fn claim_output_slot() -> Result<()> {
    if RESULT_WRITTEN.swap(true, Ordering::SeqCst) {
        return Err(Error::ResultAlreadyWritten);
    }
    Ok(())
}

fn write_stdout(payload: &[u8]) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(payload).map_err(Error::ResultWrite)?;
    stdout.flush().map_err(Error::ResultWrite)?;

    tracing::debug!(bytes = payload.len(), "wrote action output");
    Ok(())
}

fn fatal(message: &str, err: &dyn Display) -> ! {
    tracing::error!(error = %err, "{}", message);
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_encode_result_is_compact() {
        let payload = encode_result(&json!({"a": 1})).unwrap();
        assert_eq!(payload, br#"{"a":1}"#);
    }

    #[test]
    fn test_encode_result_failure() {
        // A map with non-string keys cannot be encoded as a JSON object.
        let mut bad = std::collections::HashMap::new();
        bad.insert(vec![1u8], "value");

        let err = encode_result(&bad).unwrap_err();
        assert!(matches!(err, Error::ResultEncoding(_)));
    }

    #[test]
    fn test_error_envelope_exact_bytes() {
        let payload = error_envelope("secret not found: FOO").unwrap();
        assert_eq!(payload, br#"{"error":"secret not found: FOO"}"#);
    }

    #[test]
    fn test_error_envelope_from_sdk_error() {
        let err = Error::SecretNotFound("FOO".to_string());
        let payload = error_envelope(&err.to_string()).unwrap();
        assert_eq!(payload, br#"{"error":"secret not found: FOO"}"#);
    }

    // The only test that touches the process-wide output slot; keeping both
    // calls in one test avoids ordering hazards with parallel test threads.
    #[test]
    fn test_second_result_write_is_refused() {
        write_result(&json!({"first": true})).unwrap();

        let err = write_result(&json!({"second": true})).unwrap_err();
        assert!(matches!(err, Error::ResultAlreadyWritten));
    }
}
