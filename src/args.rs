//! One-time decoding of the invocation payload.
//!
//! The engine passes the payload as the first positional argument. It is
//! parsed at most once per process and cached for the process lifetime; a
//! failed parse leaves the cache empty so a later call may retry.

use crate::error::{Error, Result};
use crate::payload::Invocation;
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;

static INVOCATION: PayloadCell = PayloadCell::new();

/// Lazy cell holding the decoded payload.
///
/// The argument source is injected per call so the caching contract is
/// testable; the public [`invocation`] entry point binds it to the real
/// process arguments. Concurrent first access collapses into a single
/// parse: `get_or_try_init` blocks other callers while one initializer
/// runs, and an `Err` leaves the cell untouched.
pub(crate) struct PayloadCell {
    cell: OnceCell<Invocation>,
}

impl PayloadCell {
    pub(crate) const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Return the cached record, decoding it from `read_arg` on first use.
    ///
    /// Once a decode has succeeded, `read_arg` is never called again.
    pub(crate) fn load_with<F>(&self, read_arg: F) -> Result<&Invocation>
    where
        F: FnOnce() -> Option<String>,
    {
        self.cell.get_or_try_init(|| {
            let raw = read_arg().ok_or(Error::MissingArguments)?;
            let record: Invocation =
                serde_json::from_str(&raw).map_err(Error::MalformedPayload)?;

            tracing::debug!(
                args_version = record.args_version,
                event = %record.event().name,
                "decoded invocation payload"
            );

            Ok(record)
        })
    }
}

/// Return the invocation payload for this process.
///
/// The payload is read from the first positional argument and parsed on the
/// first call; every later call returns the same cached record without
/// touching the process arguments again.
///
/// # Errors
/// * [`Error::MissingArguments`] if the process was started without the
///   payload argument.
/// * [`Error::MalformedPayload`] if the argument is not valid JSON matching
///   the invocation shape.
pub fn invocation() -> Result<&'static Invocation> {
    INVOCATION.load_with(|| std::env::args().nth(1))
}

/// Decode the action's metadata into the shape the caller declares.
///
/// The metadata schema is owned by each action's workflow configuration, so
/// the SDK stores it opaquely and decodes it here on demand.
///
/// # Example
///
/// ```rust,no_run
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Config {
///     greeting: String,
/// }
///
/// let config: Config = fgp_action::metadata()?;
/// # Ok::<(), fgp_action::Error>(())
/// ```
pub fn metadata<T: DeserializeOwned>() -> Result<T> {
    invocation()?.decode_metadata()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::cell::Cell;

    const PAYLOAD: &str = r#"{"ArgsVersion":1,"Metadata":{"x":5},"Baggage":{"WorkspaceEvent":{"Event":{"name":"signup","data":{}}},"Actions":{}}}"#;

    #[test]
    fn test_missing_argument() {
        let cell = PayloadCell::new();
        let err = cell.load_with(|| None).unwrap_err();
        assert!(matches!(err, Error::MissingArguments));
    }

    #[test]
    fn test_malformed_payload_keeps_parse_error() {
        let cell = PayloadCell::new();
        let err = cell
            .load_with(|| Some("not json".to_string()))
            .unwrap_err();

        match err {
            Error::MalformedPayload(source) => {
                assert!(source.is_syntax());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_second_load_returns_cached_record() {
        let cell = PayloadCell::new();
        let reads = Cell::new(0u32);

        let first = cell
            .load_with(|| {
                reads.set(reads.get() + 1);
                Some(PAYLOAD.to_string())
            })
            .unwrap();

        // The second call must not consult the argument source at all.
        let second = cell
            .load_with(|| {
                reads.set(reads.get() + 1);
                Some("garbage that would fail to parse".to_string())
            })
            .unwrap();

        assert_eq!(reads.get(), 1);
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_failed_parse_does_not_poison_cache() {
        let cell = PayloadCell::new();

        assert!(cell.load_with(|| Some("{".to_string())).is_err());

        let record = cell.load_with(|| Some(PAYLOAD.to_string())).unwrap();
        assert_eq!(record.args_version, 1);
    }

    #[test]
    fn test_metadata_through_cached_record() {
        #[derive(Debug, Deserialize)]
        struct Config {
            x: i64,
        }

        let cell = PayloadCell::new();
        let record = cell.load_with(|| Some(PAYLOAD.to_string())).unwrap();

        let config: Config = record.decode_metadata().unwrap();
        assert_eq!(config.x, 5);
        assert_eq!(record.event().name, "signup");
    }
}
