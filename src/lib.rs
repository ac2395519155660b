//! # fgp-action
//!
//! Action SDK for FGP workflow services.
//!
//! An action is a short-lived unit of work the workflow engine runs as a
//! child process. The engine passes one JSON argument carrying the action's
//! metadata and workflow context, exposes workspace secrets as environment
//! variables, and reads exactly one JSON value back from stdout.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use serde::Deserialize;
//! use serde_json::json;
//!
//! #[derive(Deserialize)]
//! struct Config {
//!     greeting: String,
//! }
//!
//! let config: Config = fgp_action::metadata()?;
//! let event = fgp_action::invocation()?.event();
//!
//! fgp_action::write_result(&json!({
//!     "message": format!("{} {}", config.greeting, event.name),
//! }))?;
//! # Ok::<(), fgp_action::Error>(())
//! ```
//!
//! ## Output and exit codes
//!
//! The engine parses a single JSON value from stdout: the action's result,
//! or the error envelope written by [`write_error`]. Writing output does not
//! stop the action. Exit with a zero status to let the workflow continue,
//! or a non-zero status to halt the workflow branch; the SDK documents this
//! contract but leaves the exit code to the action.

mod args;
mod error;
mod output;
mod payload;
mod secret;

pub use args::{invocation, metadata};
pub use error::{Error, Result};
pub use output::{write_empty_result, write_error, write_result};
pub use payload::{Baggage, Event, EventWrapper, Invocation};
pub use secret::secret;

/// Re-export common types
pub use serde_json::Value;
