//! Demo action: greets whoever triggered the workflow.
//!
//! The engine runs this as `hello-action '<json payload>'`. To try it by
//! hand:
//!
//! ```sh
//! cargo run --example hello-action -- \
//!   '{"ArgsVersion":1,"Metadata":{"greeting":"Hello"},"Baggage":{"WorkspaceEvent":{"Event":{"name":"user/signup","data":{"name":"Ada"}}},"Actions":{}}}'
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::json;

/// Shape of this action's metadata, as configured in the workflow.
#[derive(Debug, Deserialize)]
struct Config {
    greeting: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        fgp_action::write_error(&err);
        // Non-zero halts the workflow branch. Exiting zero would report the
        // error but let the workflow continue past this action.
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config: Config = fgp_action::metadata().context("loading action config")?;
    let event = fgp_action::invocation()?.event();

    let name = event
        .data
        .get("name")
        .and_then(|value| value.as_str())
        .unwrap_or("world");

    fgp_action::write_result(&json!({
        "message": format!("{}, {}!", config.greeting, name),
        "event": event.name,
    }))?;

    Ok(())
}
