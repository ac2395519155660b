//! Invocation payload data model.
//!
//! The engine hands every action a single JSON argument with three layers:
//! the payload envelope itself ([`Invocation`]), the workflow context
//! ([`Baggage`]), and the triggering [`Event`]. Metadata stays an opaque
//! [`Value`] until the action declares the shape it expects.

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// The decoded invocation payload.
///
/// Decoded once per process by [`crate::invocation`] and immutable from then
/// on. Field names on the wire are PascalCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Invocation {
    /// Schema version of the payload envelope itself.
    #[serde(default)]
    pub args_version: i64,

    /// Action-specific configuration, schema owned by the action. Decoded
    /// on demand via [`Invocation::decode_metadata`].
    #[serde(default)]
    pub metadata: Value,

    /// Workflow context carried into this action.
    #[serde(default)]
    pub baggage: Baggage,
}

impl Invocation {
    /// Decode the opaque metadata blob into the shape the action expects.
    ///
    /// The metadata schema is owned by each action's configuration, not by
    /// this SDK, so decoding is deferred until the action names its type.
    pub fn decode_metadata<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(self.metadata.clone()).map_err(Error::MetadataMismatch)
    }

    /// The event that triggered the workflow.
    pub fn event(&self) -> &Event {
        &self.baggage.event_wrapper.event
    }
}

/// Workflow context: the triggering event and prior actions' outputs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Baggage {
    /// Wrapper around the triggering event. The wire key differs from the
    /// field name.
    #[serde(default, rename = "WorkspaceEvent")]
    pub event_wrapper: EventWrapper,

    /// Outputs of prior actions in the workflow, keyed by execution order.
    #[serde(default, rename = "Actions")]
    pub actions: HashMap<u32, HashMap<String, Value>>,
}

impl Baggage {
    /// Output of the action at the given step, if it has run.
    pub fn action_output(&self, step: u32) -> Option<&HashMap<String, Value>> {
        self.actions.get(&step)
    }
}

/// Wire-level wrapper around the triggering event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventWrapper {
    #[serde(default, rename = "Event")]
    pub event: Event,
}

/// The event that triggered the workflow.
///
/// Optional fields are omitted from the wire form when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Event name (e.g. "user/signup").
    #[serde(default)]
    pub name: String,

    /// Event payload.
    #[serde(default)]
    pub data: HashMap<String, Value>,

    /// Actor context, if the event carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<HashMap<String, Value>>,

    /// Event identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Event timestamp, unix milliseconds.
    #[serde(default, rename = "ts", skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,

    /// Event schema version tag.
    #[serde(default, rename = "v", skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}
