//! EDR record shapes
//!
//! Typed documents exchanged with the endpoint security data streams, plus
//! the partial-override structs used to customize generated fixtures.
//!
//! # Core Concepts
//!
//! - [`EndpointAction`]: a command issued to an endpoint agent
//! - [`EndpointActionResponse`]: the endpoint's reply to an action
//! - [`ActivityLogEntry`]: tagged wrapper for a unified activity feed
//! - [`SearchHit`]: retrieval envelope for index-backed lookups
//! - `*Overrides`: per-record partials where every field is optional and
//!   merging is explicit, field by field
//!
//! Records are plain values: no persistence, no mutation after construction
//! beyond applying an overrides struct.

mod action;
mod activity;
mod command;
mod response;
mod search;

pub use action::{
    ActionAgent, ActionData, ActionDataOverrides, ActionError, ActionFields,
    ActionFieldsOverrides, ActionUser, EndpointAction, EndpointActionOverrides,
};
pub use activity::{
    ActivityLogEntry, ActivityLogEntryType, ActivityLogItem, ActivityLogResponseOverrides,
};
pub use command::{ActionInputType, ActionType, IsolationCommand, ParseCommandError};
pub use response::{
    EndpointActionResponse, EndpointActionResponseOverrides, ResponseAgent, ResponseFields,
    ResponseFieldsOverrides,
};
pub use search::{backing_index, SearchHit, ACTIONS_INDEX, ACTION_RESPONSES_DATA_STREAM};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
