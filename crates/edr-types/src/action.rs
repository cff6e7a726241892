//! Endpoint action records
//!
//! [`EndpointAction`] is the document written to the actions index when an
//! operator issues a command to an endpoint agent. Field names follow the
//! indexed document shape (`@timestamp`, `EndpointActions`, ...).
//!
//! Every record has a matching overrides struct in which each field is
//! optional. Applying overrides merges field by field: a set leaf replaces
//! the base value, a set nested struct recurses, an unset field keeps the
//! base value.

use crate::command::{ActionInputType, ActionType, IsolationCommand};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A command issued to an endpoint agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointAction {
    /// Moment the action was issued
    #[serde(rename = "@timestamp")]
    pub timestamp: DateTime<Utc>,
    /// Target agents
    pub agent: ActionAgent,
    /// Action payload
    #[serde(rename = "EndpointActions")]
    pub endpoint_actions: ActionFields,
    /// Delivery error, absent on the happy path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ActionError>,
    /// Operator who issued the action
    pub user: ActionUser,
}

/// Agents an action is addressed to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionAgent {
    /// Agent identifiers; one action can fan out to several agents
    pub id: Vec<String>,
}

/// The action payload under `EndpointActions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionFields {
    /// Unique identifier correlating action and response documents
    pub action_id: String,
    /// Moment after which the action must no longer be delivered
    pub expiration: DateTime<Utc>,
    /// Action type tag
    #[serde(rename = "type")]
    pub action_type: ActionType,
    /// Subsystem the action is addressed to
    pub input_type: ActionInputType,
    /// Command and operator comment
    pub data: ActionData,
}

/// Command payload shared by actions and responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionData {
    /// The command to carry out
    pub command: IsolationCommand,
    /// Free-text operator comment
    pub comment: String,
}

/// Operator identity on an action document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionUser {
    /// User identifier
    pub id: String,
}

/// Error recorded on a failed action or response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionError {
    /// Human-readable failure description
    pub message: String,
    /// Machine-readable error code, when one exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ActionError {
    /// Create an error with a message only
    #[inline]
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    /// With error code
    #[inline]
    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

/// Partial [`EndpointAction`]: set fields win over generated defaults
#[derive(Debug, Clone, Default)]
pub struct EndpointActionOverrides {
    /// Replacement timestamp; also anchors the generated expiration
    pub timestamp: Option<DateTime<Utc>>,
    /// Replacement agent ids
    pub agent_ids: Option<Vec<String>>,
    /// Nested overrides for the action payload
    pub endpoint_actions: Option<ActionFieldsOverrides>,
    /// Attach a delivery error
    pub error: Option<ActionError>,
    /// Replacement operator id
    pub user_id: Option<String>,
}

/// Partial [`ActionFields`]
#[derive(Debug, Clone, Default)]
pub struct ActionFieldsOverrides {
    pub action_id: Option<String>,
    pub expiration: Option<DateTime<Utc>>,
    pub action_type: Option<ActionType>,
    pub input_type: Option<ActionInputType>,
    pub data: Option<ActionDataOverrides>,
}

/// Partial [`ActionData`]
#[derive(Debug, Clone, Default)]
pub struct ActionDataOverrides {
    pub command: Option<IsolationCommand>,
    pub comment: Option<String>,
}

impl EndpointActionOverrides {
    /// Empty overrides; every generated default survives
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With a fixed timestamp
    #[inline]
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// With a single target agent
    #[inline]
    #[must_use]
    pub fn with_agent_id(mut self, id: impl Into<String>) -> Self {
        self.agent_ids = Some(vec![id.into()]);
        self
    }

    /// With a fixed action id
    #[must_use]
    pub fn with_action_id(mut self, id: impl Into<String>) -> Self {
        self.fields_mut().action_id = Some(id.into());
        self
    }

    /// With a fixed expiration
    #[must_use]
    pub fn with_expiration(mut self, expiration: DateTime<Utc>) -> Self {
        self.fields_mut().expiration = Some(expiration);
        self
    }

    /// With a fixed command
    #[must_use]
    pub fn with_command(mut self, command: IsolationCommand) -> Self {
        self.data_mut().command = Some(command);
        self
    }

    /// With a fixed comment
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.data_mut().comment = Some(comment.into());
        self
    }

    /// With a delivery error
    #[inline]
    #[must_use]
    pub fn with_error(mut self, error: ActionError) -> Self {
        self.error = Some(error);
        self
    }

    /// With a fixed operator id
    #[inline]
    #[must_use]
    pub fn with_user_id(mut self, id: impl Into<String>) -> Self {
        self.user_id = Some(id.into());
        self
    }

    /// Merge into `action`, set fields winning at every nesting level
    pub fn apply(self, action: &mut EndpointAction) {
        if let Some(timestamp) = self.timestamp {
            action.timestamp = timestamp;
        }
        if let Some(ids) = self.agent_ids {
            action.agent.id = ids;
        }
        if let Some(fields) = self.endpoint_actions {
            fields.apply(&mut action.endpoint_actions);
        }
        if let Some(error) = self.error {
            action.error = Some(error);
        }
        if let Some(user_id) = self.user_id {
            action.user.id = user_id;
        }
    }

    fn fields_mut(&mut self) -> &mut ActionFieldsOverrides {
        self.endpoint_actions.get_or_insert_with(Default::default)
    }

    fn data_mut(&mut self) -> &mut ActionDataOverrides {
        self.fields_mut().data.get_or_insert_with(Default::default)
    }
}

impl ActionFieldsOverrides {
    /// Merge into `fields`
    pub fn apply(self, fields: &mut ActionFields) {
        if let Some(action_id) = self.action_id {
            fields.action_id = action_id;
        }
        if let Some(expiration) = self.expiration {
            fields.expiration = expiration;
        }
        if let Some(action_type) = self.action_type {
            fields.action_type = action_type;
        }
        if let Some(input_type) = self.input_type {
            fields.input_type = input_type;
        }
        if let Some(data) = self.data {
            data.apply(&mut fields.data);
        }
    }
}

impl ActionDataOverrides {
    /// Merge into `data`
    pub fn apply(self, data: &mut ActionData) {
        if let Some(command) = self.command {
            data.command = command;
        }
        if let Some(comment) = self.comment {
            data.comment = comment;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn sample_action() -> EndpointAction {
        EndpointAction {
            timestamp: Utc.with_ymd_and_hms(2023, 4, 20, 10, 30, 0).unwrap(),
            agent: ActionAgent {
                id: vec!["agent-a".to_string()],
            },
            endpoint_actions: ActionFields {
                action_id: "action-1".to_string(),
                expiration: Utc.with_ymd_and_hms(2023, 4, 25, 10, 30, 0).unwrap(),
                action_type: ActionType::InputAction,
                input_type: ActionInputType::Endpoint,
                data: ActionData {
                    command: IsolationCommand::Isolate,
                    comment: "initial".to_string(),
                },
            },
            error: None,
            user: ActionUser {
                id: "analyst".to_string(),
            },
        }
    }

    #[test]
    fn empty_overrides_leave_record_untouched() {
        let mut action = sample_action();
        let original = action.clone();
        EndpointActionOverrides::new().apply(&mut action);
        assert_eq!(action, original);
    }

    #[test]
    fn leaf_override_wins_and_siblings_survive() {
        let mut action = sample_action();
        EndpointActionOverrides::new()
            .with_command(IsolationCommand::Unisolate)
            .apply(&mut action);

        assert_eq!(
            action.endpoint_actions.data.command,
            IsolationCommand::Unisolate
        );
        // sibling leaf under the same nested path keeps its base value
        assert_eq!(action.endpoint_actions.data.comment, "initial");
        assert_eq!(action.endpoint_actions.action_id, "action-1");
    }

    #[test]
    fn nested_paths_merge_independently() {
        let mut action = sample_action();
        EndpointActionOverrides::new()
            .with_action_id("action-2")
            .with_user_id("responder")
            .apply(&mut action);

        assert_eq!(action.endpoint_actions.action_id, "action-2");
        assert_eq!(action.user.id, "responder");
        assert_eq!(action.agent.id, vec!["agent-a".to_string()]);
    }

    #[test]
    fn error_override_attaches() {
        let mut action = sample_action();
        EndpointActionOverrides::new()
            .with_error(ActionError::new("delivery failed").with_code("410"))
            .apply(&mut action);

        let error = action.error.unwrap();
        assert_eq!(error.message, "delivery failed");
        assert_eq!(error.code.as_deref(), Some("410"));
    }

    #[test]
    fn action_serializes_with_wire_field_names() {
        let json = serde_json::to_value(sample_action()).unwrap();
        assert!(json.get("@timestamp").is_some());
        assert!(json.get("EndpointActions").is_some());
        assert_eq!(json["EndpointActions"]["type"], "INPUT_ACTION");
        assert_eq!(json["EndpointActions"]["input_type"], "endpoint");
        assert_eq!(json["EndpointActions"]["data"]["command"], "isolate");
        // absent error is omitted entirely
        assert!(json.get("error").is_none());
    }
}
