//! Endpoint action response records
//!
//! [`EndpointActionResponse`] is the document the endpoint writes back once
//! it has carried out (or failed to carry out) an action. The `action_id`
//! correlates a response with its originating [`crate::EndpointAction`];
//! callers simulating a full exchange pass matching overrides themselves.

use crate::action::{ActionData, ActionDataOverrides, ActionError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An endpoint's reply to an action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointActionResponse {
    /// Moment the response was recorded
    #[serde(rename = "@timestamp")]
    pub timestamp: DateTime<Utc>,
    /// Responding agent
    pub agent: ResponseAgent,
    /// Response payload
    #[serde(rename = "EndpointActions")]
    pub endpoint_actions: ResponseFields,
    /// Execution error, absent on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ActionError>,
}

/// Responding agent identity; a response always comes from a single agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseAgent {
    /// Agent identifier
    pub id: String,
}

/// The response payload under `EndpointActions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseFields {
    /// Identifier of the action this responds to
    pub action_id: String,
    /// Moment execution finished; mirrors the record timestamp
    pub completed_at: DateTime<Utc>,
    /// Echo of the command that was executed
    pub data: ActionData,
    /// Moment execution began; never later than completion
    pub started_at: DateTime<Utc>,
}

/// Partial [`EndpointActionResponse`]
#[derive(Debug, Clone, Default)]
pub struct EndpointActionResponseOverrides {
    /// Replacement timestamp; the generated `completed_at` mirrors it
    pub timestamp: Option<DateTime<Utc>>,
    /// Replacement agent id
    pub agent_id: Option<String>,
    /// Nested overrides for the response payload
    pub endpoint_actions: Option<ResponseFieldsOverrides>,
    /// Attach an execution error
    pub error: Option<ActionError>,
}

/// Partial [`ResponseFields`]
#[derive(Debug, Clone, Default)]
pub struct ResponseFieldsOverrides {
    pub action_id: Option<String>,
    pub completed_at: Option<DateTime<Utc>>,
    pub started_at: Option<DateTime<Utc>>,
    pub data: Option<ActionDataOverrides>,
}

impl EndpointActionResponseOverrides {
    /// Empty overrides
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

    /// With a fixed agent id
    #[inline]
    #[must_use]
    pub fn with_agent_id(mut self, id: impl Into<String>) -> Self {
        self.agent_id = Some(id.into());
        self
    }

    /// With a fixed action id, for correlating with an action record
    #[must_use]
    pub fn with_action_id(mut self, id: impl Into<String>) -> Self {
        self.fields_mut().action_id = Some(id.into());
        self
    }

    /// With a fixed completion time
    #[must_use]
    pub fn with_completed_at(mut self, completed_at: DateTime<Utc>) -> Self {
        self.fields_mut().completed_at = Some(completed_at);
        self
    }

    /// With a fixed start time
    #[must_use]
    pub fn with_started_at(mut self, started_at: DateTime<Utc>) -> Self {
        self.fields_mut().started_at = Some(started_at);
        self
    }

    /// With a fixed echoed command
    #[must_use]
    pub fn with_command(mut self, command: crate::IsolationCommand) -> Self {
        self.fields_mut()
            .data
            .get_or_insert_with(Default::default)
            .command = Some(command);
        self
    }

    /// With an execution error
    #[inline]
    #[must_use]
    pub fn with_error(mut self, error: ActionError) -> Self {
        self.error = Some(error);
        self
    }

    /// Merge into `response`, set fields winning at every nesting level
    pub fn apply(self, response: &mut EndpointActionResponse) {
        if let Some(timestamp) = self.timestamp {
            response.timestamp = timestamp;
        }
        if let Some(agent_id) = self.agent_id {
            response.agent.id = agent_id;
        }
        if let Some(fields) = self.endpoint_actions {
            fields.apply(&mut response.endpoint_actions);
        }
        if let Some(error) = self.error {
            response.error = Some(error);
        }
    }

    fn fields_mut(&mut self) -> &mut ResponseFieldsOverrides {
        self.endpoint_actions.get_or_insert_with(Default::default)
    }
}

impl ResponseFieldsOverrides {
    /// Merge into `fields`
    pub fn apply(self, fields: &mut ResponseFields) {
        if let Some(action_id) = self.action_id {
            fields.action_id = action_id;
        }
        if let Some(completed_at) = self.completed_at {
            fields.completed_at = completed_at;
        }
        if let Some(started_at) = self.started_at {
            fields.started_at = started_at;
        }
        if let Some(data) = self.data {
            data.apply(&mut fields.data);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IsolationCommand;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn sample_response() -> EndpointActionResponse {
        let completed = Utc.with_ymd_and_hms(2023, 4, 20, 11, 0, 0).unwrap();
        EndpointActionResponse {
            timestamp: completed,
            agent: ResponseAgent {
                id: "agent-a".to_string(),
            },
            endpoint_actions: ResponseFields {
                action_id: "action-1".to_string(),
                completed_at: completed,
                data: ActionData {
                    command: IsolationCommand::Isolate,
                    comment: String::new(),
                },
                started_at: Utc.with_ymd_and_hms(2023, 4, 20, 10, 45, 0).unwrap(),
            },
            error: None,
        }
    }

    #[test]
    fn correlation_override_sets_action_id_only() {
        let mut response = sample_response();
        EndpointActionResponseOverrides::new()
            .with_action_id("action-9")
            .apply(&mut response);

        assert_eq!(response.endpoint_actions.action_id, "action-9");
        assert_eq!(response.agent.id, "agent-a");
        assert_eq!(
            response.endpoint_actions.data.command,
            IsolationCommand::Isolate
        );
    }

    #[test]
    fn response_serializes_with_wire_field_names() {
        let json = serde_json::to_value(sample_response()).unwrap();
        assert!(json.get("@timestamp").is_some());
        assert!(json["EndpointActions"].get("completed_at").is_some());
        assert!(json["EndpointActions"].get("started_at").is_some());
        assert_eq!(json["agent"]["id"], "agent-a");
    }

    #[test]
    fn error_override_attaches() {
        let mut response = sample_response();
        EndpointActionResponseOverrides::new()
            .with_error(ActionError::new("isolation rejected"))
            .apply(&mut response);

        assert_eq!(response.error.unwrap().message, "isolation rejected");
    }
}
