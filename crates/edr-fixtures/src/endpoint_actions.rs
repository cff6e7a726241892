//! Endpoint action and response fixture generation
//!
//! [`EndpointActionGenerator`] builds fully-populated action and response
//! documents, then merges caller overrides on top. Overrides win at every
//! nesting level; fields the caller leaves unset keep their generated
//! defaults.

use crate::base::BaseGenerator;
use chrono::Utc;
use edr_types::{
    backing_index, ActionAgent, ActionData, ActionFields, ActionInputType, ActionType,
    ActionUser, ActivityLogEntry, ActivityLogEntryType, ActivityLogItem,
    ActivityLogResponseOverrides, EndpointAction, EndpointActionOverrides,
    EndpointActionResponse, EndpointActionResponseOverrides, IsolationCommand, ResponseAgent,
    ResponseFields, SearchHit, ACTIONS_INDEX, ACTION_RESPONSES_DATA_STREAM,
};

/// Namespace suffix used on generated backing-index names
const NAMESPACE: &str = "default";

/// Length of generated operator comments
const COMMENT_LEN: usize = 15;

/// Generator for endpoint action fixtures
///
/// Owns its random source; two generators built with the same seed produce
/// identical records.
#[derive(Debug)]
pub struct EndpointActionGenerator {
    base: BaseGenerator,
}

impl EndpointActionGenerator {
    /// Create a generator seeded from system entropy
    #[must_use]
    pub fn new() -> Self {
        Self {
            base: BaseGenerator::new(),
        }
    }

    /// Create a generator with a fixed seed for reproducible fixtures
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            base: BaseGenerator::with_seed(seed),
        }
    }

    /// Create a generator over an existing random source
    #[must_use]
    pub fn from_base(base: BaseGenerator) -> Self {
        Self { base }
    }

    /// Generate an action request (isolate or unisolate)
    ///
    /// The timestamp comes from the overrides when set, otherwise from a
    /// bounded random past date; the generated expiration is always
    /// strictly later than that timestamp.
    pub fn generate(&mut self, overrides: EndpointActionOverrides) -> EndpointAction {
        let timestamp = overrides
            .timestamp
            .unwrap_or_else(|| self.base.past_date());

        let mut action = EndpointAction {
            timestamp,
            agent: ActionAgent {
                id: vec![self.base.uuid().to_string()],
            },
            endpoint_actions: ActionFields {
                action_id: self.base.uuid().to_string(),
                expiration: self.base.future_date(timestamp),
                action_type: ActionType::InputAction,
                input_type: ActionInputType::Endpoint,
                data: ActionData {
                    command: self.random_command(),
                    comment: self.base.string(COMMENT_LEN),
                },
            },
            error: None,
            user: ActionUser {
                id: self.base.user(),
            },
        };
        overrides.apply(&mut action);
        tracing::trace!(
            action_id = %action.endpoint_actions.action_id,
            command = %action.endpoint_actions.data.command,
            "generated endpoint action"
        );
        action
    }

    /// Generate an action wrapped in a search-hit envelope
    pub fn generate_action_search_hit(
        &mut self,
        overrides: EndpointActionOverrides,
    ) -> SearchHit<EndpointAction> {
        let action = self.generate(overrides);
        let index = backing_index(ACTIONS_INDEX, NAMESPACE);
        self.base.search_hit(index, action)
    }

    /// Generate an action with the command forced to isolate
    ///
    /// Caller overrides are applied afterwards and still win, including an
    /// explicit `command` override.
    pub fn generate_isolate(&mut self, overrides: EndpointActionOverrides) -> EndpointAction {
        let mut action =
            self.generate(EndpointActionOverrides::new().with_command(IsolationCommand::Isolate));
        overrides.apply(&mut action);
        action
    }

    /// Generate an action with the command forced to unisolate
    pub fn generate_unisolate(&mut self, overrides: EndpointActionOverrides) -> EndpointAction {
        let mut action = self
            .generate(EndpointActionOverrides::new().with_command(IsolationCommand::Unisolate));
        overrides.apply(&mut action);
        action
    }

    /// Generate an action response
    ///
    /// The timestamp defaults to now; `completed_at` mirrors it and
    /// `started_at` falls strictly before it.
    pub fn generate_response(
        &mut self,
        overrides: EndpointActionResponseOverrides,
    ) -> EndpointActionResponse {
        let timestamp = overrides.timestamp.unwrap_or_else(Utc::now);

        let mut response = EndpointActionResponse {
            timestamp,
            agent: ResponseAgent {
                id: self.base.uuid().to_string(),
            },
            endpoint_actions: ResponseFields {
                action_id: self.base.uuid().to_string(),
                completed_at: timestamp,
                data: ActionData {
                    command: self.random_command(),
                    comment: String::new(),
                },
                started_at: self.base.past_date_before(timestamp),
            },
            error: None,
        };
        overrides.apply(&mut response);
        tracing::trace!(
            action_id = %response.endpoint_actions.action_id,
            "generated endpoint action response"
        );
        response
    }

    /// Generate a response wrapped in a search-hit envelope
    pub fn generate_response_search_hit(
        &mut self,
        overrides: EndpointActionResponseOverrides,
    ) -> SearchHit<EndpointActionResponse> {
        let response = self.generate_response(overrides);
        let index = backing_index(ACTION_RESPONSES_DATA_STREAM, NAMESPACE);
        self.base.search_hit(index, response)
    }

    /// Generate a response wrapped in an activity log entry
    pub fn generate_activity_log_response(
        &mut self,
        overrides: ActivityLogResponseOverrides,
    ) -> ActivityLogEntry<EndpointActionResponse> {
        let mut entry = ActivityLogEntry {
            entry_type: ActivityLogEntryType::Response,
            item: ActivityLogItem {
                id: self.base.uuid().to_string(),
                data: self.generate_response(EndpointActionResponseOverrides::new()),
            },
        };
        overrides.apply(&mut entry);
        entry
    }

    /// Uniform float in [0, 1) from the generator's stream
    #[inline]
    pub fn random_float(&mut self) -> f64 {
        self.base.random()
    }

    /// Uniform integer in [0, max) from the generator's stream
    #[inline]
    pub fn random_n(&mut self, max: u64) -> u64 {
        self.base.random_n(max)
    }

    fn random_command(&mut self) -> IsolationCommand {
        *self.base.choose(&IsolationCommand::ALL)
    }
}

impl Default for EndpointActionGenerator {
    fn default() -> Self {
        Self::new()
    }
}
