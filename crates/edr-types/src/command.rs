//! Command and action-type discriminants
//!
//! Small closed enums for the fields that carry fixed vocabularies on the
//! wire: the isolation command, the action type tag, and the input type.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Commands an endpoint agent can be asked to carry out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IsolationCommand {
    /// Cut the host off from the network
    Isolate,
    /// Restore normal network access
    Unisolate,
}

impl IsolationCommand {
    /// Every command, in wire order
    pub const ALL: [IsolationCommand; 2] = [IsolationCommand::Isolate, IsolationCommand::Unisolate];

    /// Wire representation of the command
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            IsolationCommand::Isolate => "isolate",
            IsolationCommand::Unisolate => "unisolate",
        }
    }
}

impl Display for IsolationCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IsolationCommand {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "isolate" => Ok(IsolationCommand::Isolate),
            "unisolate" => Ok(IsolationCommand::Unisolate),
            other => Err(ParseCommandError::UnknownCommand(other.to_string())),
        }
    }
}

/// Errors that can occur when parsing command fields
#[derive(Debug, thiserror::Error)]
pub enum ParseCommandError {
    /// Value is not a known isolation command
    #[error("unknown isolation command: {0}")]
    UnknownCommand(String),
}

/// Action type tag carried by every action document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionType {
    /// Action originated from user input
    #[default]
    #[serde(rename = "INPUT_ACTION")]
    InputAction,
}

/// Subsystem an action is addressed to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionInputType {
    /// The endpoint agent itself
    #[default]
    #[serde(rename = "endpoint")]
    Endpoint,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_round_trips_through_str() {
        for command in IsolationCommand::ALL {
            let parsed: IsolationCommand = command.as_str().parse().unwrap();
            assert_eq!(parsed, command);
        }
    }

    #[test]
    fn command_rejects_unknown_value() {
        let result = "shutdown".parse::<IsolationCommand>();
        assert!(matches!(result, Err(ParseCommandError::UnknownCommand(_))));
    }

    #[test]
    fn command_serializes_lowercase() {
        let json = serde_json::to_string(&IsolationCommand::Unisolate).unwrap();
        assert_eq!(json, "\"unisolate\"");
    }

    #[test]
    fn action_type_wire_tag() {
        let json = serde_json::to_string(&ActionType::InputAction).unwrap();
        assert_eq!(json, "\"INPUT_ACTION\"");
        let json = serde_json::to_string(&ActionInputType::Endpoint).unwrap();
        assert_eq!(json, "\"endpoint\"");
    }
}
