//! Activity log entries
//!
//! A unified activity feed interleaves actions and responses. Each entry is
//! a tagged wrapper carrying a discriminant, an item identifier, and the
//! wrapped record.

use crate::response::{EndpointActionResponse, EndpointActionResponseOverrides};
use serde::{Deserialize, Serialize};

/// Discriminant tag on an activity log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLogEntryType {
    /// Entry wraps an action record
    Action,
    /// Entry wraps a response record
    Response,
}

/// Identified payload of an activity log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLogItem<T> {
    /// Feed-level identifier of this entry
    pub id: String,
    /// The wrapped record
    pub data: T,
}

/// One entry in the activity feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLogEntry<T> {
    /// What kind of record the entry wraps
    #[serde(rename = "type")]
    pub entry_type: ActivityLogEntryType,
    /// The wrapped record and its feed identifier
    pub item: ActivityLogItem<T>,
}

/// Partial activity log entry wrapping a response record
#[derive(Debug, Clone, Default)]
pub struct ActivityLogResponseOverrides {
    /// Replacement discriminant tag
    pub entry_type: Option<ActivityLogEntryType>,
    /// Replacement feed identifier
    pub item_id: Option<String>,
    /// Nested overrides for the wrapped response
    pub data: Option<EndpointActionResponseOverrides>,
}

impl ActivityLogResponseOverrides {
    /// Empty overrides
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With a fixed feed identifier
    #[inline]
    #[must_use]
    pub fn with_item_id(mut self, id: impl Into<String>) -> Self {
        self.item_id = Some(id.into());
        self
    }

    /// With nested response overrides
    #[inline]
    #[must_use]
    pub fn with_data(mut self, data: EndpointActionResponseOverrides) -> Self {
        self.data = Some(data);
        self
    }

    /// Merge into `entry`, set fields winning at every nesting level
    pub fn apply(self, entry: &mut ActivityLogEntry<EndpointActionResponse>) {
        if let Some(entry_type) = self.entry_type {
            entry.entry_type = entry_type;
        }
        if let Some(item_id) = self.item_id {
            entry.item.id = item_id;
        }
        if let Some(data) = self.data {
            data.apply(&mut entry.item.data);
        }
    }
}
