//! Search-hit envelope and index naming
//!
//! Fixtures simulating search/index lookups wrap records in [`SearchHit`],
//! the envelope shape returned by the index: storage location, document id,
//! relevance score, and the document itself.

use serde::{Deserialize, Serialize};

/// Index that action documents are written to
pub const ACTIONS_INDEX: &str = ".logs-endpoint.actions-default";

/// Data stream that action response documents are written to
pub const ACTION_RESPONSES_DATA_STREAM: &str = ".logs-endpoint.action.responses";

/// Name of the backing index behind a data stream, for the given namespace
#[inline]
#[must_use]
pub fn backing_index(stream: &str, namespace: &str) -> String {
    format!(".ds-{stream}-{namespace}")
}

/// A single document as returned by a search against the index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit<T> {
    /// Backing index the document lives in
    #[serde(rename = "_index")]
    pub index: String,
    /// Document identifier
    #[serde(rename = "_id")]
    pub id: String,
    /// Relevance score
    #[serde(rename = "_score")]
    pub score: f64,
    /// The document itself
    #[serde(rename = "_source")]
    pub source: T,
}
