//! Strongly-typed node and edge identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a node within a decision graph.
///
/// Identities are assigned by the graph data source (typically UUIDs or
/// slugs); the engine treats them as opaque keys.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(v: &str) -> Self {
        Self(v.to_string())
    }
}

impl From<String> for NodeId {
    fn from(v: String) -> Self {
        Self(v)
    }
}

/// Identifies an edge within a decision graph.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(pub String);

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EdgeId {
    fn from(v: &str) -> Self {
        Self(v.to_string())
    }
}

impl From<String> for EdgeId {
    fn from(v: String) -> Self {
        Self(v)
    }
}
