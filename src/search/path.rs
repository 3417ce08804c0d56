use serde::{Deserialize, Serialize};

use crate::graphs::{NodeId, Weight};

/// A shortest path: the nodes from start to end and its total weight.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub nodes: Vec<NodeId>,
    pub distance: Weight,
}

/// Represents a request for the distance between two nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathRequest {
    pub start: NodeId,
    pub end: NodeId,
}

impl ShortestPathRequest {
    pub fn new(start: NodeId, end: NodeId) -> ShortestPathRequest {
        ShortestPathRequest { start, end }
    }
}

/// Answer to a `ShortestPathRequest`. `distance` is `None` when the end node
/// is unreachable or the query failed, in which case `error` is set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShortestPathAnswer {
    pub start: NodeId,
    pub end: NodeId,
    pub distance: Option<Weight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
