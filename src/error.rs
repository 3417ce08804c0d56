//! Error types for graph loading and shortest path queries.
//!
//! An unreachable target is not an error: queries report it as `Ok(None)`.

use std::time::Duration;

use thiserror::Error;

use crate::graphs::{NodeId, RelationshipId};

#[derive(Error, Debug)]
pub enum Error {
    /// Start or end node is not part of the graph.
    #[error("unknown node: {0}")]
    UnknownNode(NodeId),

    #[error("search exceeded its deadline of {limit:?} after finalizing {finalized} nodes")]
    DeadlineExceeded { limit: Duration, finalized: usize },

    #[error("duplicate node id: {0}")]
    DuplicateNode(NodeId),

    #[error("relationship {relationship} references unknown node {node}")]
    DanglingRelationship {
        relationship: RelationshipId,
        node: NodeId,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
