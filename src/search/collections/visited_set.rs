use ahash::{HashSet, HashSetExt};

use crate::graphs::NodeId;

/// Nodes whose distance from the start is final.
#[derive(Debug, Clone, Default)]
pub struct VisitedSet {
    visited: HashSet<NodeId>,
}

impl VisitedSet {
    pub fn new() -> Self {
        VisitedSet {
            visited: HashSet::new(),
        }
    }

    /// Marks `node` as visited. Returns whether it already was.
    pub fn visit(&mut self, node: NodeId) -> bool {
        !self.visited.insert(node)
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.visited.contains(&node)
    }
}
