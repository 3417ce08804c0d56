use ahash::{HashMap, HashMapExt};

use crate::{
    graphs::{NodeId, Weight},
    search::path::Path,
};

/// Best known distance from the start node, and the predecessor that
/// achieved it, for every node discovered so far. A node without an entry is
/// at infinite distance.
#[derive(Debug, Clone, Default)]
pub struct DistanceTable {
    distances: HashMap<NodeId, Weight>,
    predecessors: HashMap<NodeId, NodeId>,
}

impl DistanceTable {
    pub fn new() -> Self {
        DistanceTable {
            distances: HashMap::new(),
            predecessors: HashMap::new(),
        }
    }

    pub fn get_distance(&self, node: NodeId) -> Option<Weight> {
        self.distances.get(&node).copied()
    }

    pub fn get_predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessors.get(&node).copied()
    }

    /// Records the start node of a search at distance zero.
    pub fn set_start(&mut self, node: NodeId) {
        self.distances.insert(node, 0.0);
        self.predecessors.remove(&node);
    }

    /// Lowers the distance of `node` to `distance` if that is an improvement.
    /// Returns whether the entry changed.
    pub fn relax(&mut self, node: NodeId, distance: Weight, predecessor: NodeId) -> bool {
        match self.distances.get(&node) {
            Some(&current) if distance >= current => false,
            _ => {
                self.distances.insert(node, distance);
                self.predecessors.insert(node, predecessor);
                true
            }
        }
    }

    /// Constructs the path to `target` by tracing back predecessors.
    ///
    /// Returns `None` if `target` was never discovered.
    pub fn get_path(&self, target: NodeId) -> Option<Path> {
        let distance = self.get_distance(target)?;

        let mut nodes = vec![target];
        let mut current = target;
        while let Some(predecessor) = self.get_predecessor(current) {
            current = predecessor;
            nodes.push(current);
        }
        nodes.reverse();

        Some(Path { nodes, distance })
    }
}
