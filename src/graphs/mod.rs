pub mod graph_factory;
pub mod graph_functions;
pub mod in_memory_graph;
pub mod property;
pub mod weighted_view;

use property::PropertyValue;

pub type NodeId = u64;
pub type RelationshipId = usize;
pub type Weight = f64;

/// Weight of a relationship that lacks a usable weight property.
pub const DEFAULT_WEIGHT: Weight = 1.0;

/// Read access to a property graph, as provided by the storage engine.
///
/// Relationships are stored with a direction but the search only ever asks
/// for them irrespective of it.
pub trait PropertyGraph: Send + Sync {
    fn contains_node(&self, node: NodeId) -> bool;

    /// All relationships touching `node`, outgoing and incoming. A self-loop
    /// is reported once.
    fn relationships(&self, node: NodeId) -> Box<dyn Iterator<Item = RelationshipId> + Send + '_>;

    /// The endpoint of `relationship` opposite to `node`, or `None` if `node`
    /// is not an endpoint of it.
    fn other_node(&self, relationship: RelationshipId, node: NodeId) -> Option<NodeId>;

    fn relationship_property(
        &self,
        relationship: RelationshipId,
        key: &str,
    ) -> Option<&PropertyValue>;
}

/// The graph as seen by the shortest path search: nodes and undirected,
/// weighted adjacency.
pub trait GraphView: Send + Sync {
    fn contains_node(&self, node: NodeId) -> bool;

    /// Every `(weight, neighbor)` pair of `node`, one per incident
    /// relationship.
    fn neighbors(&self, node: NodeId) -> Box<dyn Iterator<Item = (Weight, NodeId)> + Send + '_>;
}
