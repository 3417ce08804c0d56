use path::Path;

use crate::{
    error::Result,
    graphs::{weighted_view::WeightedView, NodeId, PropertyGraph, Weight},
};

pub mod batch;
pub mod collections;
pub mod config;
pub mod dijkstra;
pub mod path;

pub trait PathFinding: Send + Sync {
    fn shortest_path(&self, start: NodeId, end: NodeId) -> Result<Option<Path>>;

    fn shortest_path_distance(&self, start: NodeId, end: NodeId) -> Result<Option<Weight>>;
}

/// Length of the weighted shortest path between two nodes of `graph`,
/// ignoring relationship direction and reading weights from
/// `weight_property`. `Ok(None)` means there is no path.
pub fn shortest_path_length(
    graph: &dyn PropertyGraph,
    start: NodeId,
    end: NodeId,
    weight_property: &str,
) -> Result<Option<Weight>> {
    let view = WeightedView::new(graph, weight_property);
    dijkstra::ShortestPathEngine::new(&view).distance(start, end)
}
