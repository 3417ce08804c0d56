use itertools::Itertools;
use rand::prelude::*;

use super::{
    in_memory_graph::{GraphSnapshot, InMemoryGraph, Node, Relationship},
    GraphView, NodeId, Weight,
};
use crate::{
    error::{Error, Result},
    search::path::{Path, ShortestPathRequest},
};

/// Tolerance used when comparing summed float weights.
pub const WEIGHT_EPSILON: Weight = 1e-9;

/// Generates a graph with nodes `0..number_of_nodes` and
/// `number_of_relationships` random relationships. Weights are drawn from
/// `[0, max_weight)` and stored under `weight_property`, except for a share of
/// `missing_weight_ratio` relationships which get no weight at all.
///
/// `max_weight` must be finite and non-negative, `missing_weight_ratio` must
/// lie in `[0, 1]`.
pub fn random_graph<R: Rng>(
    rng: &mut R,
    number_of_nodes: u64,
    number_of_relationships: usize,
    max_weight: Weight,
    missing_weight_ratio: f64,
    weight_property: &str,
) -> Result<GraphSnapshot> {
    if !max_weight.is_finite() || max_weight < 0.0 {
        return Err(Error::InvalidArgument(format!(
            "max weight must be finite and non-negative, got {}",
            max_weight
        )));
    }
    if !(0.0..=1.0).contains(&missing_weight_ratio) {
        return Err(Error::InvalidArgument(format!(
            "missing weight ratio must be between 0 and 1, got {}",
            missing_weight_ratio
        )));
    }

    let nodes = (0..number_of_nodes)
        .map(|id| Node {
            id,
            labels: vec!["Node".to_string()],
            ..Node::default()
        })
        .collect();

    let relationships = if number_of_nodes == 0 {
        Vec::new()
    } else {
        (0..number_of_relationships)
            .map(|_| {
                let start = rng.gen_range(0..number_of_nodes);
                let end = rng.gen_range(0..number_of_nodes);
                let relationship = Relationship::new(start, end, "LINKED_TO");
                if rng.gen_bool(missing_weight_ratio) {
                    relationship
                } else {
                    let weight = (rng.gen::<f64>() * max_weight * 100.0).round() / 100.0;
                    relationship.with_property(weight_property, weight)
                }
            })
            .collect()
    };

    Ok(GraphSnapshot {
        nodes,
        relationships,
    })
}

/// Draws `number_of_requests` random node pairs from `graph`.
pub fn random_requests<R: Rng>(
    rng: &mut R,
    graph: &InMemoryGraph,
    number_of_requests: usize,
) -> Vec<ShortestPathRequest> {
    let nodes = graph.node_ids().sorted().collect_vec();
    if nodes.is_empty() {
        return Vec::new();
    }

    (0..number_of_requests)
        .filter_map(|_| {
            let start = *nodes.choose(&mut *rng)?;
            let end = *nodes.choose(&mut *rng)?;
            Some(ShortestPathRequest::new(start, end))
        })
        .collect()
}

/// Checks that `path` starts and ends at the requested nodes, that every
/// consecutive pair is connected, and that the cheapest connecting
/// relationships sum up to the path's distance.
pub fn validate_path(
    graph: &dyn GraphView,
    request: &ShortestPathRequest,
    path: &Path,
) -> std::result::Result<(), String> {
    if path.nodes.first() != Some(&request.start) {
        return Err("first node of path is not start of request".to_string());
    }
    if path.nodes.last() != Some(&request.end) {
        return Err("last node of path is not end of request".to_string());
    }

    let mut total: Weight = 0.0;
    for (&tail, &head) in path.nodes.iter().tuple_windows() {
        let weight = cheapest_weight(graph, tail, head)
            .ok_or_else(|| format!("no relationship between {} and {} found", tail, head))?;
        total += weight;
    }

    if (total - path.distance).abs() > WEIGHT_EPSILON * total.max(1.0) {
        return Err(format!(
            "path weight {} does not match distance {}",
            total, path.distance
        ));
    }

    Ok(())
}

fn cheapest_weight(graph: &dyn GraphView, tail: NodeId, head: NodeId) -> Option<Weight> {
    graph
        .neighbors(tail)
        .filter(|&(_, neighbor)| neighbor == head)
        .map(|(weight, _)| weight)
        .min_by(|a, b| a.total_cmp(b))
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::{random_graph, random_requests, validate_path};
    use crate::{
        error::Error,
        graphs::{in_memory_graph::InMemoryGraph, weighted_view::WeightedView},
        search::path::{Path, ShortestPathRequest},
    };

    #[test]
    fn random_graph_is_loadable() {
        let mut rng = StdRng::seed_from_u64(7);
        let snapshot = random_graph(&mut rng, 50, 120, 10.0, 0.2, "w").unwrap();

        assert_eq!(snapshot.nodes.len(), 50);
        assert_eq!(snapshot.relationships.len(), 120);
        assert!(snapshot
            .relationships
            .iter()
            .any(|relationship| !relationship.properties.contains_key("w")));

        let graph = InMemoryGraph::from_snapshot(snapshot).unwrap();
        let requests = random_requests(&mut rng, &graph, 10);
        assert_eq!(requests.len(), 10);
    }

    #[test]
    fn random_graph_rejects_invalid_arguments() {
        let mut rng = StdRng::seed_from_u64(3);

        for ratio in [f64::NAN, -0.1, 1.5] {
            assert!(matches!(
                random_graph(&mut rng, 5, 10, 10.0, ratio, "w"),
                Err(Error::InvalidArgument(_))
            ));
        }
        for max_weight in [-1.0, f64::INFINITY, f64::NAN] {
            assert!(matches!(
                random_graph(&mut rng, 5, 10, max_weight, 0.1, "w"),
                Err(Error::InvalidArgument(_))
            ));
        }

        let snapshot = random_graph(&mut rng, 5, 10, 0.0, 1.0, "w").unwrap();
        assert!(snapshot
            .relationships
            .iter()
            .all(|relationship| relationship.properties.is_empty()));
    }

    #[test]
    fn validate_rejects_broken_paths() {
        let mut rng = StdRng::seed_from_u64(1);
        let snapshot = random_graph(&mut rng, 3, 0, 1.0, 0.0, "w").unwrap();
        let graph = InMemoryGraph::from_snapshot(snapshot).unwrap();
        let view = WeightedView::new(&graph, "w");
        let request = ShortestPathRequest::new(0, 2);

        let disconnected = Path {
            nodes: vec![0, 2],
            distance: 1.0,
        };
        assert!(validate_path(&view, &request, &disconnected).is_err());

        let wrong_end = Path {
            nodes: vec![0, 1],
            distance: 1.0,
        };
        assert!(validate_path(&view, &request, &wrong_end).is_err());
    }
}
