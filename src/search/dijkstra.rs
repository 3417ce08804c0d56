use std::time::Instant;

use tracing::{debug, trace};

use super::{
    collections::{
        distance_table::DistanceTable,
        frontier::{new_frontier, Frontier},
        visited_set::VisitedSet,
    },
    config::SearchConfig,
    path::Path,
    PathFinding,
};
use crate::{
    error::{Error, Result},
    graphs::{GraphView, NodeId, Weight},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Nodes whose distance was finalized.
    pub finalized: usize,
    /// Successful distance updates.
    pub relaxations: usize,
}

/// Everything a single query leaves behind.
#[derive(Debug)]
pub struct SearchOutcome {
    pub table: DistanceTable,
    pub reached: bool,
    pub statistics: SearchStatistics,
}

impl SearchOutcome {
    pub fn distance(&self, end: NodeId) -> Option<Weight> {
        if self.reached {
            self.table.get_distance(end)
        } else {
            None
        }
    }

    pub fn path(&self, end: NodeId) -> Option<Path> {
        if self.reached {
            self.table.get_path(end)
        } else {
            None
        }
    }
}

/// Single pair shortest path search over an undirected, non-negatively
/// weighted `GraphView`.
///
/// All search state lives in the call, so one engine can answer queries from
/// several threads at once.
pub struct ShortestPathEngine<'a> {
    graph: &'a dyn GraphView,
    config: SearchConfig,
}

impl<'a> ShortestPathEngine<'a> {
    pub fn new(graph: &'a dyn GraphView) -> Self {
        Self::with_config(graph, SearchConfig::default())
    }

    pub fn with_config(graph: &'a dyn GraphView, config: SearchConfig) -> Self {
        ShortestPathEngine { graph, config }
    }

    /// Distance between `start` and `end`, `None` if they are not connected.
    #[tracing::instrument(level = "debug", skip(self), fields(frontier = ?self.config.frontier))]
    pub fn distance(&self, start: NodeId, end: NodeId) -> Result<Option<Weight>> {
        Ok(self.search(start, end)?.distance(end))
    }

    /// Like `distance`, but also returns the nodes along one shortest path.
    #[tracing::instrument(level = "debug", skip(self), fields(frontier = ?self.config.frontier))]
    pub fn path(&self, start: NodeId, end: NodeId) -> Result<Option<Path>> {
        Ok(self.search(start, end)?.path(end))
    }

    /// Runs the search until `end` is finalized or the frontier is exhausted.
    pub fn search(&self, start: NodeId, end: NodeId) -> Result<SearchOutcome> {
        for node in [start, end] {
            if !self.graph.contains_node(node) {
                return Err(Error::UnknownNode(node));
            }
        }

        let timeout = self.config.timeout();
        let started = Instant::now();

        let mut table = DistanceTable::new();
        let mut visited = VisitedSet::new();
        let mut frontier: Box<dyn Frontier> = new_frontier(self.config.frontier);
        let mut statistics = SearchStatistics::default();

        table.set_start(start);
        let mut current = start;
        let mut current_distance: Weight = 0.0;

        loop {
            if current == end {
                debug!(
                    distance = current_distance,
                    finalized = statistics.finalized,
                    relaxations = statistics.relaxations,
                    "reached end node"
                );
                return Ok(SearchOutcome {
                    table,
                    reached: true,
                    statistics,
                });
            }

            if let Some(limit) = timeout {
                if started.elapsed() >= limit {
                    return Err(Error::DeadlineExceeded {
                        limit,
                        finalized: statistics.finalized,
                    });
                }
            }

            for (weight, neighbor) in self.graph.neighbors(current) {
                if visited.contains(neighbor) {
                    continue;
                }

                let candidate = current_distance + weight;
                if !candidate.is_finite() {
                    trace!(node = neighbor, via = current, "distance overflow, skipped");
                    continue;
                }
                if table.relax(neighbor, candidate, current) {
                    trace!(node = neighbor, distance = candidate, via = current, "relaxed");
                    frontier.insert(neighbor, candidate);
                    statistics.relaxations += 1;
                }
            }

            let already_visited = visited.visit(current);
            debug_assert!(!already_visited, "node {} finalized twice", current);
            statistics.finalized += 1;
            trace!(node = current, distance = current_distance, "finalized");

            match frontier.pop() {
                Some((node, distance)) => {
                    current = node;
                    current_distance = distance;
                }
                None => {
                    debug!(
                        finalized = statistics.finalized,
                        relaxations = statistics.relaxations,
                        "end node unreachable"
                    );
                    return Ok(SearchOutcome {
                        table,
                        reached: false,
                        statistics,
                    });
                }
            }
        }
    }
}

impl PathFinding for ShortestPathEngine<'_> {
    fn shortest_path(&self, start: NodeId, end: NodeId) -> Result<Option<Path>> {
        self.path(start, end)
    }

    fn shortest_path_distance(&self, start: NodeId, end: NodeId) -> Result<Option<Weight>> {
        self.distance(start, end)
    }
}
