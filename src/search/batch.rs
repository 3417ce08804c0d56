use indicatif::ParallelProgressIterator;
use rayon::prelude::*;

use super::{
    config::SearchConfig,
    dijkstra::ShortestPathEngine,
    path::{ShortestPathAnswer, ShortestPathRequest},
};
use crate::{graphs::GraphView, utility::get_progressbar};

/// Answers all `requests` in parallel. Answers are in request order; a failed
/// query carries its error message instead of a distance.
pub fn distances_parallel(
    graph: &dyn GraphView,
    requests: &[ShortestPathRequest],
    config: &SearchConfig,
    show_progress: bool,
) -> Vec<ShortestPathAnswer> {
    let engine = ShortestPathEngine::with_config(graph, config.clone());
    let answer = |request: &ShortestPathRequest| answer_request(&engine, request);

    if show_progress {
        requests
            .par_iter()
            .progress_with(get_progressbar("answering queries", requests.len() as u64))
            .map(answer)
            .collect()
    } else {
        requests.par_iter().map(answer).collect()
    }
}

pub fn answer_request(
    engine: &ShortestPathEngine,
    request: &ShortestPathRequest,
) -> ShortestPathAnswer {
    let (distance, error) = match engine.distance(request.start, request.end) {
        Ok(distance) => (distance, None),
        Err(error) => (None, Some(error.to_string())),
    };

    ShortestPathAnswer {
        start: request.start,
        end: request.end,
        distance,
        error,
    }
}
