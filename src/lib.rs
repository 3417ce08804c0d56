//! Weighted shortest path queries over property graphs.
//!
//! The search only sees a graph through [`graphs::GraphView`]; storage
//! engines plug in by implementing [`graphs::PropertyGraph`] and wrapping it
//! in a [`graphs::weighted_view::WeightedView`].

use std::path::Path;

use graphs::{
    graph_factory::{FileType, GraphFactory},
    in_memory_graph::InMemoryGraph,
};
use utility::get_progressspinner;

pub mod error;
pub mod graphs;
pub mod logging;
pub mod search;
pub mod utility;

pub use search::shortest_path_length;

pub fn reading_graph(path: &Path, file_type: FileType) -> error::Result<InMemoryGraph> {
    let spinner = get_progressspinner("Reading graph");
    let graph = GraphFactory::from_file(path, file_type);
    spinner.finish_and_clear();
    graph
}
