use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{
    in_memory_graph::{GraphSnapshot, InMemoryGraph, Relationship},
    NodeId,
};
use crate::error::{Error, Result};

/// Property name under which edge-list weights are stored.
pub const EDGE_LIST_WEIGHT_PROPERTY: &str = "weight";

#[derive(Debug, ValueEnum, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileType {
    /// JSON graph snapshot with nodes and relationships.
    Json,
    /// Whitespace separated `start end [weight]` lines.
    EdgeList,
}

pub struct GraphFactory {}

impl GraphFactory {
    pub fn from_file(path: &Path, file_type: FileType) -> Result<InMemoryGraph> {
        let reader = BufReader::new(File::open(path)?);
        let graph = match file_type {
            FileType::Json => Self::from_json_reader(reader)?,
            FileType::EdgeList => Self::from_edge_list_reader(reader)?,
        };
        info!(
            path = %path.display(),
            nodes = graph.number_of_nodes(),
            relationships = graph.number_of_relationships(),
            "graph loaded"
        );
        Ok(graph)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<InMemoryGraph> {
        let snapshot: GraphSnapshot = serde_json::from_reader(reader)?;
        InMemoryGraph::from_snapshot(snapshot)
    }

    /// Reads an edge list. Lines starting with `#` and blank lines are
    /// skipped, nodes are created on first mention.
    pub fn from_edge_list_reader<R: BufRead>(reader: R) -> Result<InMemoryGraph> {
        let mut graph = InMemoryGraph::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut values = line.split_whitespace();
            let start = parse_node(values.next(), line_number, "start")?;
            let end = parse_node(values.next(), line_number, "end")?;
            let weight = values
                .next()
                .map(|value| {
                    value.parse::<f64>().map_err(|_| Error::Parse {
                        line: line_number,
                        reason: format!("unable to parse weight '{}'", value),
                    })
                })
                .transpose()?;
            if values.next().is_some() {
                return Err(Error::Parse {
                    line: line_number,
                    reason: "too many values".to_string(),
                });
            }

            graph.ensure_node(start);
            graph.ensure_node(end);
            let mut relationship = Relationship::new(start, end, "LINKED_TO");
            if let Some(weight) = weight {
                relationship = relationship.with_property(EDGE_LIST_WEIGHT_PROPERTY, weight);
            }
            graph.add_relationship(relationship)?;
        }

        Ok(graph)
    }
}

fn parse_node(value: Option<&str>, line: usize, name: &str) -> Result<NodeId> {
    let value = value.ok_or_else(|| Error::Parse {
        line,
        reason: format!("no {} node found", name),
    })?;
    value.parse().map_err(|_| Error::Parse {
        line,
        reason: format!("unable to parse {} node '{}'", name, value),
    })
}
