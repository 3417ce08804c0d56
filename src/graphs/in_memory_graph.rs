use ahash::{HashMap, HashMapExt};
use serde::{Deserialize, Serialize};

use super::{
    property::{Properties, PropertyValue},
    NodeId, PropertyGraph, RelationshipId,
};
use crate::error::{Error, Result};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub properties: Properties,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Relationship {
    pub start: NodeId,
    pub end: NodeId,
    #[serde(rename = "type", default)]
    pub rel_type: String,
    #[serde(default)]
    pub properties: Properties,
}

impl Relationship {
    pub fn new(start: NodeId, end: NodeId, rel_type: &str) -> Relationship {
        Relationship {
            start,
            end,
            rel_type: rel_type.to_string(),
            properties: Properties::new(),
        }
    }

    pub fn with_property(mut self, key: &str, value: impl Into<PropertyValue>) -> Relationship {
        self.properties.insert(key.to_string(), value.into());
        self
    }
}

/// Serializable form of a graph: plain node and relationship lists.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<Node>,
    pub relationships: Vec<Relationship>,
}

/// A property graph held in memory with an index from each node to its
/// incident relationships.
#[derive(Clone, Debug, Default)]
pub struct InMemoryGraph {
    nodes: HashMap<NodeId, Node>,
    relationships: Vec<Relationship>,
    incident: HashMap<NodeId, Vec<RelationshipId>>,
}

impl InMemoryGraph {
    pub fn new() -> Self {
        InMemoryGraph::default()
    }

    pub fn from_snapshot(snapshot: GraphSnapshot) -> Result<InMemoryGraph> {
        let mut graph = InMemoryGraph {
            nodes: HashMap::with_capacity(snapshot.nodes.len()),
            relationships: Vec::with_capacity(snapshot.relationships.len()),
            incident: HashMap::with_capacity(snapshot.nodes.len()),
        };

        for node in snapshot.nodes {
            graph.add_node(node)?;
        }
        for relationship in snapshot.relationships {
            graph.add_relationship(relationship)?;
        }

        Ok(graph)
    }

    pub fn add_node(&mut self, node: Node) -> Result<()> {
        if self.nodes.contains_key(&node.id) {
            return Err(Error::DuplicateNode(node.id));
        }
        self.incident.insert(node.id, Vec::new());
        self.nodes.insert(node.id, node);
        Ok(())
    }

    /// Adds a node with only an id, unless it already exists.
    pub fn ensure_node(&mut self, id: NodeId) {
        if !self.nodes.contains_key(&id) {
            self.incident.insert(id, Vec::new());
            self.nodes.insert(
                id,
                Node {
                    id,
                    ..Node::default()
                },
            );
        }
    }

    pub fn add_relationship(&mut self, relationship: Relationship) -> Result<RelationshipId> {
        let id = self.relationships.len();
        for node in [relationship.start, relationship.end] {
            if !self.nodes.contains_key(&node) {
                return Err(Error::DanglingRelationship {
                    relationship: id,
                    node,
                });
            }
        }

        if let Some(incident) = self.incident.get_mut(&relationship.start) {
            incident.push(id);
        }
        if relationship.end != relationship.start {
            if let Some(incident) = self.incident.get_mut(&relationship.end) {
                incident.push(id);
            }
        }
        self.relationships.push(relationship);

        Ok(id)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn relationship(&self, id: RelationshipId) -> Option<&Relationship> {
        self.relationships.get(id)
    }

    pub fn number_of_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn number_of_relationships(&self) -> usize {
        self.relationships.len()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }
}

impl PropertyGraph for InMemoryGraph {
    fn contains_node(&self, node: NodeId) -> bool {
        self.nodes.contains_key(&node)
    }

    fn relationships(&self, node: NodeId) -> Box<dyn Iterator<Item = RelationshipId> + Send + '_> {
        match self.incident.get(&node) {
            Some(incident) => Box::new(incident.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn other_node(&self, relationship: RelationshipId, node: NodeId) -> Option<NodeId> {
        let relationship = self.relationships.get(relationship)?;
        if relationship.start == node {
            Some(relationship.end)
        } else if relationship.end == node {
            Some(relationship.start)
        } else {
            None
        }
    }

    fn relationship_property(
        &self,
        relationship: RelationshipId,
        key: &str,
    ) -> Option<&PropertyValue> {
        self.relationships.get(relationship)?.properties.get(key)
    }
}
