use tracing::trace;

use super::{
    property::PropertyValue, GraphView, NodeId, PropertyGraph, RelationshipId, Weight,
    DEFAULT_WEIGHT,
};

/// Resolves the weight of a relationship from its (possibly absent) weight
/// property. Missing and non-numeric values weigh `DEFAULT_WEIGHT`.
pub fn resolve_weight(value: Option<&PropertyValue>) -> Weight {
    match value {
        None => DEFAULT_WEIGHT,
        Some(value) => value.as_weight().unwrap_or_else(|| {
            trace!(?value, "non-numeric weight, using default");
            DEFAULT_WEIGHT
        }),
    }
}

/// Undirected, weighted view of a `PropertyGraph`, reading relationship
/// weights from the property named `weight_property`.
pub struct WeightedView<'a, G: PropertyGraph + ?Sized> {
    graph: &'a G,
    weight_property: String,
}

impl<'a, G: PropertyGraph + ?Sized> WeightedView<'a, G> {
    pub fn new(graph: &'a G, weight_property: &str) -> Self {
        WeightedView {
            graph,
            weight_property: weight_property.to_string(),
        }
    }

    pub fn weight(&self, relationship: RelationshipId) -> Weight {
        resolve_weight(
            self.graph
                .relationship_property(relationship, &self.weight_property),
        )
    }
}

impl<'a, G: PropertyGraph + ?Sized> GraphView for WeightedView<'a, G> {
    fn contains_node(&self, node: NodeId) -> bool {
        self.graph.contains_node(node)
    }

    fn neighbors(&self, node: NodeId) -> Box<dyn Iterator<Item = (Weight, NodeId)> + Send + '_> {
        Box::new(self.graph.relationships(node).filter_map(move |relationship| {
            let neighbor = self.graph.other_node(relationship, node)?;
            Some((self.weight(relationship), neighbor))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::{resolve_weight, WeightedView};
    use crate::graphs::{
        in_memory_graph::{InMemoryGraph, Relationship},
        property::PropertyValue,
        GraphView, DEFAULT_WEIGHT,
    };

    #[test]
    fn missing_or_invalid_weight_defaults() {
        assert_eq!(resolve_weight(None), DEFAULT_WEIGHT);
        assert_eq!(
            resolve_weight(Some(&PropertyValue::from("abc"))),
            DEFAULT_WEIGHT
        );
        assert_eq!(resolve_weight(Some(&PropertyValue::Float(4.5))), 4.5);
    }

    #[test]
    fn neighbors_in_both_directions() {
        let mut graph = InMemoryGraph::new();
        for id in 1..=3 {
            graph.ensure_node(id);
        }
        graph
            .add_relationship(Relationship::new(1, 2, "LINKED_TO").with_property("w", 5.0))
            .unwrap();
        graph
            .add_relationship(Relationship::new(3, 1, "LINKED_TO"))
            .unwrap();

        let view = WeightedView::new(&graph, "w");
        let mut neighbors: Vec<_> = view.neighbors(1).collect();
        neighbors.sort_by_key(|&(_, node)| node);

        assert_eq!(neighbors, vec![(5.0, 2), (DEFAULT_WEIGHT, 3)]);
        assert_eq!(view.neighbors(2).collect::<Vec<_>>(), vec![(5.0, 1)]);
        assert!(view.contains_node(3));
        assert!(!view.contains_node(4));
    }
}
