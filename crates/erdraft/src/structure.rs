//! Renderer-independent node/edge graph built from a [`Model`].
//!
//! [`DiagramGraph::from_model`] is the only place where relationship
//! endpoints are resolved against declared entities. An endpoint that does
//! not name an entity is an error, never a silently dropped edge.

use log::debug;

use erdraft_core::model::Model;

use crate::{export::ExportError, label};

/// Graphviz `rankdir` for every diagram: entities flow left to right.
pub const RANKDIR: &str = "LR";

/// One node per entity, carrying the rendered table label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramNode {
    name: String,
    label: String,
}

impl DiagramNode {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Table markup produced by [`label::render_label`].
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// A directed edge between two nodes, labeled with the relation name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramEdge {
    from: String,
    to: String,
    label: String,
}

impl DiagramEdge {
    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// The node and edge lists handed to a [`Renderer`](crate::export::Renderer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramGraph {
    nodes: Vec<DiagramNode>,
    edges: Vec<DiagramEdge>,
}

impl DiagramGraph {
    /// Build the graph for `model`, laid out left to right.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::UnknownEntity`] for the first relationship
    /// endpoint that names no declared entity.
    pub fn from_model(model: &Model) -> Result<Self, ExportError> {
        let nodes: Vec<DiagramNode> = model
            .entities()
            .map(|entity| DiagramNode {
                name: entity.name().to_string(),
                label: label::render_label(entity),
            })
            .collect();

        let edges = model
            .relationships()
            .iter()
            .map(|relationship| {
                for endpoint in [relationship.entity1(), relationship.entity2()] {
                    if model.entity(endpoint).is_none() {
                        return Err(ExportError::UnknownEntity {
                            name: endpoint.to_string(),
                        });
                    }
                }
                debug!(
                    from = relationship.entity1(),
                    to = relationship.entity2();
                    "Adding relationship edge"
                );
                Ok(DiagramEdge {
                    from: relationship.entity1().to_string(),
                    to: relationship.entity2().to_string(),
                    label: relationship.relation().to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { nodes, edges })
    }

    pub fn nodes(&self) -> &[DiagramNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[DiagramEdge] {
        &self.edges
    }
}

#[cfg(test)]
mod tests {
    use erdraft_core::model::{Attribute, Entity, Relationship};

    use super::*;

    fn hotel_model() -> Model {
        let mut model = Model::new();
        model.insert_entity(Entity::new("Hotel", vec![Attribute::primary("id")]));
        model.insert_entity(Entity::new("Room", vec![Attribute::primary("id")]));
        model.push_relationship(Relationship::new("Hotel", "Room", "has", Some("1:N".into())));
        model
    }

    #[test]
    fn test_graph_mirrors_model() {
        let graph = DiagramGraph::from_model(&hotel_model()).unwrap();

        assert_eq!(graph.nodes().len(), 2);
        assert_eq!(graph.nodes()[0].name(), "Hotel");
        assert!(graph.nodes()[0].label().starts_with("<TABLE"));
        assert_eq!(graph.edges().len(), 1);
        assert_eq!(graph.edges()[0].from(), "Hotel");
        assert_eq!(graph.edges()[0].to(), "Room");
        assert_eq!(graph.edges()[0].label(), "has");
    }

    #[test]
    fn test_unknown_target_is_an_error() {
        let mut model = hotel_model();
        model.push_relationship(Relationship::new("Hotel", "Spa", "offers", None));

        let err = DiagramGraph::from_model(&model).unwrap_err();
        assert!(matches!(err, ExportError::UnknownEntity { name } if name == "Spa"));
    }

    #[test]
    fn test_unknown_source_is_an_error() {
        let mut model = hotel_model();
        model.push_relationship(Relationship::new("Guest", "Room", "books", None));

        let err = DiagramGraph::from_model(&model).unwrap_err();
        assert!(matches!(err, ExportError::UnknownEntity { name } if name == "Guest"));
    }
}
