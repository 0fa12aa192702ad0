//! Relationships between entities.

use serde::Serialize;

/// Cardinality recorded when the source text omits one.
pub const DEFAULT_CARDINALITY: &str = "1:1";

/// A directed, labeled edge from `entity1` to `entity2`.
///
/// Endpoints are names only; they are not checked against the model's
/// entities. Cardinality is free text and never validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Relationship {
    entity1: String,
    entity2: String,
    relation: String,
    cardinality: String,
}

impl Relationship {
    /// Create a relationship. A `None` cardinality becomes [`DEFAULT_CARDINALITY`].
    pub fn new(
        entity1: impl Into<String>,
        entity2: impl Into<String>,
        relation: impl Into<String>,
        cardinality: Option<String>,
    ) -> Self {
        Self {
            entity1: entity1.into(),
            entity2: entity2.into(),
            relation: relation.into(),
            cardinality: cardinality.unwrap_or_else(|| DEFAULT_CARDINALITY.to_string()),
        }
    }

    /// Name of the source entity.
    pub fn entity1(&self) -> &str {
        &self.entity1
    }

    /// Name of the target entity.
    pub fn entity2(&self) -> &str {
        &self.entity2
    }

    pub fn relation(&self) -> &str {
        &self.relation
    }

    pub fn cardinality(&self) -> &str {
        &self.cardinality
    }
}
