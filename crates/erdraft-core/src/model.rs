//! Entity/relationship graph model.
//!
//! # Pipeline Position
//!
//! ```text
//! Structured Text
//!     ↓ parse
//! Model (these types)
//!     ↓ export
//! PNG / DOT / PPTX
//! ```
//!
//! # Organization
//!
//! - [`entity`] - [`Entity`] and its [`Attribute`]s
//! - [`relationship`] - [`Relationship`] edges between entity names

pub mod entity;
pub mod relationship;

pub use entity::*;
pub use relationship::*;

use indexmap::IndexMap;
use serde::Serialize;

/// The in-memory graph produced by a single parse.
///
/// Entities are keyed by name and kept in first-declaration order.
/// Relationships are kept in declaration order and may reference names that
/// were never declared as entities; resolving them is the exporter's job.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Model {
    entities: IndexMap<String, Entity>,
    relationships: Vec<Relationship>,
}

impl Model {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity, replacing any earlier entity with the same name.
    ///
    /// A replaced entity keeps its original position in iteration order.
    /// Returns the entity that was replaced, if any.
    pub fn insert_entity(&mut self, entity: Entity) -> Option<Entity> {
        self.entities.insert(entity.name().to_string(), entity)
    }

    /// Append a relationship. Duplicates are kept.
    pub fn push_relationship(&mut self, relationship: Relationship) {
        self.relationships.push(relationship);
    }

    /// Look up an entity by name.
    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.entities.get(name)
    }

    /// Iterate over entities in declaration order.
    pub fn entities(&self) -> impl ExactSizeIterator<Item = &Entity> {
        self.entities.values()
    }

    /// Borrow the relationships in declaration order.
    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    /// Number of distinct entities.
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Returns `true` if the model has neither entities nor relationships.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty() && self.relationships.is_empty()
    }
}
